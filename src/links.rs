// Proximity links: faint lines between particles that are close to each
// other or to the pointer, fading linearly to nothing at the threshold.

use crate::particle::Particle;
use vecmath::{vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub alpha: f64,
}

pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    vec2_len(vec2_sub(a, b))
}

// `max_alpha * (1 - distance / threshold)` when strictly inside the
// threshold, `None` otherwise.
pub fn link_alpha(distance: f64, threshold: f64, max_alpha: f64) -> Option<f64> {
    if distance < threshold {
        Some(max_alpha * (1.0 - distance / threshold))
    } else {
        None
    }
}

// Every unordered pair `i < j` closer than `threshold`. Quadratic, which is
// fine for the capped particle count.
pub fn particle_links(particles: &[Particle], threshold: f64, max_alpha: f64) -> Vec<Link> {
    let mut links = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(alpha) = link_alpha(distance(a.pos, b.pos), threshold, max_alpha) {
                links.push(Link {
                    from: a.pos,
                    to: b.pos,
                    alpha,
                });
            }
        }
    }
    links
}

pub fn pointer_links(
    particles: &[Particle],
    pointer: Vector2<f64>,
    threshold: f64,
    max_alpha: f64,
) -> Vec<Link> {
    particles
        .iter()
        .filter_map(|p| {
            link_alpha(distance(p.pos, pointer), threshold, max_alpha).map(|alpha| Link {
                from: p.pos,
                to: pointer,
                alpha,
            })
        })
        .collect()
}
