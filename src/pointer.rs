// Last known pointer position in surface coordinates. Starts far outside any
// real surface so nothing links to it before the first move event.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerTracker {
    pub pos: [f64; 2],
}

impl PointerTracker {
    pub fn new(sentinel: [f64; 2]) -> Self {
        PointerTracker { pos: sentinel }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pos = [x, y];
    }

    pub fn position(&self) -> [f64; 2] {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POINTER_SENTINEL;

    #[test]
    fn latest_move_wins() {
        let mut pointer = PointerTracker::new(POINTER_SENTINEL);
        assert_eq!(pointer.position(), POINTER_SENTINEL);
        pointer.on_pointer_move(10.0, 20.0);
        pointer.on_pointer_move(30.0, 40.0);
        assert_eq!(pointer.position(), [30.0, 40.0]);
    }
}
