// The drawing surface seam. The browser canvas implements `Surface` in
// `renderer`; `RecordingSurface` keeps draw calls in memory.

use crate::color::Color;
use std::convert::Infallible;
use vecmath::Vector2;

pub trait Surface {
    type Error;

    // Resizes the backing buffer. Anything drawn before is lost.
    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error>;
}

// Owns the surface and the dimensions it was last sized to.
#[derive(Debug)]
pub struct SurfaceManager<S> {
    surface: S,
    width: u32,
    height: u32,
}

impl<S: Surface> SurfaceManager<S> {
    pub fn new(surface: S) -> Self {
        SurfaceManager {
            surface,
            width: 0,
            height: 0,
        }
    }

    // Matches the surface to a viewport size. Negative and NaN sizes become
    // zero.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) -> (u32, u32) {
        self.width = to_pixels(viewport_width);
        self.height = to_pixels(viewport_height);
        self.surface.set_size(self.width, self.height);
        (self.width, self.height)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn to_pixels(extent: f64) -> u32 {
    // `as` saturates and maps NaN to 0
    extent.max(0.0) as u32
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear { width: u32, height: u32 },
    Circle { center: Vector2<f64>, radius: f64, color: Color },
    Line { from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color },
}

// In-memory surface that logs every call, for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.last_frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn set_size(&mut self, width: u32, height: u32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self, width: u32, height: u32) -> Result<(), Infallible> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle { center, radius, color });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line { from, to, width, color });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clamps_bad_dimensions() {
        let mut manager = SurfaceManager::new(RecordingSurface::new());
        assert_eq!(manager.resize(-20.0, std::f64::NAN), (0, 0));
        assert_eq!(manager.resize(1280.7, 720.0), (1280, 720));
        assert_eq!(manager.dimensions(), (1280, 720));
        assert_eq!(
            manager.surface().commands,
            vec![DrawCommand::Resize {
                width: 1280,
                height: 720
            }]
        );
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut surface = RecordingSurface::new();
        let color = Color::rgb(1, 2, 3);
        surface.clear(10, 10).unwrap();
        surface.fill_circle([1.0, 1.0], 1.0, color).unwrap();
        surface.clear(10, 10).unwrap();
        surface.stroke_line([0.0, 0.0], [1.0, 1.0], 0.5, color).unwrap();
        assert_eq!(surface.circles().count(), 0);
        assert_eq!(surface.lines().count(), 1);
    }
}
