// Frame scheduling. The host calls `RenderLoop::tick` from its
// per-refresh callback and reschedules while it returns `true`.

use crate::scene::{Backdrop, FrameStats};
use crate::surface::Surface;
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Shared stop flag. Clones all refer to the same loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        LoopHandle {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        LoopHandle::new()
    }
}

pub struct RenderLoop<S, R> {
    backdrop: Rc<RefCell<Backdrop<S, R>>>,
    handle: LoopHandle,
    frames: u64,
    last_stats: FrameStats,
}

impl<S: Surface, R: Rng> RenderLoop<S, R> {
    pub fn new(backdrop: Rc<RefCell<Backdrop<S, R>>>) -> Self {
        RenderLoop {
            backdrop,
            handle: LoopHandle::new(),
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    // Renders one frame unless stopped. Returns whether another frame
    // should be scheduled.
    pub fn tick(&mut self) -> Result<bool, S::Error> {
        if !self.handle.is_running() {
            return Ok(false);
        }
        self.last_stats = self.backdrop.borrow_mut().render_frame()?;
        self.frames += 1;
        Ok(self.handle.is_running())
    }

    // Drives up to `max_frames` frames back to back, stopping early if the
    // handle is stopped. Returns the number of frames rendered.
    pub fn run_frames(&mut self, max_frames: u64) -> Result<u64, S::Error> {
        let start = self.frames;
        while self.frames - start < max_frames && self.tick()? {}
        Ok(self.frames - start)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn backdrop(&self) -> &Rc<RefCell<Backdrop<S, R>>> {
        &self.backdrop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render_loop() -> RenderLoop<RecordingSurface, StdRng> {
        let backdrop = Backdrop::new(
            RecordingSurface::new(),
            StdRng::seed_from_u64(21),
            FieldConfig::default(),
            900.0,
            600.0,
        );
        RenderLoop::new(Rc::new(RefCell::new(backdrop)))
    }

    #[test]
    fn runs_bounded_frames() {
        let mut render_loop = render_loop();
        assert_eq!(render_loop.run_frames(10).unwrap(), 10);
        assert_eq!(render_loop.frames(), 10);
        assert_eq!(render_loop.last_stats().particles, 60);
    }

    #[test]
    fn stopped_loop_renders_nothing() {
        let mut render_loop = render_loop();
        let handle = render_loop.handle();
        assert!(render_loop.tick().unwrap());
        handle.stop();
        assert!(!render_loop.tick().unwrap());
        assert_eq!(render_loop.run_frames(5).unwrap(), 0);
        assert_eq!(render_loop.frames(), 1);
    }

    #[test]
    fn pointer_updates_land_between_frames() {
        let mut render_loop = render_loop();
        render_loop.tick().unwrap();
        assert_eq!(render_loop.last_stats().pointer_links, 0);

        let target = render_loop.backdrop().borrow().field().particles()[0].pos;
        render_loop
            .backdrop()
            .borrow_mut()
            .on_pointer_move(target[0], target[1]);
        render_loop.tick().unwrap();
        assert!(render_loop.last_stats().pointer_links >= 1);
    }
}
