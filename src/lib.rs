mod utils;

pub mod color;
pub mod config;
pub mod field;
pub mod links;
pub mod particle;
pub mod pointer;
pub mod render_loop;
pub mod renderer;
pub mod scene;
pub mod surface;

use crate::config::FieldConfig;
use crate::render_loop::{LoopHandle, RenderLoop};
use crate::renderer::CanvasRenderer;
use crate::scene::Backdrop;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, MouseEvent, Window};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub const DEFAULT_CANVAS_ID: &str = "particles";

type CanvasBackdrop = Backdrop<CanvasRenderer, StdRng>;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Handle to a running backdrop. Inert when the page has no usable canvas.
// Only `stop` ends the animation; dropping or garbage collecting the handle
// leaves it running for the life of the page.
#[wasm_bindgen]
pub struct ParticleBackground {
    running: Option<Running>,
}

struct Running {
    window: Window,
    document: Document,
    backdrop: Rc<RefCell<CanvasBackdrop>>,
    handle: LoopHandle,
    on_resize: Closure<dyn FnMut()>,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
}

impl Running {
    fn attach(&self) -> Result<(), JsValue> {
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
        self.document.add_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        )?;
        Ok(())
    }

    // Stops the loop and removes the listeners before their closures drop.
    fn detach(self) {
        self.handle.stop();
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        );
    }

    // Hands the listener closures to the JS side so they outlive the handle.
    fn forget(self) {
        self.on_resize.forget();
        self.on_mouse_move.forget();
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.forget();
        }
    }
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn is_active(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| running.handle.is_running())
    }

    pub fn particle_count(&self) -> usize {
        self.running
            .as_ref()
            .map_or(0, |running| running.backdrop.borrow().field().len())
    }

    // Stops scheduling frames and detaches the input listeners.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.detach();
            info!("particle background stopped");
        }
    }
}

impl ParticleBackground {
    fn inert() -> Self {
        ParticleBackground { running: None }
    }

    pub fn loop_handle(&self) -> Option<LoopHandle> {
        self.running.as_ref().map(|running| running.handle.clone())
    }
}

// Starts the backdrop on the canvas with the given id (`particles` when
// omitted).
#[wasm_bindgen]
pub fn start_particle_background(
    canvas_id: Option<String>,
) -> Result<ParticleBackground, JsValue> {
    let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_owned());
    start_with_config(&canvas_id, FieldConfig::default())
}

pub fn start_with_config(
    canvas_id: &str,
    config: FieldConfig,
) -> Result<ParticleBackground, JsValue> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Ok(ParticleBackground::inert()),
    };
    let document = match window.document() {
        Some(document) => document,
        None => return Ok(ParticleBackground::inert()),
    };
    let canvas = match document
        .get_element_by_id(canvas_id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
    {
        Some(canvas) => canvas,
        None => return Ok(ParticleBackground::inert()),
    };
    let renderer = match CanvasRenderer::new(canvas) {
        Some(renderer) => renderer,
        None => return Ok(ParticleBackground::inert()),
    };

    let (width, height) = viewport_size(&window);
    let backdrop = Rc::new(RefCell::new(Backdrop::new(
        renderer,
        StdRng::from_entropy(),
        config,
        width,
        height,
    )));

    let on_resize = {
        let backdrop = backdrop.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let (width, height) = viewport_size(&window);
            backdrop.borrow_mut().resize(width, height);
        }) as Box<dyn FnMut()>)
    };

    let on_mouse_move = {
        let backdrop = backdrop.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            backdrop
                .borrow_mut()
                .on_pointer_move(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let render_loop = RenderLoop::new(backdrop.clone());
    let handle = render_loop.handle();
    // Owns the closures before any listener is added, so a failure part way
    // through can detach whatever was attached.
    let running = Running {
        window,
        document,
        backdrop,
        handle,
        on_resize,
        on_mouse_move,
    };
    let started = running
        .attach()
        .and_then(|_| schedule_frames(&running.window, render_loop));
    if let Err(err) = started {
        running.detach();
        return Err(err);
    }

    info!(
        "particle background started on #{} with {} particles",
        canvas_id,
        running.backdrop.borrow().field().len()
    );
    Ok(ParticleBackground {
        running: Some(running),
    })
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

// The frame closure reschedules itself through `request_animation_frame`
// until the loop is stopped, then drops itself to break the Rc cycle.
fn schedule_frames(
    window: &Window,
    mut render_loop: RenderLoop<CanvasRenderer, StdRng>,
) -> Result<(), JsValue> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        #[cfg(feature = "frame-timing")]
        let _timer = Timer::new("particle frame");

        let again = match render_loop.tick() {
            Ok(again) => again,
            Err(err) => {
                warn!("particle frame failed: {:?}", err);
                render_loop.handle().is_running()
            }
        };
        if !again {
            debug!("render loop ended after {} frames", render_loop.frames());
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let scheduled = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
            if let Err(err) = scheduled {
                warn!("could not schedule particle frame: {:?}", err);
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = match frame.borrow().as_ref() {
        Some(callback) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(|_| ()),
        None => Ok(()),
    };
    if scheduled.is_err() {
        let _ = frame.borrow_mut().take();
    }
    scheduled
}
