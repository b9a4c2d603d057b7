//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_backdrop::{start_particle_background, start_with_config};
use particle_backdrop::config::FieldConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_inert() {
    let background = start_particle_background(Some("no-such-canvas".to_owned())).unwrap();
    assert!(!background.is_active());
    assert_eq!(background.particle_count(), 0);
}

#[wasm_bindgen_test]
fn non_canvas_element_is_inert() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    let background = start_particle_background(Some("not-a-canvas".to_owned())).unwrap();
    assert!(!background.is_active());
}

#[wasm_bindgen_test]
fn canvas_bound_to_another_context_is_inert() {
    let canvas = add_canvas("particles-bitmap");
    let _ = canvas.get_context("bitmaprenderer").unwrap();

    let background = start_particle_background(Some("particles-bitmap".to_owned())).unwrap();
    assert!(!background.is_active());
    assert!(background.loop_handle().is_none());
}

#[wasm_bindgen_test]
fn dropping_the_handle_keeps_animating() {
    add_canvas("particles-dropped");
    let background = start_with_config("particles-dropped", FieldConfig::default()).unwrap();
    let handle = background.loop_handle().unwrap();
    drop(background);
    assert!(handle.is_running());

    // resize listener is still attached and its closure still alive
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
    assert!(handle.is_running());
}

#[wasm_bindgen_test]
fn canvas_is_sized_to_viewport_and_seeded() {
    let canvas = add_canvas("particles-live");
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;

    let mut background = start_with_config("particles-live", FieldConfig::default()).unwrap();
    assert!(background.is_active());
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.height(), height);
    assert_eq!(background.particle_count(), FieldConfig::default().particle_count(width));

    let handle = background.loop_handle().unwrap();
    background.stop();
    assert!(!handle.is_running());
    assert!(!background.is_active());
    assert_eq!(background.particle_count(), 0);
}
