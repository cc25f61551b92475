//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use shapes_bg::spawn::particle_count;
use shapes_bg::{DriverState, ShapesBackground, ShapesConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(id: &str) -> HtmlCanvasElement {
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

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

// Every spawn delay is below avg_duration_secs * 1000
fn quick_config() -> ShapesConfig {
    let mut config = ShapesConfig::new();
    config.set_avg_duration_secs(0.2);
    config
}

#[wasm_bindgen_test]
async fn spawn_timers_fill_the_pool() {
    let window = web_sys::window().unwrap();
    let config = quick_config();
    let mut background = ShapesBackground::new(canvas("filled"), &config);
    background.start();
    sleep(400).await;

    let width = window.inner_width().unwrap().as_f64().unwrap();
    let expected = particle_count(config.density(), width, config.reference_unit());
    assert_eq!(background.particle_count(), expected);
    background.stop();
}

#[wasm_bindgen_test]
async fn nothing_spawns_after_stop() {
    let mut background = ShapesBackground::new(canvas("stopped"), &quick_config());
    background.start();
    background.stop();
    sleep(400).await;

    assert_eq!(background.particle_count(), 0);
    assert_eq!(background.state(), DriverState::Idle);

    // restarting after a stop builds a fresh pool
    background.start();
    assert!(background.is_running());
    background.stop();
}

#[wasm_bindgen_test]
fn start_and_stop_cycle_the_state() {
    let mut background = ShapesBackground::new(canvas("cycle"), &ShapesConfig::new());
    assert_eq!(background.state(), DriverState::Idle);

    background.start();
    assert!(background.is_running());
    background.start();
    assert!(background.is_running());

    background.stop();
    assert_eq!(background.state(), DriverState::Idle);
    assert_eq!(background.particle_count(), 0);
    background.stop();
}

#[wasm_bindgen_test]
fn start_sizes_the_canvas_to_the_window() {
    let window = web_sys::window().unwrap();
    let element = canvas("sized");
    let mut background = ShapesBackground::new(element.clone(), &ShapesConfig::new());
    background.start();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(element.width(), width as u32);
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(ShapesBackground::from_canvas_id("no-such-canvas", &ShapesConfig::new()).is_err());
}

#[wasm_bindgen_test]
fn canvas_found_by_id() {
    canvas("by-id");
    let background = ShapesBackground::from_canvas_id("by-id", &ShapesConfig::new()).unwrap();
    assert!(!background.is_running());
}
