mod utils;

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod observers;
pub mod particle;
pub mod renderer;
pub mod scene;
pub mod spawn;
pub mod stage;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use color::Colour;
pub use config::ShapesConfig;
pub use driver::{DriverState, ShapesBackground};
pub use error::SurfaceError;
pub use particle::{Particle, ShapeType};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and routes `log` output to the browser console.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already initialized");
    }
}

/// Convenience for pages that only need one background: builds it on the
/// canvas with `canvas_id` and starts it.
#[wasm_bindgen]
pub fn start_on(canvas_id: &str, config: &ShapesConfig) -> Result<ShapesBackground, JsValue> {
    let mut background = ShapesBackground::from_canvas_id(canvas_id, config)?;
    background.start();
    Ok(background)
}

// Times the enclosing scope with console.time / console.timeEnd
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
