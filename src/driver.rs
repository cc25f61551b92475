// Animation driver: owns the canvas, the observers and the per-frame callback.
// Idle until `start`, Running until `stop` (or until it is dropped).

use crate::config::ShapesConfig;
use crate::error::SurfaceError;
use crate::observers::{Observers, WindowDimensions};
use crate::spawn;
use crate::stage::{Stage, TimerHandle};
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

#[wasm_bindgen]
pub struct ShapesBackground {
    canvas: HtmlCanvasElement,
    config: ShapesConfig,
    running: Option<Running>,
}

#[wasm_bindgen]
impl ShapesBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: &ShapesConfig) -> ShapesBackground {
        ShapesBackground {
            canvas,
            config: *config,
            running: None,
        }
    }

    pub fn from_canvas_id(id: &str, config: &ShapesConfig) -> Result<ShapesBackground, JsValue> {
        let canvas = find_canvas(id)?;
        Ok(ShapesBackground::new(canvas, config))
    }

    /// Starts animating. Does nothing if already running or if the canvas
    /// has no 2d context.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        match Running::start(&self.canvas, self.config) {
            Ok(running) => {
                log::info!("shapes background started");
                self.running = Some(running);
            }
            Err(err) => log::warn!("shapes background not started: {}", err),
        }
    }

    /// Cancels the pending frame and spawn timers and detaches the listeners.
    pub fn stop(&mut self) {
        if let Some(mut running) = self.running.take() {
            running.stop();
            log::info!("shapes background stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Number of particles currently live on the canvas.
    pub fn particle_count(&self) -> usize {
        self.running
            .as_ref()
            .map(|running| running.stage.borrow().scene().len())
            .unwrap_or(0)
    }

    pub fn config(&self) -> ShapesConfig {
        self.config
    }
}

impl ShapesBackground {
    pub fn state(&self) -> DriverState {
        if self.running.is_some() {
            DriverState::Running
        } else {
            DriverState::Idle
        }
    }
}

impl Drop for ShapesBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::CanvasNotFound(id.to_owned()))
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

type BrowserStage = Stage<Closure<dyn FnMut()>>;

// Throws away the current particles and plans a new pool for `dimensions`
fn rebuild(
    stage: &Rc<RefCell<BrowserStage>>,
    window: &Window,
    canvas: &HtmlCanvasElement,
    dimensions: WindowDimensions,
) {
    let _timer = Timer::new("ShapesBackground::rebuild");
    let mut this = stage.borrow_mut();
    cancel_timers(window, this.reset(dimensions, now_ms(window)));
    canvas.set_width(dimensions.width as u32);
    canvas.set_height(dimensions.height as u32);
    if dimensions.is_empty() {
        return;
    }

    let entries = spawn::plan(this.config(), dimensions.width, &mut rand::thread_rng());
    log::debug!(
        "planned {} particles for {}x{}",
        entries.len(),
        dimensions.width,
        dimensions.height
    );
    let generation = this.generation();
    for entry in entries {
        let weak = Rc::downgrade(stage);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(stage) = weak.upgrade() {
                stage.borrow_mut().spawn(generation, &entry);
            }
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            entry.delay_ms as i32,
        ) {
            Ok(handle) => this.track(handle, callback),
            Err(err) => {
                log::debug!("spawn timer failed, spawning now: {:?}", err);
                this.spawn(generation, &entry);
            }
        }
    }
}

fn cancel_timers(window: &Window, timers: Vec<(TimerHandle, Closure<dyn FnMut()>)>) {
    for (handle, _callback) in timers {
        window.clear_timeout_with_handle(handle);
    }
}

struct Running {
    window: Window,
    observers: Observers,
    stage: Rc<RefCell<BrowserStage>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl Running {
    fn start(canvas: &HtmlCanvasElement, config: ShapesConfig) -> Result<Running, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let context = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;

        let observers = Observers::attach(&window);
        let observed = observers.observed();
        let stage = Rc::new(RefCell::new(Stage::new(config)));
        rebuild(&stage, &window, canvas, observed.dimensions());

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            let window = window.clone();
            let canvas = canvas.clone();
            let stage = stage.clone();
            let frame_handle = frame.clone();
            let frame_id = frame_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                frame_id.set(None);
                let dimensions = observed.dimensions();
                if stage.borrow().needs_rebuild(dimensions) {
                    rebuild(&stage, &window, &canvas, dimensions);
                }
                stage
                    .borrow_mut()
                    .tick(&context, observed.pointer(), timestamp);
                schedule(&window, &frame_handle, &frame_id);
            }) as Box<dyn FnMut(f64)>));
        }
        schedule(&window, &frame, &frame_id);

        Ok(Running {
            window,
            observers,
            stage,
            frame,
            frame_id,
        })
    }

    fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::debug!("cancel_animation_frame failed: {:?}", err);
            }
        }
        // dropping the closure also breaks its reference to `self.frame`
        self.frame.borrow_mut().take();
        cancel_timers(&self.window, self.stage.borrow_mut().stop());
        self.observers.detach();
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(window: &Window, frame: &FrameCallback, frame_id: &Cell<Option<i32>>) {
    if let Some(callback) = frame.borrow().as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => frame_id.set(Some(id)),
            Err(err) => log::warn!("request_animation_frame failed: {:?}", err),
        }
    }
}
