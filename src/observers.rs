// Window size and pointer position, kept current by listeners on the window.
// The driver only ever reads these; the listeners are the only writers.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WindowDimensions {
    pub width: f64,
    pub height: f64,
}

impl WindowDimensions {
    pub fn of(window: &Window) -> WindowDimensions {
        let read = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        WindowDimensions {
            width: read(window.inner_width()),
            height: read(window.inner_height()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Read side of the observed state. Cheap to clone into closures.
#[derive(Clone, Debug, Default)]
pub struct Observed {
    dimensions: Rc<Cell<WindowDimensions>>,
    pointer: Rc<Cell<Option<PointerPosition>>>,
}

impl Observed {
    pub fn dimensions(&self) -> WindowDimensions {
        self.dimensions.get()
    }

    /// `None` until the pointer has moved over the window.
    pub fn pointer(&self) -> Option<PointerPosition> {
        self.pointer.get()
    }

    pub(crate) fn set_dimensions(&self, dimensions: WindowDimensions) {
        self.dimensions.set(dimensions);
    }

    pub(crate) fn set_pointer(&self, pointer: PointerPosition) {
        self.pointer.set(Some(pointer));
    }
}

/// Owns the `resize` and `mousemove` listeners for as long as it lives.
pub struct Observers {
    window: Window,
    observed: Observed,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_mouse_move: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl Observers {
    pub fn attach(window: &Window) -> Observers {
        let observed = Observed::default();
        observed.set_dimensions(WindowDimensions::of(window));

        let on_resize = {
            let window = window.clone();
            let observed = observed.clone();
            Closure::wrap(Box::new(move || {
                observed.set_dimensions(WindowDimensions::of(&window));
            }) as Box<dyn FnMut()>)
        };
        let on_mouse_move = {
            let observed = observed.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                observed.set_pointer(PointerPosition {
                    x: event.client_x() as f64,
                    y: event.client_y() as f64,
                });
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        if let Err(err) =
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for resize: {:?}", err);
        }
        if let Err(err) = window
            .add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())
        {
            log::warn!("could not listen for mousemove: {:?}", err);
        }

        Observers {
            window: window.clone(),
            observed,
            on_resize: Some(on_resize),
            on_mouse_move: Some(on_mouse_move),
        }
    }

    pub fn observed(&self) -> Observed {
        self.observed.clone()
    }

    /// Removes both listeners. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(on_resize) = self.on_resize.take() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                log::debug!("could not remove resize listener: {:?}", err);
            }
        }
        if let Some(on_mouse_move) = self.on_mouse_move.take() {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                "mousemove",
                on_mouse_move.as_ref().unchecked_ref(),
            ) {
                log::debug!("could not remove mousemove listener: {:?}", err);
            }
        }
    }
}

impl Drop for Observers {
    fn drop(&mut self) {
        self.detach();
    }
}
