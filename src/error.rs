// Errors from acquiring the drawing surface. Nothing past start-up fails loudly.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no canvas element with id `{0}`")]
    CanvasNotFound(String),
    #[error("canvas has no 2d context")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(format!("{:?}", value))
    }
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SurfaceError::CanvasNotFound("bg".to_owned()).to_string(),
            "no canvas element with id `bg`"
        );
        assert_eq!(
            SurfaceError::ContextUnavailable.to_string(),
            "canvas has no 2d context"
        );
    }
}
