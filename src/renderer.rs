// Shape drawing against a 2D drawing surface. The canvas context is the real
// surface; the trait keeps the geometry usable off the browser too.

use crate::particle::{Frame, ShapeType};
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub type SurfaceResult = Result<(), JsValue>;

pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn begin_path(&self);
    fn close_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> SurfaceResult;
    fn fill(&self, style: &str);
    fn translate(&self, x: f64, y: f64) -> SurfaceResult;
    fn rotate(&self, radians: f64) -> SurfaceResult;
    fn reset_transform(&self) -> SurfaceResult;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::rect(self, x, y, width, height);
    }

    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> SurfaceResult {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn fill(&self, style: &str) {
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(style));
        CanvasRenderingContext2d::fill(self);
    }

    fn translate(&self, x: f64, y: f64) -> SurfaceResult {
        CanvasRenderingContext2d::translate(self, x, y)
    }

    fn rotate(&self, radians: f64) -> SurfaceResult {
        CanvasRenderingContext2d::rotate(self, radians)
    }

    fn reset_transform(&self) -> SurfaceResult {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

// Triangle half width relative to the square's side. An equilateral triangle of
// equal area would use 1 / sqrt(sqrt(3)), 1.5 looks better next to the squares.
const TRIANGLE_WIDTH_DIVISOR: f64 = 1.5;

/// Corners of the upward triangle centred on `(x, y)`: apex, bottom left, bottom right.
pub fn triangle_points(x: f64, y: f64, size: f64) -> [[f64; 2]; 3] {
    let half_width = size / TRIANGLE_WIDTH_DIVISOR;
    let height = 3f64.sqrt() * half_width;
    let apex_y = y - height / 1.5;
    let base_y = apex_y + height;
    [
        [x, apex_y],
        [x - half_width, base_y],
        [x + half_width, base_y],
    ]
}

/// Radius giving the circle the same area as a square of side `size`.
pub fn circle_radius(size: f64) -> f64 {
    size / PI.sqrt()
}

/// Draws one shape centred at `(x, y)`, rotated about its centre. The
/// transform is reset even when a path or transform call fails.
pub fn draw_shape<S: Surface + ?Sized>(
    surface: &S,
    shape: ShapeType,
    x: f64,
    y: f64,
    size: f64,
    fill_style: &str,
    rotation_deg: f64,
) -> SurfaceResult {
    let drawn = trace_shape(surface, shape, x, y, size, rotation_deg).map(|()| {
        surface.fill(fill_style);
    });
    let reset = surface.reset_transform();
    drawn.and(reset)
}

fn trace_shape<S: Surface + ?Sized>(
    surface: &S,
    shape: ShapeType,
    x: f64,
    y: f64,
    size: f64,
    rotation_deg: f64,
) -> SurfaceResult {
    surface.begin_path();
    surface.translate(x, y)?;
    surface.rotate(rotation_deg.to_radians())?;
    surface.translate(-x, -y)?;

    match shape {
        ShapeType::Triangle => {
            let [apex, left, right] = triangle_points(x, y, size);
            surface.move_to(apex[0], apex[1]);
            surface.line_to(left[0], left[1]);
            surface.line_to(right[0], right[1]);
        }
        ShapeType::Square => {
            let half = size / 2.0;
            surface.rect(x - half, y - half, size, size);
        }
        ShapeType::Circle => {
            surface.arc(x, y, circle_radius(size), 0.0, PI * 2.0)?;
        }
    }
    surface.close_path();
    Ok(())
}

pub fn draw_frame<S: Surface + ?Sized>(
    surface: &S,
    shape: ShapeType,
    size: f64,
    frame: &Frame,
) -> SurfaceResult {
    draw_shape(
        surface,
        shape,
        frame.x,
        frame.y,
        size,
        &frame.fill.to_css(),
        frame.rotation_deg,
    )
}
