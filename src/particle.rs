// Particle struct keeping track of one shape's timing, its base column and the
// displacement it has picked up from being pushed around by the pointer.

use crate::color::Colour;
use crate::spawn::SpawnEntry;
use vecmath::{vec2_add, vec2_len, Vector2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    Triangle,
    Square,
    Circle,
}

impl ShapeType {
    pub fn from_index(index: usize) -> ShapeType {
        match index % 3 {
            0 => ShapeType::Triangle,
            1 => ShapeType::Square,
            _ => ShapeType::Circle,
        }
    }
}

/// Canvas size the particles wrap around.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Pointer interaction settings shared by every particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Repulsion {
    pub radius: f64,
    pub damping: f64,
}

/// Where and how a particle should be drawn this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub fill: Colour,
    pub rotation_deg: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub shape: ShapeType,
    pub base_x: f64,
    pub spawn_delay_ms: f64,
    pub duration_ms: f64,
    pub size: f64,
    pub colour: Colour,
    pub displacement: Vector2<f64>,
    pub pos: Vector2<f64>,
}

impl Particle {
    pub const DEGREES_PER_CYCLE: f64 = 720.0;

    pub fn new(entry: &SpawnEntry, size: f64, colour: Colour) -> Particle {
        Particle {
            index: entry.index,
            shape: ShapeType::from_index(entry.index),
            base_x: entry.base_x,
            spawn_delay_ms: entry.delay_ms,
            duration_ms: entry.duration_ms,
            size,
            colour,
            displacement: [0.0, 0.0],
            pos: [entry.base_x, 0.0],
        }
    }

    /// Advances the particle to `now_ms` and returns how to draw it.
    pub fn update(
        &mut self,
        pointer: Option<Vector2<f64>>,
        now_ms: f64,
        bounds: Bounds,
        repulsion: Repulsion,
        min_alpha: f64,
    ) -> Frame {
        if let Some(pointer) = pointer {
            let delta = [
                wrapped_delta(self.pos[0] - pointer[0], bounds.width),
                wrapped_delta(self.pos[1] - pointer[1], bounds.height),
            ];
            if vec2_len(delta) < repulsion.radius {
                self.displacement = vec2_add(self.displacement, push(delta, repulsion.damping));
            }
        }

        let progress = animation_progress(now_ms, self.spawn_delay_ms, self.duration_ms);
        let x = wrap(self.base_x + self.displacement[0], bounds.width);
        let y = wrap(progress * bounds.height + self.displacement[1], bounds.height);
        self.pos = [x, y];

        let vertical = if bounds.height > 0.0 { y / bounds.height } else { 0.0 };
        Frame {
            x,
            y,
            fill: self.colour.with_alpha(fade_alpha(self.colour.a, vertical, min_alpha)),
            rotation_deg: vertical * Particle::DEGREES_PER_CYCLE,
        }
    }
}

/// Shortest signed distance on a ring of circumference `extent`.
pub fn wrapped_delta(delta: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        delta
    } else if delta > extent / 2.0 {
        delta - extent
    } else if delta < -extent / 2.0 {
        delta + extent
    } else {
        delta
    }
}

fn push(delta: Vector2<f64>, damping: f64) -> Vector2<f64> {
    [delta[0] / damping, delta[1] / damping]
}

/// `value` folded into `[0, extent)`.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Fraction of the current cycle elapsed, in `[0, 1)`.
pub fn animation_progress(now_ms: f64, delay_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 0.0;
    }
    wrap((now_ms - delay_ms) / duration_ms, 1.0)
}

/// Linear fade from `alpha` at the top to `alpha * floor` at the bottom.
pub fn fade_alpha(alpha: f64, vertical_progress: f64, floor: f64) -> f64 {
    alpha * (1.0 - vertical_progress).max(floor)
}
