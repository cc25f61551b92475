// The scene for the current viewport plus the bookkeeping for the spawn timers
// that will fill it. `T` is whatever keeps a timer alive; the driver stores its
// wasm closures there and hands drained timers back to the window to cancel.

use crate::config::ShapesConfig;
use crate::observers::{PointerPosition, WindowDimensions};
use crate::renderer::Surface;
use crate::scene::Scene;
use crate::spawn::SpawnEntry;

pub type TimerHandle = i32;

pub struct Stage<T> {
    config: ShapesConfig,
    scene: Scene,
    epoch_ms: f64,
    generation: u64,
    timers: Vec<(TimerHandle, T)>,
}

impl<T> Stage<T> {
    pub fn new(config: ShapesConfig) -> Stage<T> {
        Stage {
            config,
            scene: Scene::new(config, WindowDimensions::default()),
            epoch_ms: 0.0,
            generation: 0,
            timers: Vec::new(),
        }
    }

    pub fn config(&self) -> &ShapesConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Starts an empty scene for `dimensions` with its clock at `epoch_ms`.
    /// Returns the previous generation's timers, which must be cancelled.
    pub fn reset(&mut self, dimensions: WindowDimensions, epoch_ms: f64) -> Vec<(TimerHandle, T)> {
        self.generation += 1;
        self.scene = Scene::new(self.config, dimensions);
        self.epoch_ms = epoch_ms;
        self.timers.drain(..).collect()
    }

    /// Drops the scene and hands back every pending timer. Spawns from any
    /// timer that still fires are ignored afterwards.
    pub fn stop(&mut self) -> Vec<(TimerHandle, T)> {
        let dimensions = self.scene.dimensions();
        self.reset(dimensions, self.epoch_ms)
    }

    pub fn track(&mut self, handle: TimerHandle, timer: T) {
        self.timers.push((handle, timer));
    }

    /// Spawns `entry` if it was planned for the current generation.
    pub fn spawn(&mut self, generation: u64, entry: &SpawnEntry) -> bool {
        if generation != self.generation {
            return false;
        }
        self.scene.spawn(entry);
        true
    }

    pub fn needs_rebuild(&self, dimensions: WindowDimensions) -> bool {
        self.scene.dimensions() != dimensions
    }

    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        pointer: Option<PointerPosition>,
        timestamp: f64,
    ) {
        let now = timestamp - self.epoch_ms;
        self.scene.tick(surface, pointer, now);
    }
}
