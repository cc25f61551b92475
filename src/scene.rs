// The live particle pool for one viewport size. Knows nothing about the
// browser: the driver feeds it spawn entries, pointer positions and timestamps.

use crate::config::ShapesConfig;
use crate::observers::{PointerPosition, WindowDimensions};
use crate::particle::{Bounds, Particle, Repulsion};
use crate::renderer::{self, Surface};
use crate::spawn::SpawnEntry;

pub struct Scene {
    config: ShapesConfig,
    dimensions: WindowDimensions,
    particles: Vec<Particle>,
}

impl Scene {
    pub fn new(config: ShapesConfig, dimensions: WindowDimensions) -> Scene {
        Scene {
            config,
            dimensions,
            particles: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Makes a planned particle live. Particles stay sorted by index whatever
    /// order their timers fire in; spawning an index twice is ignored.
    pub fn spawn(&mut self, entry: &SpawnEntry) {
        match self
            .particles
            .binary_search_by_key(&entry.index, |p| p.index)
        {
            Ok(_) => {}
            Err(at) => {
                let particle =
                    Particle::new(entry, self.config.shape_size(), self.config.colour());
                self.particles.insert(at, particle);
            }
        }
    }

    /// Clears the surface, then updates and draws every live particle.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        pointer: Option<PointerPosition>,
        now_ms: f64,
    ) {
        let bounds = Bounds {
            width: self.dimensions.width,
            height: self.dimensions.height,
        };
        let repulsion = Repulsion {
            radius: self.config.repulsion_radius(),
            damping: self.config.damping(),
        };
        let pointer = pointer.map(|p| [p.x, p.y]);

        surface.clear(bounds.width, bounds.height);
        for particle in &mut self.particles {
            let frame = particle.update(pointer, now_ms, bounds, repulsion, self.config.min_alpha());
            if let Err(err) = renderer::draw_frame(surface, particle.shape, particle.size, &frame) {
                log::debug!("failed to draw particle {}: {:?}", particle.index, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ShapeType;
    use crate::renderer::tests::{Call, Recorder};
    use crate::spawn;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dims(width: f64, height: f64) -> WindowDimensions {
        WindowDimensions { width, height }
    }

    fn planned_scene(width: f64) -> (Scene, Vec<SpawnEntry>) {
        let config = ShapesConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let entries = spawn::plan(&config, width, &mut rng);
        (Scene::new(config, dims(width, 800.0)), entries)
    }

    #[test]
    fn landing_page_defaults_give_45_cycling_shapes() {
        let (mut scene, entries) = planned_scene(1000.0);
        for entry in &entries {
            scene.spawn(entry);
        }
        assert_eq!(scene.len(), 45);
        for (i, particle) in scene.particles().iter().enumerate() {
            assert_eq!(particle.shape, ShapeType::from_index(i));
        }
        assert_eq!(scene.particles()[3].shape, ShapeType::Triangle);
    }

    #[test]
    fn spawn_order_does_not_change_draw_order() {
        let (mut scene, mut entries) = planned_scene(1000.0);
        entries.sort_by(|a, b| a.delay_ms.partial_cmp(&b.delay_ms).unwrap());
        for entry in &entries {
            scene.spawn(entry);
        }
        scene.spawn(&entries[0]);
        assert_eq!(scene.len(), 45);
        let indices: Vec<usize> = scene.particles().iter().map(|p| p.index).collect();
        assert_eq!(indices, (0..45).collect::<Vec<_>>());
    }

    #[test]
    fn tick_clears_before_drawing() {
        let (mut scene, entries) = planned_scene(1000.0);
        scene.spawn(&entries[2]);
        scene.spawn(&entries[0]);

        let surface = Recorder::default();
        scene.tick(&surface, None, 1_000.0);
        let calls = surface.take();
        assert_eq!(calls[0], Call::Clear(1000.0, 800.0));
        assert_eq!(calls.iter().filter(|c| **c == Call::BeginPath).count(), 2);
        // index 0 is a triangle, index 2 a circle
        let first_shape = calls
            .iter()
            .find(|c| matches!(c, Call::MoveTo(..) | Call::Arc(..)))
            .cloned();
        assert!(matches!(first_shape, Some(Call::MoveTo(..))));
    }

    #[test]
    fn empty_scene_only_clears() {
        let (mut scene, entries) = planned_scene(0.0);
        assert!(entries.is_empty());
        let surface = Recorder::default();
        scene.tick(&surface, Some(PointerPosition { x: 1.0, y: 1.0 }), 0.0);
        assert!(scene.is_empty());
        assert_eq!(surface.take(), vec![Call::Clear(0.0, 800.0)]);
    }

    #[test]
    fn pointer_pushes_nearby_particles_only() {
        let config = ShapesConfig::default();
        let mut scene = Scene::new(config, dims(1000.0, 800.0));
        let entry = |index, base_x| SpawnEntry {
            index,
            delay_ms: 0.0,
            base_x,
            duration_ms: 10_000.0,
        };
        scene.spawn(&entry(0, 100.0));
        scene.spawn(&entry(1, 600.0));

        let surface = Recorder::default();
        scene.tick(&surface, None, 0.0);
        scene.tick(&surface, Some(PointerPosition { x: 70.0, y: 0.0 }), 0.0);

        assert_eq!(scene.particles()[0].displacement, [2.0, 0.0]);
        assert_eq!(scene.particles()[1].displacement, [0.0, 0.0]);
    }
}
