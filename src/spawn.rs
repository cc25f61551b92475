// Spawn planning for the particle pool: how many particles fit the viewport,
// where each one sits horizontally, when it appears and how long its cycle is.

use crate::config::ShapesConfig;
use rand::seq::SliceRandom;
use rand::Rng;

const COUNT_EPSILON: f64 = 1e-9;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnEntry {
    pub index: usize,
    pub delay_ms: f64,
    pub base_x: f64,
    pub duration_ms: f64,
}

/// Number of particles for a viewport `width` pixels wide.
///
/// `density` particles are spread over every `reference_unit` pixels; the result
/// is floored, and anything non-finite or non-positive gives an empty pool.
pub fn particle_count(density: f64, width: f64, reference_unit: f64) -> usize {
    // absorb float error so an exact product like 0.57 * 100 is not floored to 56
    let count = (density * width / reference_unit + COUNT_EPSILON).floor();
    if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        0
    }
}

/// Staggered spawn delays: `total_ms / count` scaled by a random permutation
/// of `0..count`, so no two particles spawn together.
pub fn stagger_delays<R: Rng + ?Sized>(count: usize, total_ms: f64, rng: &mut R) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = total_ms / count as f64;
    let mut ranks: Vec<usize> = (0..count).collect();
    ranks.shuffle(rng);
    ranks.into_iter().map(|rank| step * rank as f64).collect()
}

/// Uniform in `[avg / 2, avg * 3 / 2]` seconds, returned in milliseconds.
pub fn random_duration_ms<R: Rng + ?Sized>(avg_secs: f64, rng: &mut R) -> f64 {
    let half = avg_secs / 2.0;
    let secs = avg_secs - half + rng.gen::<f64>() * avg_secs;
    secs * 1000.0
}

pub fn plan<R: Rng + ?Sized>(config: &ShapesConfig, width: f64, rng: &mut R) -> Vec<SpawnEntry> {
    let count = particle_count(config.density(), width, config.reference_unit());
    if count == 0 {
        return Vec::new();
    }
    let spacing = width / count as f64;
    let delays = stagger_delays(count, config.total_duration_ms(), rng);
    delays
        .into_iter()
        .enumerate()
        .map(|(index, delay_ms)| SpawnEntry {
            index,
            delay_ms,
            base_x: spacing * index as f64,
            duration_ms: random_duration_ms(config.avg_duration_secs(), rng),
        })
        .collect()
}
