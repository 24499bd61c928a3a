//! Per-frame geometry for the ring sketch.
//!
//! Pure math shared by both frontends: given a snapshot of the parameter
//! store, a time in milliseconds and the canvas size, emit the dot centers
//! for this frame. Rendering (trail fade, instancing) stays in the
//! frontends.

use glam::Vec2;

use crate::constants::{ARC_STEP, RADIUS_DIVISOR, RING_SHRINK_STEP};
use crate::noise::NoiseField;
use crate::params::{ParamId, ParameterStore};

/// Number of dots laid along one ring.
pub fn dots_per_ring() -> usize {
    (std::f32::consts::TAU / ARC_STEP).ceil() as usize
}

/// Dot count the instance buffers must accommodate.
pub fn max_dots() -> usize {
    crate::constants::MAX_RINGS * dots_per_ring()
}

/// Compute the dot centers for one frame into `out`.
///
/// Positions are in pixels relative to the canvas center, y down. The caller
/// snapshots the store first so a slider write mid-frame cannot tear a
/// frame. Each ring shrinks by a fixed fraction of the outer radius, and the
/// noise lookup is offset per ring so rings wobble independently.
pub fn build_frame(
    store: &ParameterStore,
    noise: &mut NoiseField,
    time_ms: f32,
    width: f32,
    height: f32,
    out: &mut Vec<Vec2>,
) {
    out.clear();

    let time_multiplier = store.get(ParamId::TimeMultiplier);
    let noise_size = store.get(ParamId::NoiseSize);
    let noise_scale = store.get(ParamId::NoiseScale);
    let octaves = store.get(ParamId::NoiseDetailOctave);
    let falloff = store.get(ParamId::NoiseDetailFalloff);
    let noise_offset = store.get(ParamId::NoiseOffset);
    let rings = store.get(ParamId::NumberOfCircles) as usize;

    noise.set_detail(octaves as i32, falloff);

    let time = time_ms * time_multiplier;
    let base_radius = width.min(height) / RADIUS_DIVISOR;
    // The noise displacement is one-sided; recenter by half its amplitude.
    let center_nudge = noise_size / 2.0;
    let steps = dots_per_ring();

    let mut shrink = 1.0_f32;
    for ring in 0..rings {
        let size = base_radius * shrink;
        let ring_offset = ARC_STEP * ring as f32 * noise_offset;
        for step in 0..steps {
            let angle = step as f32 * ARC_STEP;
            let n = (angle + ring_offset) * noise_scale;
            let x_noise = noise.sample(n, time);
            let y_noise = noise.sample(time, n);
            let x = size * angle.cos() + x_noise * noise_size - center_nudge;
            let y = size * angle.sin() + y_noise * noise_size - center_nudge;
            out.push(Vec2::new(x, y));
        }
        shrink -= RING_SHRINK_STEP;
    }
}
