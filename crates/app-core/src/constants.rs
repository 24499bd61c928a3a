// Shared sketch tuning constants used by both frontends.

/// Fixed canvas size used by the web frontend (pixels).
pub const CANVAS_SIZE: u32 = 300;

// Ring layout
pub const ARC_STEP: f32 = 0.005; // radians between consecutive dots
pub const RING_SHRINK_STEP: f32 = 0.05; // outer-radius fraction lost per ring
pub const RADIUS_DIVISOR: f32 = 2.5; // outer radius = min(w, h) / RADIUS_DIVISOR

// Dots
pub const DOT_DIAMETER: f32 = 3.0;
pub const DOT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Translucent fade drawn over the previous frame instead of a clear
// (#640D5F at 0x40 alpha)
pub const FADE_COLOR: [f32; 4] = [100.0 / 255.0, 13.0 / 255.0, 95.0 / 255.0, 64.0 / 255.0];

// Accumulation target starts out as an opaque black background
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Seed for the noise table; fixed so both frontends draw the same field.
pub const NOISE_SEED: u64 = 42;

/// Ring count the instance buffers are sized for (the slider maxes out here).
pub const MAX_RINGS: usize = 10;
