pub mod constants;
pub mod noise;
pub mod params;
pub mod sketch;
pub static SKETCH_WGSL: &str = include_str!("../shaders/sketch.wgsl");

pub use constants::*;
pub use noise::*;
pub use params::*;
pub use sketch::*;
