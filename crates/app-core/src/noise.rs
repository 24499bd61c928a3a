//! Seeded value-noise field with tunable octave detail.
//!
//! This reproduces the noise the sketch was designed around (p5.js `noise` /
//! `noiseDetail`): a 4096-entry table of uniform randoms sampled with a
//! cosine-smoothed blend, summing `octaves` layers where each layer doubles
//! the frequency and scales amplitude by `falloff`. The octave count and
//! falloff are user-tunable at runtime, so they live on the field rather
//! than being baked into the sampler.

use rand::prelude::*;

const PERLIN_YWRAPB: usize = 4;
const PERLIN_YWRAP: usize = 1 << PERLIN_YWRAPB;
const PERLIN_SIZE: usize = 4095;

pub const DEFAULT_OCTAVES: u32 = 4;
pub const DEFAULT_FALLOFF: f32 = 0.5;

pub struct NoiseField {
    table: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl NoiseField {
    /// Build the random table from `seed`. The same seed always yields the
    /// same field.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let table = (0..=PERLIN_SIZE).map(|_| rng.gen::<f32>()).collect();
        Self {
            table,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    /// Adjust octave count and per-octave amplitude falloff. Non-positive
    /// arguments leave the current setting untouched.
    pub fn set_detail(&mut self, octaves: i32, falloff: f32) {
        if octaves > 0 {
            self.octaves = octaves as u32;
        }
        if falloff > 0.0 {
            self.falloff = falloff;
        }
    }

    /// Sample the field at `(x, y)`. With the default falloff the output is
    /// in `[0, 1)`; a falloff above 0.5 can push the octave sum past 1.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let x = x.abs();
        let y = y.abs();

        let mut xi = x.floor() as usize;
        let mut yi = y.floor() as usize;
        let mut xf = x - x.floor();
        let mut yf = y - y.floor();

        let mut r = 0.0_f32;
        let mut ampl = 0.5_f32;

        for _ in 0..self.octaves {
            let of = xi + (yi << PERLIN_YWRAPB);
            let rxf = scaled_cosine(xf);
            let ryf = scaled_cosine(yf);

            let mut n1 = self.table[of & PERLIN_SIZE];
            n1 += rxf * (self.table[(of + 1) & PERLIN_SIZE] - n1);
            let mut n2 = self.table[(of + PERLIN_YWRAP) & PERLIN_SIZE];
            n2 += rxf * (self.table[(of + PERLIN_YWRAP + 1) & PERLIN_SIZE] - n2);
            n1 += ryf * (n2 - n1);

            r += n1 * ampl;
            ampl *= self.falloff;

            xi <<= 1;
            xf *= 2.0;
            yi <<= 1;
            yf *= 2.0;
            if xf >= 1.0 {
                xi += 1;
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi += 1;
                yf -= 1.0;
            }
        }
        r
    }
}

#[inline]
fn scaled_cosine(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}
