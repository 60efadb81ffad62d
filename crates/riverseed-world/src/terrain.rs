//! Height field and domain warp collaborators.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use riverseed_geom::Vec2i;

use crate::config::{Fractal, RiverGenParams};

pub trait Heightmap {
    /// Normalised elevation at a world column. May reuse internal scratch state.
    fn height(&mut self, x: i32, z: i32) -> f32;
}

pub trait Domain {
    fn get_x(&self, x: f32, z: f32) -> f32;
    fn get_z(&self, x: f32, z: f32) -> f32;

    /// Warped column, truncated toward zero.
    #[inline]
    fn warp(&self, x: i32, z: i32) -> Vec2i {
        let (fx, fz) = (x as f32, z as f32);
        Vec2i::new(self.get_x(fx, fz) as i32, self.get_z(fx, fz) as i32)
    }
}

/// Leaves coordinates untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Domain for Identity {
    #[inline]
    fn get_x(&self, x: f32, _z: f32) -> f32 {
        x
    }

    #[inline]
    fn get_z(&self, _x: f32, z: f32) -> f32 {
        z
    }
}

fn simplex(seed: i32) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(seed);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    // Frequency is applied per octave by `fractal2`.
    noise.set_frequency(Some(1.0));
    noise
}

/// Octave sum in `[-1, 1]`.
fn fractal2(noise: &FastNoiseLite, x: f32, z: f32, fractal: &Fractal) -> f32 {
    let mut amp = 1.0_f32;
    let mut freq = 1.0_f32 / fractal.scale.max(0.0001);
    let mut sum = 0.0_f32;
    let mut max_amp = 0.0_f32;
    for _ in 0..fractal.octaves.max(1) {
        sum += noise.get_noise_2d(x * freq, z * freq) * amp;
        max_amp += amp;
        amp *= fractal.persistence;
        freq *= fractal.lacunarity;
    }
    if max_amp > 0.0 { sum / max_amp } else { sum }
}

pub struct NoiseHeightmap {
    noise: FastNoiseLite,
    fractal: Fractal,
    last: f32,
}

impl NoiseHeightmap {
    pub fn new(seed: i32, fractal: Fractal) -> Self {
        Self {
            noise: simplex(seed),
            fractal,
            last: 0.0,
        }
    }

    pub fn from_params(params: &RiverGenParams) -> Self {
        Self::new(params.noise_seed(), params.height.clone())
    }

    /// Value written by the most recent query.
    #[inline]
    pub fn last(&self) -> f32 {
        self.last
    }
}

impl Heightmap for NoiseHeightmap {
    fn height(&mut self, x: i32, z: i32) -> f32 {
        let n = fractal2(&self.noise, x as f32, z as f32, &self.fractal);
        self.last = ((n + 1.0) * 0.5).clamp(0.0, 1.0);
        self.last
    }
}

/// Offsets each axis by an independent noise scaled by `amplitude`.
pub struct NoiseDomain {
    warp_x: FastNoiseLite,
    warp_z: FastNoiseLite,
    fractal: Fractal,
    amplitude: f32,
}

impl NoiseDomain {
    pub fn new(seed: i32, fractal: Fractal, amplitude: f32) -> Self {
        Self {
            warp_x: simplex(seed ^ 99_173),
            warp_z: simplex(seed ^ 41_337),
            fractal,
            amplitude,
        }
    }

    pub fn from_params(params: &RiverGenParams) -> Self {
        Self::new(
            params.noise_seed(),
            params.warp_fractal.clone(),
            params.warp_amplitude,
        )
    }
}

impl Domain for NoiseDomain {
    #[inline]
    fn get_x(&self, x: f32, z: f32) -> f32 {
        x + fractal2(&self.warp_x, x, z, &self.fractal) * self.amplitude
    }

    #[inline]
    fn get_z(&self, x: f32, z: f32) -> f32 {
        z + fractal2(&self.warp_z, x, z, &self.fractal) * self.amplitude
    }
}
