use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::RiverError;
use crate::rivermap::{QuadrantLayout, RngKind};

#[derive(Clone, Debug, Deserialize)]
pub struct RiverGenConfig {
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default)]
    pub rng: RngKind,
    #[serde(default)]
    pub tile: TileConfig,
    #[serde(default)]
    pub search: Search,
    #[serde(default = "default_height_fractal")]
    pub height: Fractal,
    #[serde(default)]
    pub warp: Warp,
}

impl Default for RiverGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            rng: RngKind::default(),
            tile: TileConfig::default(),
            search: Search::default(),
            height: default_height_fractal(),
            warp: Warp::default(),
        }
    }
}

fn default_seed() -> i64 {
    1337
}

#[derive(Clone, Debug, Deserialize)]
pub struct TileConfig {
    #[serde(default = "default_tile_size")]
    pub size: i32,
    #[serde(default = "default_tile_padding")]
    pub padding: i32,
}
fn default_tile_size() -> i32 {
    256
}
fn default_tile_padding() -> i32 {
    16
}
impl Default for TileConfig {
    fn default() -> Self {
        Self {
            size: default_tile_size(),
            padding: default_tile_padding(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Search {
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    #[serde(default = "default_relaxed_attempts")]
    pub relaxed_attempts: u32,
    /// Minimum spacing between paired nodes; squared before use.
    #[serde(default = "default_min_dist")]
    pub min_dist: i32,
    #[serde(default = "default_min_height")]
    pub min_height: f32,
}
fn default_attempts() -> u32 {
    50
}
fn default_relaxed_attempts() -> u32 {
    25
}
fn default_min_dist() -> i32 {
    96
}
fn default_min_height() -> f32 {
    0.6
}
impl Default for Search {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            relaxed_attempts: default_relaxed_attempts(),
            min_dist: default_min_dist(),
            min_height: default_min_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Fractal {
    #[serde(default = "d_oct")]
    pub octaves: i32,
    #[serde(default = "d_pers")]
    pub persistence: f32,
    #[serde(default = "d_lac")]
    pub lacunarity: f32,
    #[serde(default = "d_scale")]
    pub scale: f32,
}
fn d_oct() -> i32 {
    4
}
fn d_pers() -> f32 {
    0.5
}
fn d_lac() -> f32 {
    2.0
}
fn d_scale() -> f32 {
    200.0
}
impl Default for Fractal {
    fn default() -> Self {
        Self {
            octaves: d_oct(),
            persistence: d_pers(),
            lacunarity: d_lac(),
            scale: d_scale(),
        }
    }
}
fn default_height_fractal() -> Fractal {
    Fractal {
        octaves: 5,
        persistence: 0.5,
        lacunarity: 2.0,
        scale: 400.0,
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Warp {
    #[serde(default = "default_warp_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_warp_fractal")]
    pub fractal: Fractal,
}
fn default_warp_amplitude() -> f32 {
    24.0
}
fn default_warp_fractal() -> Fractal {
    Fractal {
        octaves: 3,
        persistence: 0.6,
        lacunarity: 2.0,
        scale: 120.0,
    }
}
impl Default for Warp {
    fn default() -> Self {
        Self {
            amplitude: default_warp_amplitude(),
            fractal: default_warp_fractal(),
        }
    }
}

// Flattened snapshot of the config handed to generators and workers
#[derive(Clone, Debug)]
pub struct RiverGenParams {
    pub seed: i64,
    pub rng: RngKind,
    pub tile_size: i32,
    pub padding: i32,
    pub attempts: u32,
    pub relaxed_attempts: u32,
    pub min_dist2: i32,
    pub min_height: f32,
    pub height: Fractal,
    pub warp_amplitude: f32,
    pub warp_fractal: Fractal,
}

impl Default for RiverGenParams {
    fn default() -> Self {
        Self::flatten(&RiverGenConfig::default())
    }
}

impl RiverGenParams {
    /// Flattens and validates, so a config that loads can plan every tile.
    pub fn from_config(cfg: &RiverGenConfig) -> Result<Self, RiverError> {
        if cfg.search.attempts == 0 || cfg.search.relaxed_attempts == 0 {
            return Err(RiverError::InvalidAttempts);
        }
        QuadrantLayout::new(cfg.tile.size, cfg.tile.padding)?;
        Ok(Self::flatten(cfg))
    }

    fn flatten(cfg: &RiverGenConfig) -> Self {
        Self {
            seed: cfg.seed,
            rng: cfg.rng,
            tile_size: cfg.tile.size,
            padding: cfg.tile.padding,
            attempts: cfg.search.attempts,
            relaxed_attempts: cfg.search.relaxed_attempts,
            min_dist2: cfg.search.min_dist.saturating_mul(cfg.search.min_dist),
            min_height: cfg.search.min_height,
            height: cfg.height.clone(),
            warp_amplitude: cfg.warp.amplitude,
            warp_fractal: cfg.warp.fractal.clone(),
        }
    }

    /// 32-bit seed for the noise collaborators, folded from the world seed.
    #[inline]
    pub fn noise_seed(&self) -> i32 {
        (self.seed ^ (self.seed >> 32)) as i32
    }
}

pub fn parse_params(s: &str) -> Result<RiverGenParams, RiverError> {
    let cfg: RiverGenConfig = toml::from_str(s)?;
    RiverGenParams::from_config(&cfg)
}

pub fn load_params_from_path(path: &Path) -> Result<RiverGenParams, RiverError> {
    let s = fs::read_to_string(path).map_err(|source| RiverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_params(&s)
}
