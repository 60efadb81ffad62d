//! River node sampling over a height field and domain warp.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod rivermap;
pub mod terrain;

pub use config::{RiverGenConfig, RiverGenParams, load_params_from_path, parse_params};
pub use error::RiverError;
pub use rivermap::{
    LegacyRandom, NodeType, PosGenerator, QuadrantLayout, RandomSource, RiverNode, RngKind,
};
pub use terrain::{Domain, Heightmap, Identity, NoiseDomain, NoiseHeightmap};

/// Generator over the configured noise collaborators.
pub type NoisePosGenerator = PosGenerator<NoiseHeightmap, NoiseDomain>;

pub fn noise_pos_generator(params: &RiverGenParams) -> Result<NoisePosGenerator, RiverError> {
    PosGenerator::new(
        NoiseHeightmap::from_params(params),
        NoiseDomain::from_params(params),
        params.tile_size,
        params.padding,
    )
}
