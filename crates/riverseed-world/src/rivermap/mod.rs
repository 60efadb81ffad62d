//! River node placement within a tile.

mod node;
mod pos_generator;
mod quadrant;
mod random;
mod sampler;

pub use node::{END_HEIGHT, HeightSample, NodeType, RiverNode, START_HEIGHT, START_LIMIT};
pub use pos_generator::PosGenerator;
pub use quadrant::{QUADRANTS, QuadrantLayout};
pub use random::{LegacyRandom, RandomSource, RngKind, make_rng, tile_seed};
pub use sampler::{CandidateSampler, SampleMode};
