use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiverError {
    #[error("tile size {size} with padding {padding} leaves no room for quadrants")]
    InvalidTile { size: i32, padding: i32 },
    #[error("search attempt budget must be at least 1")]
    InvalidAttempts,
    #[error("failed to parse river config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read river config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
