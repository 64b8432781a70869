use bikeshare_core::{ConfigError, GridPos};
use bikeshare_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("station site {site} outside the {width}x{height} grid")]
    SiteOutOfBounds {
        site:   GridPos,
        width:  u32,
        height: u32,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
