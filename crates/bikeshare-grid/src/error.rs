//! Grid-subsystem error type.

use thiserror::Error;

use bikeshare_core::{AgentId, GridPos};

/// Errors produced by `bikeshare-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// A post-wrap coordinate landed outside the declared bounds.  Only a
    /// coordinate-arithmetic defect can produce this.
    #[error("position {pos} outside {width}x{height} grid")]
    OutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error("agent {0} is already placed")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} has never been placed")]
    NotPlaced(AgentId),

    /// The cell has no adjacent cells to move to (1×1 grid).
    #[error("cell {0} has an empty neighborhood")]
    EmptyNeighborhood(GridPos),
}

pub type GridResult<T> = Result<T, GridError>;
