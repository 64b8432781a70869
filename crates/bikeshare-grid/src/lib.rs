//! `bikeshare-grid` — toroidal space for the bikeshare simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`grid`]  | `MultiGrid` (dense cells + position table)    |
//! | [`error`] | `GridError`, `GridResult<T>`                  |

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
