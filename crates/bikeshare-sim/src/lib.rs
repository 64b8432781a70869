//! `bikeshare-sim` — tick loop orchestrator for the bikeshare model.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Sample    — record every station's cumulative waiting time
//!                 (the value entering the tick, before any activity).
//!   ② Shuffle   — draw a fresh uniformly random permutation of all agents.
//!   ③ Activate  — step each agent once, in permutation order:
//!                   Station → serve or queue the riders on its cell
//!                   User    → hop to a random Moore-adjacent cell
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bikeshare_core::ModelConfig;
//! use bikeshare_sim::{ModelBuilder, NoopObserver};
//!
//! let config = ModelConfig { user_count: 100, grid_width: 10, grid_height: 10, seed: 42 };
//! let mut model = ModelBuilder::new(config).build()?;
//! model.advance(200, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod portrayal;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver};
pub use portrayal::{Portrayal, Shape};
pub use scheduler::RandomActivation;
