//! `bikeshare-core` — foundational types for the bikeshare simulation.
//!
//! This crate is a dependency of every other `bikeshare-*` crate.  It
//! intentionally has no `bikeshare-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `AgentId`                                       |
//! | [`pos`]    | `GridPos`, toroidal offset arithmetic           |
//! | [`time`]   | `Tick`                                          |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (global)       |
//! | [`config`] | `ModelConfig`                                   |
//! | [`error`]  | `ConfigError`, `ConfigResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelConfig;
pub use error::{ConfigError, ConfigResult};
pub use ids::AgentId;
pub use pos::GridPos;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
