//! `bikeshare-agents` — agent variants and their per-tick behavior.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`agent`]     | `Agent` closed enum, step dispatch                           |
//! | [`kind`]      | `AgentKind` classification enum                              |
//! | [`station`]   | `Station` — dock inventory, wait queue, cumulative wait      |
//! | [`user`]      | `User` — uniform random Moore-neighbor movement              |
//! | [`context`]   | `StepContext<'a>` — world state handed to each step          |
//! | [`rngs`]      | `AgentRngs` — per-agent RNG pool                             |
//! | [`estimator`] | Waiting-time seed draw for new docks                         |
//! | [`layout`]    | `DEFAULT_SITES`, site CSV loader                             |
//! | [`error`]     | `LayoutError`, `LayoutResult<T>`                             |
//!
//! # Design notes
//!
//! Agents are activated one at a time, in a scheduler-chosen order, and each
//! mutates the world directly through its `StepContext`.  There is no intent
//! collection or commit phase: a user that moves is visible at its new cell
//! to every agent activated after it within the same tick.

pub mod agent;
pub mod context;
pub mod error;
pub mod estimator;
pub mod kind;
pub mod layout;
pub mod rngs;
pub mod station;
pub mod user;


pub use agent::Agent;
pub use context::StepContext;
pub use error::{LayoutError, LayoutResult};
pub use estimator::seed_waiting_time;
pub use kind::AgentKind;
pub use layout::{load_sites_csv, load_sites_reader, DEFAULT_SITES};
pub use rngs::AgentRngs;
pub use station::Station;
pub use user::User;
