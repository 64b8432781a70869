//! Agent classification.
//!
//! The model keeps a dense `Vec<AgentKind>` registry parallel to its agent
//! vec so a station can classify the occupants of its own cell while the
//! station itself is mutably borrowed out of that vec.

use std::fmt;

/// Which variant an agent is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// Fixed bike dock.
    Station,
    /// Mobile rider.
    User,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Station => "station",
            AgentKind::User => "user",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
