//! Player identity and lifecycle vocabulary
//!
//! The external session manager owns the authoritative player registry;
//! this module defines the identifier and state types the receiver uses
//! to read it and to request transitions on it.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connected controller
///
/// Identifiers are minted by the session manager when a controller
/// connects and stay opaque to the receiver; they are only compared,
/// stored and echoed back when addressing replies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Mints a fresh random identifier, for manager implementations that
    /// assign ids themselves rather than receiving them from a transport.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Lifecycle state of a player as tracked by the session manager
///
/// The receiver reads these when sweeping the registry and writes them
/// back through [`super::session::SessionManager::set_player_state`] when
/// promoting the lobby into active play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    /// Connected but has not requested to join the game
    #[display("AVAILABLE")]
    Available,
    /// Join request acknowledged, waiting in the lobby
    #[display("READY")]
    Ready,
    /// Actively participating in the current round
    #[display("PLAYING")]
    Playing,
    /// Left the game deliberately
    #[display("QUIT")]
    Quit,
    /// Lost its connection without quitting
    #[display("DROPPED")]
    Dropped,
}

/// One row of the manager-owned player registry
///
/// The receiver only ever sees snapshots of these, returned by the
/// registry queries; mutating a snapshot has no effect on the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier assigned by the session manager
    pub id: PlayerId,
    /// Lifecycle state at the time of the snapshot
    pub state: PlayerState,
}
