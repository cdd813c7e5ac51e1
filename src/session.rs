//! Session manager contract and notification envelope
//!
//! The receiver never owns the player registry, the message transport or
//! the connection handling; all of that belongs to the host platform's
//! session manager. This module defines the capability set the receiver
//! consumes from it and the envelope in which the manager delivers
//! notifications back. Implementations might wrap a real cast platform,
//! a WebSocket relay, or an in-memory double for tests.

use derive_more::Display;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::player::{Player, PlayerId, PlayerState};

/// The notification kinds the receiver subscribes to while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A controller completed its join request and waits in the lobby
    PlayerReady,
    /// A controller transitioned into active play
    PlayerPlaying,
    /// A controller sent a free-form game message
    #[serde(rename = "GAME_MESSAGE_RECEIVED")]
    GameMessage,
    /// A controller quit the game or dropped its connection
    PlayerQuit,
}

impl EventKind {
    /// Every notification kind, in subscription order.
    pub const ALL: [Self; 4] = [
        Self::PlayerReady,
        Self::PlayerPlaying,
        Self::GameMessage,
        Self::PlayerQuit,
    ];
}

/// Outcome of the request a notification reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    /// The request succeeded
    #[display("SUCCESS")]
    Success,
    /// The request was malformed
    #[display("INVALID_REQUEST")]
    InvalidRequest,
    /// The sender is not allowed to perform the requested action
    #[display("NOT_ALLOWED")]
    NotAllowed,
    /// The controller speaks an incompatible protocol version
    #[display("INCORRECT_VERSION")]
    IncorrectVersion,
    /// The game is already at its player limit
    #[display("TOO_MANY_PLAYERS")]
    TooManyPlayers,
}

/// Gameplay phase the manager announces to every connected controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameplayState {
    /// The receiver is still loading
    #[display("LOADING")]
    Loading,
    /// The game is running
    #[display("RUNNING")]
    Running,
    /// The game is paused
    #[display("PAUSED")]
    Paused,
    /// The shared screen shows an informational page, such as the lobby
    #[display("SHOWING_INFO_SCREEN")]
    ShowingInfoScreen,
}

/// Whether the lobby accepts new join requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LobbyState {
    /// New controllers may join
    #[display("OPEN")]
    Open,
    /// Join requests are rejected until the lobby reopens
    #[display("CLOSED")]
    Closed,
}

/// A notification delivered by the session manager
///
/// Every notification carries the outcome of the request it reports on,
/// the player it concerns and whatever extra data the controller attached
/// to the request. The payload stays an untyped [`Value`] here; handlers
/// decode it at their boundary.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Which notification this is
    pub kind: EventKind,
    /// Outcome of the underlying request
    pub status: StatusCode,
    /// Manager-supplied description accompanying a non-success outcome
    pub error_description: Option<String>,
    /// The player the notification concerns
    pub player: PlayerId,
    /// Controller-supplied extra data, such as join info or a game message
    pub payload: Value,
}

impl SessionEvent {
    /// Creates a successful notification envelope.
    pub fn success(kind: EventKind, player: PlayerId, payload: Value) -> Self {
        Self {
            kind,
            status: StatusCode::Success,
            error_description: None,
            player,
            payload,
        }
    }

    /// Creates a failed notification envelope with the given outcome.
    pub fn failure(
        kind: EventKind,
        player: PlayerId,
        status: StatusCode,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            status,
            error_description: Some(description.into()),
            player,
            payload: Value::Null,
        }
    }
}

/// Capability set the receiver consumes from the session manager
///
/// The manager owns the registry and the transport; the receiver only
/// subscribes to notifications, queries player snapshots and requests
/// state changes. Notifications are delivered for subscribed kinds only,
/// one at a time, from the single context that drives the receiver, so
/// implementations need no internal ordering beyond delivery order.
pub trait SessionManager {
    /// Starts delivering notifications of the given kind.
    fn subscribe(&self, kind: EventKind);

    /// Stops delivering notifications of the given kind.
    fn unsubscribe(&self, kind: EventKind);

    /// Returns a snapshot of every player in the registry.
    fn players(&self) -> Vec<Player>;

    /// Returns a snapshot of the players still connected, in any state.
    fn connected_players(&self) -> Vec<Player>;

    /// Requests a lifecycle transition for one player.
    fn set_player_state(&self, player: &PlayerId, state: PlayerState);

    /// Announces the gameplay phase to every connected controller.
    fn set_gameplay_state(&self, state: GameplayState);

    /// Opens or closes the lobby for new join requests.
    fn set_lobby_state(&self, state: LobbyState);

    /// Sends a message to a single player.
    fn send_to_player(&self, player: &PlayerId, message: &Value);

    /// Sends a message to every connected player.
    fn broadcast(&self, message: &Value);

    /// Tears down the whole receiver session, disconnecting everyone.
    fn shutdown(&self);
}
