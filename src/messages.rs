//! Game message decoding
//!
//! Controllers exchange free-form JSON objects with the receiver, telling
//! the shapes apart by which key is present rather than by an explicit
//! type tag. This module gives those shapes a typed boundary: a payload
//! decodes into [`GameMessage`] with the same first-match-wins precedence
//! senders rely on, and anything unrecognized surfaces as an error for
//! the caller to log and drop instead of being silently absorbed.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::player::PlayerId;

/// Errors that can occur while decoding an inbound payload
#[derive(Error, Debug)]
pub enum Error {
    /// The payload matches none of the recognized message shapes
    #[error("unrecognized message shape: {0}")]
    UnrecognizedShape(#[from] serde_json::Error),
}

/// Extra data attached to a join request
///
/// The display name is the only field the receiver reads. A join without
/// a usable name is still a join; it lands in the name index as a blank
/// entry, the same rendering as a missed lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JoinInfo {
    /// Display name the controller asked to join with
    #[serde(default)]
    pub name: String,
}

impl JoinInfo {
    /// Decodes join info from a ready notification's payload.
    ///
    /// Payloads that are not an object, or that carry no decodable name,
    /// degrade to a blank name rather than failing the join.
    pub fn from_payload(payload: &Value) -> Self {
        serde_json::from_value(payload.clone()).unwrap_or_default()
    }
}

/// A free-form message from a controller, decoded by key presence
///
/// Variant order is load-bearing: it reproduces the precedence senders
/// rely on, checking `clear` first, then `artist`, `player`, `words` and
/// `guess`, with a bare grid-cell key as the trailing legacy form. Extra
/// keys beside the distinguishing one are ignored here; relaying handlers
/// forward the original payload, never a re-encoding of this enum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GameMessage {
    /// Wipe the whole drawing grid
    Clear {
        /// Present on every clear request; its value is not inspected
        clear: Value,
    },
    /// Announce which player draws this turn
    Artist {
        /// Identifier of the drawing player
        artist: PlayerId,
    },
    /// Ask for the current word list
    WordsRequest {
        /// Identifier the requester supplied for itself; replies are
        /// addressed to the notification's sender regardless
        player: PlayerId,
    },
    /// Publish the word list for this turn
    Words {
        /// Candidate words the guessers pick from
        words: Vec<String>,
    },
    /// Submit a guess
    Guess {
        /// The guessed word or its index, at the sender's discretion
        guess: Value,
    },
    /// Legacy request to paint a single grid cell
    CellTouch {
        /// Key of the display cell to highlight
        grid: String,
    },
}

impl GameMessage {
    /// Decodes a payload into its message shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedShape`] when the payload carries none
    /// of the distinguishing keys, or carries one with a value of the
    /// wrong type.
    pub fn parse(payload: &Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(payload.clone())?)
    }
}
