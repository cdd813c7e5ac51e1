//! Diagnostics overlay
//!
//! A toggleable textual snapshot of the session manager's view, rendered
//! wherever the embedder wants it on the shared screen. Useful while
//! wiring up new controllers; closed it renders nothing at all.

use itertools::Itertools;

use super::session::SessionManager;

/// Toggleable rendering of the manager's player registry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugOverlay {
    visible: bool,
}

impl DebugOverlay {
    /// Creates a closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the overlay.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the overlay.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is currently shown.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Renders one line per registry entry followed by the connected
    /// count, or an empty string while the overlay is closed.
    pub fn render<M: SessionManager>(&self, manager: &M) -> String {
        if !self.visible {
            return String::new();
        }
        let players = manager.players();
        let connected = manager.connected_players().len();
        if players.is_empty() {
            return format!("players: none\nconnected: {connected}");
        }
        let rows = players
            .iter()
            .map(|player| format!("{} {}", player.id, player.state))
            .join("\n");
        format!("players:\n{rows}\nconnected: {connected}")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::player::{Player, PlayerId, PlayerState};
    use crate::session::{EventKind, GameplayState, LobbyState};

    /// Manager stub serving a fixed registry snapshot.
    struct FixedRegistry {
        players: Vec<Player>,
    }

    impl SessionManager for FixedRegistry {
        fn subscribe(&self, _kind: EventKind) {}
        fn unsubscribe(&self, _kind: EventKind) {}

        fn players(&self) -> Vec<Player> {
            self.players.clone()
        }

        fn connected_players(&self) -> Vec<Player> {
            self.players
                .iter()
                .filter(|player| {
                    !matches!(player.state, PlayerState::Quit | PlayerState::Dropped)
                })
                .cloned()
                .collect()
        }

        fn set_player_state(&self, _player: &PlayerId, _state: PlayerState) {}
        fn set_gameplay_state(&self, _state: GameplayState) {}
        fn set_lobby_state(&self, _state: LobbyState) {}
        fn send_to_player(&self, _player: &PlayerId, _message: &Value) {}
        fn broadcast(&self, _message: &Value) {}
        fn shutdown(&self) {}
    }

    fn registry() -> FixedRegistry {
        FixedRegistry {
            players: vec![
                Player {
                    id: PlayerId::from("p1"),
                    state: PlayerState::Playing,
                },
                Player {
                    id: PlayerId::from("p2"),
                    state: PlayerState::Quit,
                },
            ],
        }
    }

    #[test]
    fn test_closed_overlay_renders_nothing() {
        let overlay = DebugOverlay::new();

        assert!(!overlay.is_open());
        assert_eq!(overlay.render(&registry()), "");
    }

    #[test]
    fn test_open_overlay_lists_players_and_connected_count() {
        let mut overlay = DebugOverlay::new();
        overlay.open();

        let rendered = overlay.render(&registry());

        assert!(rendered.contains("p1 PLAYING"));
        assert!(rendered.contains("p2 QUIT"));
        assert!(rendered.ends_with("connected: 1"));
    }

    #[test]
    fn test_empty_registry_renders_placeholder() {
        let mut overlay = DebugOverlay::new();
        overlay.open();

        let rendered = overlay.render(&FixedRegistry {
            players: Vec::new(),
        });

        assert_eq!(rendered, "players: none\nconnected: 0");
    }

    #[test]
    fn test_overlay_can_be_toggled() {
        let mut overlay = DebugOverlay::new();

        overlay.open();
        assert!(overlay.is_open());

        overlay.close();
        assert!(!overlay.is_open());
        assert_eq!(overlay.render(&registry()), "");
    }
}
