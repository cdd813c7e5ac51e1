//! Core game controller
//!
//! This module contains the receiver-side controller for the drawing and
//! guessing game. The controller owns no players and no transport; those
//! belong to the external session manager. It subscribes to the manager's
//! notifications while running, narrates joins and turns on the display
//! surface, relays word lists and guesses between controllers and tears
//! the session down when the last player leaves.

use std::{fmt::Debug, mem};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{
    constants::display,
    messages::{GameMessage, JoinInfo},
    names::NameIndex,
    player::PlayerState,
    screen::{CellColor, Screen},
    session::{EventKind, GameplayState, LobbyState, SessionEvent, SessionManager, StatusCode},
};

/// Whether the controller is between `run` and `stop`
///
/// The callback of an in-flight start lives inside `Starting`, so the
/// ready notification can fire at most once per start and a `stop` that
/// lands first cancels it outright.
enum RunState {
    /// Not running and nothing pending
    Stopped,
    /// A start was requested but has not completed yet
    Starting {
        /// Invoked once the game is up, before any subscriptions exist
        on_ready: Box<dyn FnOnce()>,
    },
    /// Subscribed and processing notifications
    Running,
}

impl Debug for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Stopped => "Stopped",
            Self::Starting { .. } => "Starting",
            Self::Running => "Running",
        })
    }
}

/// The receiver-side game controller
///
/// All registry and transport concerns are delegated to the session
/// manager `M`; all rendering goes through the display surface `S`. The
/// controller keeps only the small local state needed to narrate the
/// game: the names players joined with and the last published word list.
///
/// Methods must be called from the single context that also delivers the
/// manager's notifications; the controller performs no locking.
pub struct GameController<M, S> {
    /// The external session manager everything player-shaped delegates to
    manager: M,
    /// The display surface announcements and cell paints render into
    screen: S,
    /// Current lifecycle state
    run_state: RunState,
    /// Display names captured from join requests on the current run
    names: NameIndex,
    /// Last word-list payload broadcast by an artist, kept verbatim
    words_message: Option<Value>,
}

impl<M, S> Debug for GameController<M, S> {
    /// Custom debug implementation that avoids requiring `Debug` from the
    /// injected manager and display
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("run_state", &self.run_state)
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl<M: SessionManager, S: Screen> GameController<M, S> {
    /// Creates a stopped controller over the given manager and display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::Value;
    /// use sketchcast::game::GameController;
    /// use sketchcast::player::{Player, PlayerId, PlayerState};
    /// use sketchcast::screen::HeadlessScreen;
    /// use sketchcast::session::{EventKind, GameplayState, LobbyState, SessionManager};
    ///
    /// struct NullManager;
    ///
    /// impl SessionManager for NullManager {
    ///     fn subscribe(&self, _kind: EventKind) {}
    ///     fn unsubscribe(&self, _kind: EventKind) {}
    ///     fn players(&self) -> Vec<Player> {
    ///         Vec::new()
    ///     }
    ///     fn connected_players(&self) -> Vec<Player> {
    ///         Vec::new()
    ///     }
    ///     fn set_player_state(&self, _player: &PlayerId, _state: PlayerState) {}
    ///     fn set_gameplay_state(&self, _state: GameplayState) {}
    ///     fn set_lobby_state(&self, _state: LobbyState) {}
    ///     fn send_to_player(&self, _player: &PlayerId, _message: &Value) {}
    ///     fn broadcast(&self, _message: &Value) {}
    ///     fn shutdown(&self) {}
    /// }
    ///
    /// let screen = HeadlessScreen::with_cells(["r0c0"]);
    /// let mut game = GameController::new(NullManager, screen);
    /// game.run(|| println!("game is up"));
    /// assert!(game.is_running());
    /// ```
    pub fn new(manager: M, screen: S) -> Self {
        Self {
            manager,
            screen,
            run_state: RunState::Stopped,
            names: NameIndex::default(),
            words_message: None,
        }
    }

    /// Runs the game.
    ///
    /// On a stopped controller this subscribes to the manager's
    /// notifications, opens the lobby on the shared screen and resets the
    /// local name index and word cache. `on_ready` fires exactly once,
    /// after the running phase is announced and before any notification
    /// can arrive. Running the game while it is already running only
    /// invokes `on_ready` again; nothing is subscribed twice.
    pub fn run(&mut self, on_ready: impl FnOnce() + 'static) {
        if matches!(self.run_state, RunState::Running) {
            on_ready();
            return;
        }
        self.run_state = RunState::Starting {
            on_ready: Box::new(on_ready),
        };
        self.start();
    }

    /// Stops the game.
    ///
    /// A running controller unsubscribes from every notification kind; a
    /// start that has not completed yet is cancelled, its callback never
    /// fires and nothing gets unsubscribed because nothing was subscribed.
    /// Players stay connected; only the notification flow stops.
    pub fn stop(&mut self) {
        match mem::replace(&mut self.run_state, RunState::Stopped) {
            RunState::Stopped | RunState::Starting { .. } => {}
            RunState::Running => {
                info!("stopping the game");
                for kind in EventKind::ALL {
                    self.manager.unsubscribe(kind);
                }
            }
        }
    }

    /// Completes a requested start.
    ///
    /// Does nothing unless a start is pending, so a `stop` that landed in
    /// between leaves no trace. The ordering here is deliberate: the
    /// running phase is announced and the callback fired before the
    /// subscriptions exist, then the lobby opens.
    fn start(&mut self) {
        let on_ready = match mem::replace(&mut self.run_state, RunState::Running) {
            RunState::Starting { on_ready } => on_ready,
            other => {
                self.run_state = other;
                return;
            }
        };

        info!("starting the game");
        self.manager.set_gameplay_state(GameplayState::Running);
        on_ready();

        for kind in EventKind::ALL {
            self.manager.subscribe(kind);
        }

        self.manager.set_gameplay_state(GameplayState::ShowingInfoScreen);
        self.manager.set_lobby_state(LobbyState::Open);
        self.update_title("Lobby");

        self.names.clear();
        self.words_message = None;
    }

    /// Whether the controller is currently running.
    pub fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running)
    }

    /// Borrows the session manager the controller was built over.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Borrows the display surface the controller draws into.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Feeds one manager notification to the matching handler.
    ///
    /// The manager only delivers kinds the controller subscribed to, so
    /// no run-state guard is repeated here.
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event.kind {
            EventKind::PlayerReady => self.on_player_ready(event),
            EventKind::PlayerPlaying => self.on_player_playing(event),
            EventKind::GameMessage => self.on_game_message(event),
            EventKind::PlayerQuit => self.on_player_quit(event),
        }
    }

    /// A controller finished its join request and waits in the lobby.
    ///
    /// The join is announced on the status line and the display name is
    /// recorded for later announcements, replacing any previous name the
    /// same player joined with.
    fn on_player_ready(&mut self, event: SessionEvent) {
        if !Self::is_success_event(&event) {
            return;
        }
        let JoinInfo { name } = JoinInfo::from_payload(&event.payload);
        let name = self.names.record(event.player.clone(), &name);
        debug!(player = %event.player, name = %name, "player ready");
        self.update_info(&format!("{name} has joined."));
    }

    /// A controller transitioned into active play.
    ///
    /// Every player still waiting in the lobby is promoted along with it,
    /// the lobby closes and the shared screen flips to the playing view.
    fn on_player_playing(&mut self, event: SessionEvent) {
        if !Self::is_success_event(&event) {
            return;
        }
        for player in self.manager.players() {
            if player.state == PlayerState::Ready {
                self.manager.set_player_state(&player.id, PlayerState::Playing);
            }
        }
        self.manager.set_gameplay_state(GameplayState::Running);
        self.manager.set_lobby_state(LobbyState::Closed);
        self.update_title("Playing");
        let announcement = format!("{} is playing.", self.names.display(&event.player));
        debug!(player = %event.player, "player playing");
        self.update_info(&announcement);
    }

    /// A controller quit the game or dropped its connection.
    ///
    /// The last player leaving tears down the whole receiver session
    /// through the manager, with no grace period.
    fn on_player_quit(&mut self, event: SessionEvent) {
        if !Self::is_success_event(&event) {
            return;
        }
        let connected = self.manager.connected_players().len();
        debug!(player = %event.player, connected, "player quit");
        if connected == 0 {
            info!("no players connected, tearing down the session");
            self.manager.shutdown();
        }
    }

    /// Dispatches a free-form controller message.
    ///
    /// Payloads that decode to no known shape are logged and dropped.
    /// Word lists and guesses are relayed as the original payload, never
    /// a re-encoding, and the last word list is cached so late requesters
    /// can be served verbatim.
    fn on_game_message(&mut self, event: SessionEvent) {
        if !Self::is_success_event(&event) {
            return;
        }
        let message = match GameMessage::parse(&event.payload) {
            Ok(message) => message,
            Err(error) => {
                debug!(player = %event.player, %error, "dropping game message");
                return;
            }
        };
        match message {
            GameMessage::Clear { .. } => self.clear_grid(),
            GameMessage::Artist { artist } => {
                let announcement = format!("{} is drawing.", self.names.display(&artist));
                self.update_info(&announcement);
            }
            GameMessage::WordsRequest { .. } => {
                // Reply to the notification's sender, not to whoever the
                // payload claims to be
                if let Some(words) = &self.words_message {
                    self.manager.send_to_player(&event.player, words);
                }
            }
            GameMessage::Words { .. } => {
                self.manager.broadcast(&event.payload);
                self.words_message = Some(event.payload);
            }
            GameMessage::Guess { .. } => {
                self.manager.broadcast(&event.payload);
            }
            GameMessage::CellTouch { grid } => {
                self.screen.set_cell_color(&grid, CellColor::Selected);
            }
        }
    }

    /// True iff the notification reports a successful request.
    ///
    /// Failed notifications are logged with their status code and
    /// description and otherwise ignored; nothing is retried and nothing
    /// propagates.
    fn is_success_event(event: &SessionEvent) -> bool {
        if event.status != StatusCode::Success {
            warn!(
                kind = ?event.kind,
                status = %event.status,
                description = event.error_description.as_deref().unwrap_or(""),
                "ignoring event with non-success status"
            );
            return false;
        }
        true
    }

    /// Writes the heading element of the shared screen.
    fn update_title(&self, text: &str) {
        self.screen.set_text(display::TITLE, text);
    }

    /// Writes the status line element of the shared screen.
    fn update_info(&self, text: &str) {
        self.screen.set_text(display::INFO, text);
    }

    /// Resets every drawing-grid cell to the resting color.
    fn clear_grid(&self) {
        self.screen.fill_cells(CellColor::Empty);
    }
}
