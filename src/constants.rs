//! Configuration constants for the sketchcast receiver
//!
//! This module contains the display element keys and configuration limits
//! used throughout the receiver to keep the rendering code and the
//! bootstrap validation in one consistent vocabulary.

/// Display element keys of the receiver layout
pub mod display {
    /// Key of the heading element announcing the current phase
    pub const TITLE: &str = "title";
    /// Key of the status line element below the heading
    pub const INFO: &str = "info";
}

/// Receiver bootstrap configuration constants
pub mod receiver {
    /// Maximum length of the application name announced to controllers
    pub const MAX_APPLICATION_NAME_LENGTH: usize = 100;
    /// Maximum length of the bootstrap status text
    pub const MAX_STATUS_TEXT_LENGTH: usize = 200;
    /// Default number of seconds a silent connection is kept alive,
    /// deliberately generous for development sessions
    pub const DEFAULT_MAX_INACTIVITY_SECS: u64 = 6_000;
    /// Upper bound in seconds on the inactivity timeout
    pub const MAX_INACTIVITY_SECS: u64 = 86_400;
}
