//! Receiver bootstrap configuration
//!
//! Options the display host hands to the session manager when the
//! receiver page loads: the application name announced to controllers,
//! the status text shown while loading and the inactivity timeout for
//! silent connections.

use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use super::constants::receiver;

type ValidationResult = garde::Result;

/// Validates the inactivity timeout for silent connections
///
/// A zero timeout would drop every controller immediately; anything past
/// a day keeps dead connections around for no reason.
fn validate_max_inactivity(val: &Duration) -> ValidationResult {
    if val.is_zero() {
        return Err(garde::Error::new("max_inactivity cannot be zero"));
    }
    if val.as_secs() > receiver::MAX_INACTIVITY_SECS {
        return Err(garde::Error::new(format!(
            "max_inactivity is above the bound of {} seconds",
            receiver::MAX_INACTIVITY_SECS
        )));
    }
    Ok(())
}

/// Errors that can occur while checking a receiver configuration
#[derive(Error, Debug)]
pub enum Error {
    /// One or more fields are out of bounds
    #[error("invalid receiver configuration: {0}")]
    Invalid(garde::Report),
}

/// Options handed to the session manager when the receiver boots
#[serde_with::serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReceiverConfig {
    /// Name the session manager announces to connecting controllers
    #[garde(length(min = 1, max = crate::constants::receiver::MAX_APPLICATION_NAME_LENGTH))]
    pub application_name: String,
    /// Status line shown on the shared screen while the receiver loads
    #[garde(inner(length(max = crate::constants::receiver::MAX_STATUS_TEXT_LENGTH)))]
    pub status_text: Option<String>,
    /// How long a silent connection is kept before the manager drops it
    #[garde(custom(|v, _| validate_max_inactivity(v)))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    pub max_inactivity: Duration,
}

impl Default for ReceiverConfig {
    /// Development defaults with a deliberately long inactivity timeout;
    /// production setups should prefer the manager's own default.
    fn default() -> Self {
        Self {
            application_name: "Game".to_owned(),
            status_text: Some("Game is starting.".to_owned()),
            max_inactivity: Duration::from_secs(receiver::DEFAULT_MAX_INACTIVITY_SECS),
        }
    }
}

impl ReceiverConfig {
    /// Checks every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] with the offending fields when the
    /// configuration is out of bounds.
    pub fn check(&self) -> Result<(), Error> {
        self.validate().map_err(Error::Invalid)
    }
}
