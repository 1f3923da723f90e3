// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lifecycle event arrived from the view without identifying its snackbar.
    MissingKey(LifecycleEvent),
    Io(String),
    Config(String),
}

/// Lifecycle events reported by the view layer.
///
/// Used to tell which handler was invoked without a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The enter transition finished.
    Entered,
    /// The exit transition finished.
    Exited,
}

impl LifecycleEvent {
    /// Returns the handler name for this event.
    pub fn handler_name(&self) -> &'static str {
        match self {
            LifecycleEvent::Entered => "handle_entered",
            LifecycleEvent::Exited => "handle_exited",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.handler_name())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingKey(event) => {
                write!(f, "{} cannot be called without a snackbar key", event)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
