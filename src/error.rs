// SPDX-License-Identifier: MPL-2.0
//! Failures outside the card itself: reading settings and installing the
//! log subscriber. The card never fails; bad settings fall back to defaults.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// `settings.toml` could not be read.
    Io(String),
    /// `settings.toml` is not valid TOML or has a mistyped key.
    Config(String),
    /// A global tracing subscriber was already installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "cannot read settings: {e}"),
            Error::Config(e) => write!(f, "invalid settings: {e}"),
            Error::Logging(e) => write!(f, "cannot start logging: {e}"),
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

pub type Result<T> = std::result::Result<T, Error>;
