// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants carry a human-readable message rather than the source error so
/// they stay `Clone` and can travel inside Iced messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// File system access failed.
    Io(String),
    /// Image bytes could not be decoded.
    Image(String),
    /// Fetching an image byte stream by URL failed.
    Fetch(String),
    /// The embedded player backend refused to mount.
    Player(String),
    /// Configuration file could not be parsed or written.
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Image(msg) => write!(f, "Image error: {msg}"),
            Error::Fetch(msg) => write!(f, "Fetch error: {msg}"),
            Error::Player(msg) => write!(f, "Player error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
