// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The static dataset violates one of its invariants.
    /// Produced by the startup assertion; never by a lookup.
    Config(String),

    /// Preference storage failed underneath the store.
    /// Internal only: `PreferenceStore` swallows these before they escape,
    /// so callers of `load`/`save` never see this variant.
    Storage(String),

    /// The outbound intake submission failed (network or endpoint).
    /// Surfaced to the call site so the user can retry manually.
    Submission(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Submission(e) => write!(f, "Submission Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Submission(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
