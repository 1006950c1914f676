#![forbid(unsafe_code)]

//! Error type for theme sessions and configuration.

use thiserror::Error;
use tint_style::ParseError;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme state or the style namespace was read before a session was
    /// initialized. This is a usage bug in the host, never a soft default.
    #[error(
        "theme state accessed outside an initialized session; \
         call ThemeRegistry::initialize before rendering themed components"
    )]
    NotInitialized,
    #[error("theme session already initialized; tear it down before initializing again")]
    AlreadyInitialized,
    #[error("unknown style key {0:?}")]
    UnknownStyleKey(String),
    #[error("invalid value for {var}: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to parse theme configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read theme configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Usage errors are bugs in the host; everything else is bad input.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::AlreadyInitialized)
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
