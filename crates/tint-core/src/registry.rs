#![forbid(unsafe_code)]

//! Theme session registry.
//!
//! A [`ThemeRegistry`] is the owned, explicit home of a UI session's theme:
//! the host creates one, initializes it, hands [`StyleReader`]s to its
//! components, and tears it down at the end. Nothing here is a global; pass
//! the registry (or readers) to whoever needs them.
//!
//! Touching theme state outside a session is a bug in the host and returns
//! [`ThemeError::NotInitialized`] rather than a quiet default.
//!
//! # Example
//!
//! ```
//! use tint_core::{ThemeError, ThemeRegistry};
//! use tint_style::{AccentToken, Metadata};
//!
//! let mut registry = ThemeRegistry::new();
//! let reader = registry.reader();
//! assert!(matches!(reader.load(), Err(ThemeError::NotInitialized)));
//!
//! registry
//!     .initialize(AccentToken::Cyan, Some(Metadata::new().domain("wallet.app")))
//!     .unwrap();
//! assert_eq!(reader.accent().unwrap(), AccentToken::Emerald);
//!
//! registry.state_mut().unwrap().set_accent(AccentToken::Rose);
//! assert_eq!(reader.accent().unwrap(), AccentToken::Rose);
//!
//! assert_eq!(registry.teardown(), Some(AccentToken::Rose));
//! assert!(registry.state().is_err());
//! ```

use std::sync::Arc;

use tint_style::{AccentToken, Metadata};

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::namespace::{StyleNamespace, StyleReader};
use crate::theme_state::ThemeState;

#[derive(Debug, Default)]
pub struct ThemeRegistry {
    namespace: Arc<StyleNamespace>,
    state: Option<ThemeState>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the session. Fails if one is already live.
    pub fn initialize(
        &mut self,
        initial: AccentToken,
        metadata: Option<Metadata>,
    ) -> Result<&mut ThemeState> {
        if self.state.is_some() {
            tracing::warn!(target: "tint.theme", "theme session initialized twice");
            return Err(ThemeError::AlreadyInitialized);
        }
        let state = ThemeState::initialize_in(Arc::clone(&self.namespace), initial, metadata);
        Ok(self.state.insert(state))
    }

    pub fn initialize_from_config(&mut self, config: &ThemeConfig) -> Result<&mut ThemeState> {
        self.initialize(config.initial_accent, config.metadata.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Result<&ThemeState> {
        self.state.as_ref().ok_or_else(not_initialized)
    }

    pub fn state_mut(&mut self) -> Result<&mut ThemeState> {
        self.state.as_mut().ok_or_else(not_initialized)
    }

    /// Shorthand for `state()?.current_accent()`.
    pub fn current_accent(&self) -> Result<AccentToken> {
        self.state().map(ThemeState::current_accent)
    }

    /// A reader bound to this registry's namespace. Valid across sessions;
    /// loads fail while no session is live.
    pub fn reader(&self) -> StyleReader {
        StyleReader::new(Arc::clone(&self.namespace))
    }

    /// End the session and clear the namespace. Returns the final accent.
    pub fn teardown(&mut self) -> Option<AccentToken> {
        let state = self.state.take()?;
        debug_assert!(Arc::ptr_eq(state.namespace(), &self.namespace));
        let last = state.current_accent();
        self.namespace.clear();
        tracing::info!(target: "tint.theme", accent = last.name(), "theme session ended");
        Some(last)
    }
}

fn not_initialized() -> ThemeError {
    tracing::warn!(
        target: "tint.theme",
        "theme state accessed outside an initialized session"
    );
    ThemeError::NotInitialized
}
