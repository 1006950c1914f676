#![forbid(unsafe_code)]

//! Theme state and accent propagation for tint.
//!
//! # Role in tint
//! `tint-core` owns the only mutable piece of the system: the current accent
//! of a UI session. The host drives it through a [`ThemeRegistry`]; visual
//! components read it through [`StyleReader`]s bound to the same
//! [`StyleNamespace`].
//!
//! # This crate provides
//! - [`ThemeState`]: initialize, set, detect-and-apply, current accent.
//! - [`StyleNamespace`] / [`StyleReader`]: the published accent variables
//!   and change subscriptions.
//! - [`ThemeRegistry`]: explicit session lifecycle with loud failure on
//!   out-of-session access.
//! - [`ThemeConfig`]: environment and JSON configuration.
//! - [`read_optimized`]: the lock-free slot under the namespace.

pub mod config;
pub mod error;
pub mod namespace;
pub mod read_optimized;
pub mod registry;
pub mod theme_state;

pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use namespace::{
    ACCENT_PRIMARY, ACCENT_PRIMARY_20, ACCENT_PRIMARY_30, AccentVars, STYLE_KEYS, StyleNamespace,
    StyleReader, SubscriptionId,
};
pub use registry::ThemeRegistry;
pub use theme_state::ThemeState;
