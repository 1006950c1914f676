#![forbid(unsafe_code)]

//! Session configuration.
//!
//! A [`ThemeConfig`] is what the host supplies at startup: an initial accent
//! and optional metadata. It can be built in code, parsed from JSON, or read
//! from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TINT_ACCENT` | `initial_accent` (`rose`, `emerald`, `cyan`) |
//! | `TINT_CATEGORY` | `metadata.category` (`dating`, `finance`, `tech`, `default`) |
//! | `TINT_DOMAIN` | `metadata.domain` |
//! | `TINT_TITLE` | `metadata.title` |
//!
//! Empty or whitespace-only values count as unset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tint_style::{AccentToken, Category, Metadata};

use crate::error::{Result, ThemeError};

pub const ENV_ACCENT: &str = "TINT_ACCENT";
pub const ENV_CATEGORY: &str = "TINT_CATEGORY";
pub const ENV_DOMAIN: &str = "TINT_DOMAIN";
pub const ENV_TITLE: &str = "TINT_TITLE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub initial_accent: AccentToken,
    pub metadata: Option<Metadata>,
}

impl ThemeConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Apply every variable `lookup` yields on top of `self`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        if let Some(raw) = get(ENV_ACCENT) {
            self.initial_accent = raw.parse::<AccentToken>().map_err(|source| ThemeError::Env {
                var: ENV_ACCENT,
                source,
            })?;
        }

        if let Some(raw) = get(ENV_CATEGORY) {
            let category = raw.parse::<Category>().map_err(|source| ThemeError::Env {
                var: ENV_CATEGORY,
                source,
            })?;
            self.metadata.get_or_insert_with(Metadata::default).category = Some(category);
        }
        if let Some(domain) = get(ENV_DOMAIN) {
            self.metadata.get_or_insert_with(Metadata::default).domain = Some(domain);
        }
        if let Some(title) = get(ENV_TITLE) {
            self.metadata.get_or_insert_with(Metadata::default).title = Some(title);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_cyan_without_metadata() {
        let config = ThemeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.initial_accent, AccentToken::Cyan);
        assert!(config.metadata.is_none());
    }

    #[test]
    fn env_fields_populate_metadata() {
        let config = ThemeConfig::from_lookup(lookup(&[
            (ENV_ACCENT, "Rose"),
            (ENV_DOMAIN, "bank.example"),
            (ENV_TITLE, "Portal"),
        ]))
        .unwrap();
        assert_eq!(config.initial_accent, AccentToken::Rose);
        assert_eq!(
            config.metadata,
            Some(Metadata::new().domain("bank.example").title("Portal"))
        );
    }

    #[test]
    fn blank_values_are_unset() {
        let config =
            ThemeConfig::from_lookup(lookup(&[(ENV_ACCENT, "  "), (ENV_DOMAIN, "")])).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn bad_accent_names_the_variable() {
        let err = ThemeConfig::from_lookup(lookup(&[(ENV_ACCENT, "teal")])).unwrap_err();
        assert!(matches!(err, ThemeError::Env { var: ENV_ACCENT, .. }));
    }

    #[test]
    fn bad_category_names_the_variable() {
        let err = ThemeConfig::from_lookup(lookup(&[(ENV_CATEGORY, "gaming")])).unwrap_err();
        assert!(matches!(err, ThemeError::Env { var: ENV_CATEGORY, .. }));
    }

    #[test]
    fn json_round_trip() {
        let config = ThemeConfig::from_json_str(
            r#"{"initial_accent":"emerald","metadata":{"category":"dating"}}"#,
        )
        .unwrap();
        assert_eq!(config.initial_accent, AccentToken::Emerald);
        assert_eq!(
            config.metadata,
            Some(Metadata::new().category(Category::Dating))
        );
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = ThemeConfig::from_json_str(r#"{"accent":"rose"}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn env_overrides_json() {
        let base = ThemeConfig::from_json_str(r#"{"metadata":{"domain":"match.com"}}"#).unwrap();
        let config = base
            .with_overrides(lookup(&[(ENV_CATEGORY, "tech")]))
            .unwrap();
        let meta = config.metadata.unwrap();
        assert_eq!(meta.category, Some(Category::Tech));
        assert_eq!(meta.domain.as_deref(), Some("match.com"));
    }

    #[test]
    fn json_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn json_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{"initial_accent":"rose"}"#).unwrap();
        let config = ThemeConfig::from_json_file(&path).unwrap();
        assert_eq!(config.initial_accent, AccentToken::Rose);
    }
}
