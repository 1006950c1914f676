#![forbid(unsafe_code)]

//! Accent tokens and app categories.
//!
//! Both sets are closed. Every [`Category`] maps to exactly one
//! [`AccentToken`] through a static, total table; `Default` falls back to the
//! same accent as `Tech`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::PackedRgba;

/// Errors produced when parsing token or category names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown accent token {0:?} (expected one of: rose, emerald, cyan)")]
    UnknownAccent(String),
    #[error("unknown app category {0:?} (expected one of: dating, finance, tech, default)")]
    UnknownCategory(String),
}

/// Named primary highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AccentToken {
    /// Dating apps.
    Rose,
    /// Finance apps.
    Emerald,
    /// Tech apps and the fallback accent.
    #[default]
    Cyan,
}

impl AccentToken {
    pub const ALL: [AccentToken; 3] = [AccentToken::Rose, AccentToken::Emerald, AccentToken::Cyan];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Emerald => "emerald",
            Self::Cyan => "cyan",
        }
    }

    /// The opaque color this token expands to.
    pub const fn color(self) -> PackedRgba {
        match self {
            Self::Rose => PackedRgba::rgb(0xf4, 0x3f, 0x5e),
            Self::Emerald => PackedRgba::rgb(0x10, 0xb9, 0x81),
            Self::Cyan => PackedRgba::rgb(0x06, 0xb6, 0xd4),
        }
    }

    /// Name of the palette variable that holds this token's color.
    pub const fn palette_var(self) -> &'static str {
        match self {
            Self::Rose => "--accent-rose",
            Self::Emerald => "--accent-emerald",
            Self::Cyan => "--accent-cyan",
        }
    }

    /// `var(...)` reference to [`Self::palette_var`].
    pub fn var_ref(self) -> String {
        format!("var({})", self.palette_var())
    }
}

impl fmt::Display for AccentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccentToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|token| token.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownAccent(s.to_owned()))
    }
}

/// Coarse classification of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Dating,
    Finance,
    Tech,
    #[default]
    Default,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Dating,
        Category::Finance,
        Category::Tech,
        Category::Default,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dating => "dating",
            Self::Finance => "finance",
            Self::Tech => "tech",
            Self::Default => "default",
        }
    }

    /// Accent assigned to this category.
    pub const fn accent(self) -> AccentToken {
        match self {
            Self::Dating => AccentToken::Rose,
            Self::Finance => AccentToken::Emerald,
            Self::Tech | Self::Default => AccentToken::Cyan,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownCategory(s.to_owned()))
    }
}

impl From<Category> for AccentToken {
    fn from(category: Category) -> Self {
        category.accent()
    }
}
