#![forbid(unsafe_code)]

//! Category detection from app metadata.
//!
//! Resolution order, first hit wins:
//!
//! 1. An explicit [`Metadata::category`] maps straight through the category
//!    table, ignoring domain and title.
//! 2. The lowercased domain is scanned against [`PATTERNS`].
//! 3. The lowercased title is scanned against [`PATTERNS`].
//!
//! Matching is plain substring containment. `PATTERNS` is an ordered slice
//! and its declaration order is the tie-break when several patterns occur in
//! the same text (`"ai"` is checked before `"code"`).
//!
//! # Example
//!
//! ```
//! use tint_style::{AccentToken, Metadata, resolve};
//!
//! assert_eq!(resolve(&Metadata::new().domain("MyDatingApp.com")), Some(AccentToken::Rose));
//! assert_eq!(resolve(&Metadata::new()), None);
//! ```

use crate::accent::{AccentToken, Category};

/// Ordered `(pattern, category)` pairs. Patterns are lowercase.
pub const PATTERNS: &[(&str, Category)] = &[
    ("dating", Category::Dating),
    ("match", Category::Dating),
    ("love", Category::Dating),
    ("romance", Category::Dating),
    ("finance", Category::Finance),
    ("payment", Category::Finance),
    ("bank", Category::Finance),
    ("wallet", Category::Finance),
    ("crypto", Category::Finance),
    ("invest", Category::Finance),
    ("ai", Category::Tech),
    ("tech", Category::Tech),
    ("cloud", Category::Tech),
    ("code", Category::Tech),
    ("dev", Category::Tech),
];

/// Host-supplied description of the running app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Metadata {
    pub category: Option<Category>,
    /// Free text, usually a hostname.
    pub domain: Option<String>,
    pub title: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True when no field is set; detection on empty metadata is a no-op.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.domain.is_none() && self.title.is_none()
    }
}

/// Which metadata field produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    ExplicitCategory,
    Domain { pattern: &'static str },
    Title { pattern: &'static str },
}

impl DetectionSource {
    pub const fn field(self) -> &'static str {
        match self {
            Self::ExplicitCategory => "category",
            Self::Domain { .. } => "domain",
            Self::Title { .. } => "title",
        }
    }

    /// The matched pattern, if the detection came from a text scan.
    pub const fn pattern(self) -> Option<&'static str> {
        match self {
            Self::ExplicitCategory => None,
            Self::Domain { pattern } | Self::Title { pattern } => Some(pattern),
        }
    }
}

/// A successful detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub accent: AccentToken,
    pub category: Category,
    pub source: DetectionSource,
}

impl Detection {
    fn new(category: Category, source: DetectionSource) -> Self {
        Self {
            accent: category.accent(),
            category,
            source,
        }
    }
}

/// Scan `text` against [`PATTERNS`], returning the first pattern it contains.
pub fn match_pattern(text: &str) -> Option<(&'static str, Category)> {
    let lower = text.to_lowercase();
    let hit = PATTERNS
        .iter()
        .copied()
        .find(|(pattern, _)| lower.contains(pattern));
    if let Some((pattern, category)) = hit {
        tracing::debug!(
            target: "tint.detect",
            pattern,
            category = category.name(),
            "pattern matched"
        );
    }
    hit
}

/// Run detection and report where the result came from.
pub fn detect(metadata: &Metadata) -> Option<Detection> {
    if let Some(category) = metadata.category {
        return Some(Detection::new(category, DetectionSource::ExplicitCategory));
    }

    if let Some(domain) = metadata.domain.as_deref()
        && let Some((pattern, category)) = match_pattern(domain)
    {
        return Some(Detection::new(category, DetectionSource::Domain { pattern }));
    }

    if let Some(title) = metadata.title.as_deref()
        && let Some((pattern, category)) = match_pattern(title)
    {
        return Some(Detection::new(category, DetectionSource::Title { pattern }));
    }

    None
}

/// Resolve metadata to an accent. `None` means leave the current accent alone.
pub fn resolve(metadata: &Metadata) -> Option<AccentToken> {
    detect(metadata).map(|d| d.accent)
}
