#![forbid(unsafe_code)]

//! Upgrade-prompt banner.
//!
//! The banner is decorative: it reads the published accent, shows a badge,
//! a title, an optional description, and a call-to-action, and hands user
//! interaction back to the host through two callbacks. It never writes
//! theme state.

use std::fmt;

use tint_core::{Result, StyleReader};
use tint_style::{AccentToken, InteractionState, InteractiveStyle, PackedRgba};

pub const DEFAULT_TITLE: &str = "Unlock Elite Features";
pub const DEFAULT_DESCRIPTION: &str =
    "Get access to advanced analytics, priority support, and exclusive tools.";
pub const DEFAULT_CTA: &str = "Upgrade to Elite";
pub const BADGE: &str = "Elite";

/// Layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerVariant {
    #[default]
    Default,
    /// Tighter padding, smaller title, no description.
    Compact,
    Full,
}

/// Size metrics for a variant, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerMetrics {
    pub padding: u16,
    pub title_size: u16,
    /// Vertical, horizontal.
    pub cta_padding: (u16, u16),
    pub shows_description: bool,
}

impl BannerVariant {
    pub const fn metrics(self) -> BannerMetrics {
        match self {
            Self::Compact => BannerMetrics {
                padding: 16,
                title_size: 16,
                cta_padding: (10, 20),
                shows_description: false,
            },
            Self::Default | Self::Full => BannerMetrics {
                padding: 24,
                title_size: 18,
                cta_padding: (12, 24),
                shows_description: true,
            },
        }
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Upgrade banner with host callbacks.
pub struct PremiumBanner {
    variant: BannerVariant,
    title: String,
    description: String,
    cta_text: String,
    show_dismiss: bool,
    on_upgrade: Option<Callback>,
    on_dismiss: Option<Callback>,
    interaction: InteractionState,
}

impl PremiumBanner {
    pub fn new() -> Self {
        Self {
            variant: BannerVariant::default(),
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            cta_text: DEFAULT_CTA.to_owned(),
            show_dismiss: true,
            on_upgrade: None,
            on_dismiss: None,
            interaction: InteractionState::Normal,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn cta_text(mut self, cta_text: impl Into<String>) -> Self {
        self.cta_text = cta_text.into();
        self
    }

    #[must_use]
    pub fn show_dismiss(mut self, show: bool) -> Self {
        self.show_dismiss = show;
        self
    }

    #[must_use]
    pub fn on_upgrade(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_upgrade = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_dismiss = Some(Box::new(f));
        self
    }

    /// The call-to-action was activated.
    pub fn upgrade(&mut self) {
        tracing::debug!(target: "tint.banner", "upgrade activated");
        if let Some(cb) = self.on_upgrade.as_mut() {
            cb();
        }
    }

    /// The dismiss control was activated. Ignored when the control is hidden.
    ///
    /// Returns whether the control was available.
    pub fn dismiss(&mut self) -> bool {
        if !self.show_dismiss {
            return false;
        }
        tracing::debug!(target: "tint.banner", "dismiss activated");
        if let Some(cb) = self.on_dismiss.as_mut() {
            cb();
        }
        true
    }

    pub fn pointer_enter(&mut self) {
        self.interaction = InteractionState::Hovered;
    }

    pub fn pointer_leave(&mut self) {
        self.interaction = InteractionState::Normal;
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Build the view against the current published accent.
    ///
    /// Fails with `NotInitialized` when no theme session is live.
    pub fn view(&self, reader: &StyleReader) -> Result<BannerView> {
        let vars = reader.load()?;
        let metrics = self.variant.metrics();
        let state = self.interaction;

        let border_glow = InteractiveStyle::new(None).hover(Some(vars.primary));
        let cta_glow = InteractiveStyle::new(vars.primary_20).hover(vars.primary_30);
        let cta_lift = InteractiveStyle::new(0u8).hover(2);

        Ok(BannerView {
            variant: self.variant,
            metrics,
            badge: BADGE,
            title: self.title.clone(),
            description: metrics.shows_description.then(|| self.description.clone()),
            cta_text: self.cta_text.clone(),
            show_dismiss: self.show_dismiss,
            accent: vars.token,
            accent_color: vars.primary,
            border_glow: border_glow.resolve(state),
            cta_glow: cta_glow.resolve(state),
            cta_lift: cta_lift.resolve(state),
        })
    }
}

impl Default for PremiumBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PremiumBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PremiumBanner")
            .field("variant", &self.variant)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("cta_text", &self.cta_text)
            .field("show_dismiss", &self.show_dismiss)
            .field("on_upgrade", &self.on_upgrade.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .field("interaction", &self.interaction)
            .finish()
    }
}

/// Resolved, render-ready banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub variant: BannerVariant,
    pub metrics: BannerMetrics,
    pub badge: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub cta_text: String,
    pub show_dismiss: bool,
    pub accent: AccentToken,
    pub accent_color: PackedRgba,
    /// Accent outline, only while the pointer is over the banner.
    pub border_glow: Option<PackedRgba>,
    pub cta_glow: PackedRgba,
    /// Upward offset of the call-to-action.
    pub cta_lift: u8,
}

impl BannerView {
    /// Plain-text rendering, one line per element.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        let dismiss = if self.show_dismiss { "  [x]" } else { "" };
        lines.push(format!("[{}] {}{dismiss}", self.badge.to_uppercase(), self.title));
        if let Some(desc) = &self.description {
            lines.push(desc.clone());
        }
        lines.push(format!("< {} >  ({} {})", self.cta_text, self.accent, self.accent_color));
        lines
    }
}
