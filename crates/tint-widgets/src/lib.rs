#![forbid(unsafe_code)]

//! Accent-aware components for tint.
//!
//! Components here only read theme state through a
//! [`StyleReader`](tint_core::StyleReader); mutation stays with the host.

pub mod banner;

pub use banner::{BannerMetrics, BannerVariant, BannerView, PremiumBanner};
