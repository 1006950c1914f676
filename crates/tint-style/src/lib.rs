#![forbid(unsafe_code)]

//! Accent vocabulary for tint.
//!
//! # Role in tint
//! `tint-style` is the pure layer: it knows the closed set of accent tokens,
//! the app categories they belong to, and how to detect a category from
//! host metadata. It holds no state; `tint-core` owns the mutable theme and
//! publishes what this crate resolves.
//!
//! # This crate provides
//! - [`AccentToken`] and [`Category`] with their static mapping.
//! - [`Metadata`] and the ordered [`PATTERNS`] table.
//! - [`resolve`] / [`detect`], the total metadata-to-accent function.
//! - [`PackedRgba`] color values and [`interactive`] pointer-state styling.

/// Accent tokens and app categories.
pub mod accent;
/// Packed color values.
pub mod color;
/// Category detection from metadata.
pub mod detect;
/// Pointer-state style variants.
pub mod interactive;

pub use accent::{AccentToken, Category, ParseError};
pub use color::PackedRgba;
pub use detect::{Detection, DetectionSource, Metadata, PATTERNS, detect, match_pattern, resolve};
pub use interactive::{InteractionState, InteractiveStyle};
