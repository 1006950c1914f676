#![forbid(unsafe_code)]

//! Reference host for tint.
//!
//! Reads a [`ThemeConfig`] (JSON file from `TINT_CONFIG`, then `TINT_*`
//! environment overrides), starts a theme session, prints the upgrade banner,
//! and optionally re-detects against `TINT_HARNESS_REDETECT_DOMAIN` to show
//! the accent propagating to the already-built banner.
//!
//! Logging follows `RUST_LOG` (default `info`).

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tint_core::{ThemeConfig, ThemeRegistry};
use tint_style::Metadata;
use tint_widgets::{BannerVariant, PremiumBanner};
use tracing_subscriber::EnvFilter;

const ENV_CONFIG: &str = "TINT_CONFIG";
const ENV_VARIANT: &str = "TINT_HARNESS_VARIANT";
const ENV_REDETECT_DOMAIN: &str = "TINT_HARNESS_REDETECT_DOMAIN";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> tint_core::Result<ThemeConfig> {
    let base = match std::env::var(ENV_CONFIG) {
        Ok(path) if !path.trim().is_empty() => ThemeConfig::from_json_file(path.trim())?,
        _ => ThemeConfig::default(),
    };
    base.with_overrides(|key| std::env::var(key).ok())
}

fn banner_variant() -> BannerVariant {
    match std::env::var(ENV_VARIANT).ok().as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("compact") => BannerVariant::Compact,
        Some(v) if v.eq_ignore_ascii_case("full") => BannerVariant::Full,
        _ => BannerVariant::Default,
    }
}

fn run() -> tint_core::Result<()> {
    let config = load_config()?;
    let mut registry = ThemeRegistry::new();
    let reader = registry.reader();

    let changes = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&changes);
    reader.subscribe(move |vars| {
        seen.fetch_add(1, Ordering::Relaxed);
        tracing::info!(accent = vars.token.name(), primary = %vars.primary, "accent changed");
    });

    registry.initialize_from_config(&config)?;

    let banner = PremiumBanner::new()
        .variant(banner_variant())
        .on_upgrade(|| tracing::info!("upgrade requested"))
        .on_dismiss(|| tracing::info!("banner dismissed"));

    for line in banner.view(&reader)?.lines() {
        println!("{line}");
    }

    if let Ok(domain) = std::env::var(ENV_REDETECT_DOMAIN) {
        let applied = registry
            .state_mut()?
            .detect_and_apply(&Metadata::new().domain(domain.clone()));
        match applied {
            Some(accent) => tracing::info!(%domain, %accent, "re-detected"),
            None => tracing::info!(%domain, "no category for domain; accent unchanged"),
        }
        for line in banner.view(&reader)?.lines() {
            println!("{line}");
        }
    }

    tracing::info!(
        notifications = changes.load(Ordering::Relaxed),
        "harness finished"
    );
    registry.teardown();
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, usage = err.is_usage_error(), "tint-harness failed");
            eprintln!("tint-harness: {err}");
            ExitCode::FAILURE
        }
    }
}
