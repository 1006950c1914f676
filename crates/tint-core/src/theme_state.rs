#![forbid(unsafe_code)]

//! The host-owned accent cell.
//!
//! [`ThemeState`] holds the current [`AccentToken`] and is the only writer
//! of its [`StyleNamespace`]. Every change publishes exactly once; a
//! detection that finds nothing changes nothing and publishes nothing.

use std::sync::Arc;

use tint_style::{AccentToken, Detection, Metadata, detect};

use crate::namespace::{AccentVars, StyleNamespace, StyleReader};

/// Current accent plus the metadata it was initialized with.
#[derive(Debug)]
pub struct ThemeState {
    current: AccentToken,
    metadata: Option<Metadata>,
    namespace: Arc<StyleNamespace>,
}

impl ThemeState {
    /// Start a session on a fresh namespace.
    ///
    /// See [`ThemeState::initialize_in`].
    pub fn initialize(initial: AccentToken, metadata: Option<Metadata>) -> Self {
        Self::initialize_in(Arc::new(StyleNamespace::new()), initial, metadata)
    }

    /// Start a session that publishes into `namespace`.
    ///
    /// With metadata, detection runs first and its accent wins; if detection
    /// finds nothing (or there is no metadata) `initial` is applied as-is.
    /// Exactly one publish happens either way.
    pub fn initialize_in(
        namespace: Arc<StyleNamespace>,
        initial: AccentToken,
        metadata: Option<Metadata>,
    ) -> Self {
        let detected = metadata.as_ref().and_then(traced_detect);
        let current = detected.map_or(initial, |d| d.accent);

        tracing::info!(
            target: "tint.theme",
            initial = initial.name(),
            accent = current.name(),
            detected = detected.is_some(),
            "theme initialized"
        );

        let state = Self {
            current,
            metadata,
            namespace,
        };
        state.publish();
        state
    }

    fn publish(&self) {
        self.namespace.publish(AccentVars::for_token(self.current));
    }

    /// Overwrite the accent, bypassing detection. Always publishes.
    pub fn set_accent(&mut self, token: AccentToken) {
        tracing::debug!(
            target: "tint.theme",
            from = self.current.name(),
            to = token.name(),
            "accent set"
        );
        self.current = token;
        self.publish();
    }

    /// Detect from `metadata` and apply the result.
    ///
    /// Returns the applied accent, or `None` when nothing matched; in that
    /// case the state and the namespace are untouched.
    pub fn detect_and_apply(&mut self, metadata: &Metadata) -> Option<AccentToken> {
        let detection = traced_detect(metadata)?;
        self.current = detection.accent;
        self.publish();
        Some(detection.accent)
    }

    /// Re-run detection against the metadata captured at initialization.
    pub fn redetect(&mut self) -> Option<AccentToken> {
        let metadata = self.metadata.clone()?;
        self.detect_and_apply(&metadata)
    }

    pub fn current_accent(&self) -> AccentToken {
        self.current
    }

    /// Metadata supplied at initialization, if any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// A read/subscribe handle for rendering surfaces.
    pub fn reader(&self) -> StyleReader {
        StyleReader::new(Arc::clone(&self.namespace))
    }

    pub(crate) fn namespace(&self) -> &Arc<StyleNamespace> {
        &self.namespace
    }
}

fn traced_detect(metadata: &Metadata) -> Option<Detection> {
    let _span = tracing::debug_span!(
        "theme.detect",
        has_category = metadata.category.is_some(),
        has_domain = metadata.domain.is_some(),
        has_title = metadata.title.is_some(),
    )
    .entered();

    let detection = detect(metadata);
    match detection {
        Some(d) => tracing::debug!(
            target: "tint.theme",
            accent = d.accent.name(),
            category = d.category.name(),
            field = d.source.field(),
            pattern = d.source.pattern().unwrap_or(""),
            "category detected"
        ),
        None => tracing::debug!(target: "tint.theme", "no category detected"),
    }
    detection
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tint_style::Category;
    use tracing_test::traced_test;

    fn recording_state(
        initial: AccentToken,
        metadata: Option<Metadata>,
    ) -> (ThemeState, Arc<Mutex<Vec<AccentToken>>>) {
        let namespace = Arc::new(StyleNamespace::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        namespace.subscribe(move |vars| sink.lock().unwrap().push(vars.token));
        (
            ThemeState::initialize_in(namespace, initial, metadata),
            seen,
        )
    }

    #[test]
    fn initialize_without_metadata_publishes_initial_once() {
        let (state, seen) = recording_state(AccentToken::Cyan, None);
        assert_eq!(state.current_accent(), AccentToken::Cyan);
        assert_eq!(*seen.lock().unwrap(), vec![AccentToken::Cyan]);
        assert_eq!(state.reader().generation(), 1);
    }

    #[test]
    fn initialize_with_matching_metadata_publishes_detected_once() {
        let meta = Metadata::new().domain("payments.example");
        let (state, seen) = recording_state(AccentToken::Cyan, Some(meta));
        assert_eq!(state.current_accent(), AccentToken::Emerald);
        assert_eq!(*seen.lock().unwrap(), vec![AccentToken::Emerald]);
    }

    #[test]
    fn initialize_falls_back_when_detection_misses() {
        let meta = Metadata::new().domain("example.org");
        let (state, seen) = recording_state(AccentToken::Rose, Some(meta));
        assert_eq!(state.current_accent(), AccentToken::Rose);
        assert_eq!(*seen.lock().unwrap(), vec![AccentToken::Rose]);
    }

    #[test]
    fn set_accent_overwrites_and_always_publishes() {
        let (mut state, seen) =
            recording_state(AccentToken::Cyan, Some(Metadata::new().category(Category::Dating)));
        state.set_accent(AccentToken::Emerald);
        assert_eq!(state.current_accent(), AccentToken::Emerald);
        state.set_accent(AccentToken::Emerald);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![AccentToken::Rose, AccentToken::Emerald, AccentToken::Emerald]
        );
        assert_eq!(state.reader().accent().unwrap(), AccentToken::Emerald);
    }

    #[test]
    fn failed_detection_leaves_everything_alone() {
        let (mut state, seen) = recording_state(AccentToken::Rose, None);
        let generation = state.reader().generation();
        assert_eq!(state.detect_and_apply(&Metadata::new()), None);
        assert_eq!(state.detect_and_apply(&Metadata::new().title("Weather")), None);
        assert_eq!(state.current_accent(), AccentToken::Rose);
        assert_eq!(state.reader().generation(), generation);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn detect_and_apply_is_idempotent() {
        let meta = Metadata::new().domain("secure-bank-portal.io");
        let (mut once, _) = recording_state(AccentToken::Cyan, None);
        once.detect_and_apply(&meta);
        let (mut twice, _) = recording_state(AccentToken::Cyan, None);
        twice.detect_and_apply(&meta);
        twice.detect_and_apply(&meta);
        assert_eq!(once.current_accent(), twice.current_accent());
        assert_eq!(once.reader().load().unwrap(), twice.reader().load().unwrap());
    }

    #[test]
    fn redetect_uses_initial_metadata() {
        let meta = Metadata::new().title("Romance Finder");
        let (mut state, _) = recording_state(AccentToken::Cyan, Some(meta.clone()));
        state.set_accent(AccentToken::Cyan);
        assert_eq!(state.redetect(), Some(AccentToken::Rose));
        assert_eq!(state.current_accent(), AccentToken::Rose);
        assert_eq!(state.metadata(), Some(&meta));
    }

    #[test]
    fn redetect_without_metadata_is_noop() {
        let (mut state, seen) = recording_state(AccentToken::Emerald, None);
        assert_eq!(state.redetect(), None);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[traced_test]
    #[test]
    fn detection_is_logged() {
        let mut state = ThemeState::initialize(AccentToken::Cyan, None);
        state.detect_and_apply(&Metadata::new().domain("cloud.example"));
        assert!(logs_contain("theme initialized"));
        assert!(logs_contain("category detected"));
        assert!(logs_contain("accent published"));
    }
}
