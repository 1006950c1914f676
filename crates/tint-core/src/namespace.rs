#![forbid(unsafe_code)]

//! The shared style namespace.
//!
//! A [`StyleNamespace`] is the single slot where the current accent is
//! published for every visual component in the tree. Writes come only from
//! the owning [`ThemeState`](crate::ThemeState); everyone else holds a
//! [`StyleReader`], which can load and subscribe but never publish.
//!
//! Publishing is synchronous: the slot is swapped, the generation counter is
//! bumped, and every subscriber runs before [`StyleNamespace::publish`]
//! returns. A reader that loads after a change call has returned always sees
//! the new value.
//!
//! Until the first publish the slot is empty and [`StyleReader::load`] fails
//! with [`ThemeError::NotInitialized`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tint_style::{AccentToken, PackedRgba};

use crate::error::{Result, ThemeError};
use crate::read_optimized::{ArcSwapStore, ReadOptimized};

/// Logical name of the primary accent variable.
pub const ACCENT_PRIMARY: &str = "--accent-primary";
/// Primary accent at 20% opacity (resting glow).
pub const ACCENT_PRIMARY_20: &str = "--accent-primary-20";
/// Primary accent at 30% opacity (hover glow).
pub const ACCENT_PRIMARY_30: &str = "--accent-primary-30";

/// Every key a namespace can answer, in publish order.
pub const STYLE_KEYS: [&str; 3] = [ACCENT_PRIMARY, ACCENT_PRIMARY_20, ACCENT_PRIMARY_30];

/// The accent expanded into the values components read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentVars {
    pub token: AccentToken,
    pub primary: PackedRgba,
    pub primary_20: PackedRgba,
    pub primary_30: PackedRgba,
}

impl AccentVars {
    pub fn for_token(token: AccentToken) -> Self {
        let primary = token.color();
        Self {
            token,
            primary,
            primary_20: primary.with_opacity(0.2),
            primary_30: primary.with_opacity(0.3),
        }
    }

    /// Look up a style variable by name.
    pub fn get(&self, key: &str) -> Option<PackedRgba> {
        match key {
            ACCENT_PRIMARY => Some(self.primary),
            ACCENT_PRIMARY_20 => Some(self.primary_20),
            ACCENT_PRIMARY_30 => Some(self.primary_30),
            _ => None,
        }
    }

    /// `(key, value)` pairs for every published variable.
    pub fn entries(&self) -> [(&'static str, PackedRgba); 3] {
        [
            (ACCENT_PRIMARY, self.primary),
            (ACCENT_PRIMARY_20, self.primary_20),
            (ACCENT_PRIMARY_30, self.primary_30),
        ]
    }
}

impl From<AccentToken> for AccentVars {
    fn from(token: AccentToken) -> Self {
        Self::for_token(token)
    }
}

/// Handle returned by [`StyleNamespace::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&AccentVars) + Send + Sync>;

/// Process-wide accent slot with change notification.
pub struct StyleNamespace {
    slot: ArcSwapStore<Option<AccentVars>>,
    generation: AtomicU64,
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
}

impl StyleNamespace {
    /// An empty namespace; nothing is readable until the first publish.
    pub fn new() -> Self {
        Self {
            slot: ArcSwapStore::new(None),
            generation: AtomicU64::new(0),
            next_id: AtomicU64::new(1),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Subscriber)>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publish `vars`, then notify every subscriber in subscription order.
    ///
    /// Returns the new generation.
    pub fn publish(&self, vars: AccentVars) -> u64 {
        self.slot.store(Some(vars));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        // Snapshot so callbacks may subscribe or unsubscribe without deadlock.
        let snapshot: Vec<Subscriber> = self
            .subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();

        tracing::debug!(
            target: "tint.theme",
            accent = vars.token.name(),
            primary = %vars.primary,
            generation,
            subscribers = snapshot.len(),
            "accent published"
        );

        for callback in &snapshot {
            callback(&vars);
        }
        generation
    }

    /// Current accent, or `NotInitialized` if nothing was ever published.
    pub fn load(&self) -> Result<AccentVars> {
        self.slot.load().ok_or(ThemeError::NotInitialized)
    }

    pub fn is_published(&self) -> bool {
        self.slot.load_ref().is_some()
    }

    /// Look up a single style variable.
    pub fn get(&self, key: &str) -> Result<PackedRgba> {
        let vars = self.load()?;
        vars.get(key)
            .ok_or_else(|| ThemeError::UnknownStyleKey(key.to_owned()))
    }

    /// Number of publishes and clears since creation. Readers compare generations to
    /// decide whether to re-read.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AccentVars) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    /// Return the slot to the unpublished state. Subscribers are kept; the
    /// generation keeps counting so stale readers still notice a change.
    pub fn clear(&self) {
        self.slot.store(None);
        self.generation.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(target: "tint.theme", "style namespace cleared");
    }
}

impl Default for StyleNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleNamespace")
            .field("current", &self.slot.load())
            .field("generation", &self.generation())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Read/subscribe view of a [`StyleNamespace`].
#[derive(Debug, Clone)]
pub struct StyleReader {
    namespace: Arc<StyleNamespace>,
}

impl StyleReader {
    pub fn new(namespace: Arc<StyleNamespace>) -> Self {
        Self { namespace }
    }

    pub fn load(&self) -> Result<AccentVars> {
        self.namespace.load()
    }

    /// Shorthand for the current token.
    pub fn accent(&self) -> Result<AccentToken> {
        self.load().map(|vars| vars.token)
    }

    pub fn get(&self, key: &str) -> Result<PackedRgba> {
        self.namespace.get(key)
    }

    pub fn generation(&self) -> u64 {
        self.namespace.generation()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AccentVars) + Send + Sync + 'static,
    {
        self.namespace.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.namespace.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn empty_namespace_fails_loudly() {
        let ns = StyleNamespace::new();
        assert!(!ns.is_published());
        assert!(matches!(ns.load(), Err(ThemeError::NotInitialized)));
        assert!(matches!(
            ns.get(ACCENT_PRIMARY),
            Err(ThemeError::NotInitialized)
        ));
    }

    #[test]
    fn publish_is_visible_immediately() {
        let ns = StyleNamespace::new();
        let generation = ns.publish(AccentVars::for_token(AccentToken::Rose));
        assert_eq!(generation, 1);
        assert_eq!(ns.load().unwrap().token, AccentToken::Rose);
        assert_eq!(
            ns.get(ACCENT_PRIMARY).unwrap(),
            AccentToken::Rose.color()
        );
    }

    #[test]
    fn glow_variables_are_translucent_primary() {
        let vars = AccentVars::for_token(AccentToken::Emerald);
        assert_eq!(vars.primary_20.with_alpha(255), vars.primary);
        assert_eq!(vars.primary_20.a(), 51);
        assert_eq!(vars.primary_30.a(), 77);
        let keys: Vec<_> = vars.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, STYLE_KEYS);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let ns = StyleNamespace::new();
        ns.publish(AccentToken::Cyan.into());
        match ns.get("--accent-secondary") {
            Err(ThemeError::UnknownStyleKey(key)) => assert_eq!(key, "--accent-secondary"),
            other => panic!("expected UnknownStyleKey, got {other:?}"),
        }
    }

    #[test]
    fn subscribers_run_synchronously_in_order() {
        let ns = StyleNamespace::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let log = Arc::clone(&log);
            ns.subscribe(move |vars| log.lock().unwrap().push((tag, vars.token)));
        }
        ns.publish(AccentToken::Emerald.into());
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("first", AccentToken::Emerald),
                ("second", AccentToken::Emerald)
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let ns = StyleNamespace::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let id = ns.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        ns.publish(AccentToken::Rose.into());
        assert!(ns.unsubscribe(id));
        assert!(!ns.unsubscribe(id));
        ns.publish(AccentToken::Cyan.into());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(ns.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_subscribe_during_publish() {
        let ns = Arc::new(StyleNamespace::new());
        let inner = Arc::clone(&ns);
        ns.subscribe(move |_| {
            inner.subscribe(|_| {});
        });
        ns.publish(AccentToken::Rose.into());
        assert_eq!(ns.subscriber_count(), 2);
    }

    #[test]
    fn clear_returns_to_unpublished() {
        let ns = StyleNamespace::new();
        ns.publish(AccentToken::Rose.into());
        ns.clear();
        assert!(matches!(ns.load(), Err(ThemeError::NotInitialized)));
        assert_eq!(ns.generation(), 2);
    }

    #[test]
    fn reader_sees_publishes_through_shared_namespace() {
        let ns = Arc::new(StyleNamespace::new());
        let reader = StyleReader::new(Arc::clone(&ns));
        assert!(reader.accent().is_err());
        ns.publish(AccentToken::Emerald.into());
        assert_eq!(reader.accent().unwrap(), AccentToken::Emerald);
        assert_eq!(reader.generation(), 1);
    }
}
