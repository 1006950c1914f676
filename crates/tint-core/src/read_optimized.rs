#![forbid(unsafe_code)]

//! Read-optimized store backing the style namespace.
//!
//! The published accent is read on every render by every visual component
//! but written only on initialization, explicit set, or re-detection. Reads
//! go through [`arc_swap::ArcSwap`] so they never contend with the writer.
//!
//! # Example
//!
//! ```
//! use tint_core::read_optimized::{ArcSwapStore, ReadOptimized};
//!
//! let store = ArcSwapStore::new(42u64);
//! assert_eq!(store.load(), 42);
//!
//! store.store(99);
//! assert_eq!(store.load(), 99);
//! ```

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

/// A concurrent store optimized for read-heavy access patterns.
///
/// Implementations must guarantee:
/// - `load()` returns a consistent snapshot (no torn reads).
/// - `store()` is atomic with respect to concurrent `load()` calls.
pub trait ReadOptimized<T: Clone + Send + Sync>: Send + Sync {
    /// Read the current value.
    fn load(&self) -> T;

    /// Atomically replace the stored value.
    fn store(&self, val: T);
}

/// Wait-free reads via [`arc_swap::ArcSwap`].
pub struct ArcSwapStore<T> {
    inner: ArcSwap<T>,
}

impl<T: Clone + Send + Sync> ArcSwapStore<T> {
    pub fn new(val: T) -> Self {
        Self {
            inner: ArcSwap::from_pointee(val),
        }
    }

    /// Read without cloning; the guard derefs to `T`.
    pub fn load_ref(&self) -> arc_swap::Guard<Arc<T>> {
        self.inner.load()
    }
}

impl<T: Clone + Send + Sync> ReadOptimized<T> for ArcSwapStore<T> {
    #[inline]
    fn load(&self) -> T {
        let guard = self.inner.load();
        T::clone(&guard)
    }

    #[inline]
    fn store(&self, val: T) {
        self.inner.store(Arc::new(val));
    }
}

impl<T: fmt::Debug> fmt::Debug for ArcSwapStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcSwapStore")
            .field("value", &**self.inner.load())
            .finish()
    }
}
