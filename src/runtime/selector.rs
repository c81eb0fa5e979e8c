//! `Selector` interning for the `proxymark` runtime.
//!
//! This module implements a global selector registry with interning: each
//! unique operation name has exactly one interned entry, so selector
//! comparison is pointer equality and the hash is computed once at intern
//! time. Interned names are leaked and live for the program duration, which
//! keeps `Selector` a cheap `Copy` value suitable for storing in wrappers
//! and method tables.
//!
//! The benchmark interns a handful of selectors at setup time, so a single
//! `RwLock` over the registry map is sufficient; selector creation is never
//! on the measured path.
//!
//! # Thread Safety
//!
//! The registry is thread-safe and supports concurrent interning from
//! multiple threads.

use crate::error::{Error, Result};
use fxhash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Global selector registry instance.
static REGISTRY: OnceLock<RwLock<FxHashMap<&'static str, Selector>>> =
    OnceLock::new();

fn registry() -> &'static RwLock<FxHashMap<&'static str, Selector>> {
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// `Selector` represents a unique operation name in the runtime.
///
/// Selectors are **globally interned** - each unique name has exactly one
/// interned entry. This enables:
/// - Fast pointer equality comparison
/// - O(1) hashing via the precomputed hash
/// - `Copy` semantics (a selector is a name pointer plus its hash)
///
/// # Example
///
/// ```rust
/// use proxymark::runtime::Selector;
/// use std::str::FromStr;
///
/// let a = Selector::from_str("m").unwrap();
/// let b = Selector::from_str("m").unwrap();
///
/// // Same name = same selector
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy)]
pub struct Selector {
    /// Interned name, leaked at first intern, valid for the program duration.
    name: &'static str,
    /// Precomputed fxhash of the name.
    hash: u64,
}

impl Selector {
    /// Returns the selector's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the precomputed hash of the selector's name.
    #[must_use]
    pub const fn precomputed_hash(&self) -> u64 {
        self.hash
    }
}

impl FromStr for Selector {
    type Err = Error;

    /// Returns the selector for a given name, interning it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySelectorName`] if `name` is empty.
    ///
    /// # Panics
    ///
    /// Panics if the registry lock is poisoned (a thread panicked while
    /// interning).
    fn from_str(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptySelectorName);
        }

        // Fast path: already interned.
        {
            let map = registry().read().unwrap();
            if let Some(selector) = map.get(name) {
                return Ok(*selector);
            }
        }

        let mut map = registry().write().unwrap();
        // Re-check under the write lock; another thread may have interned
        // the name between the two lock acquisitions.
        if let Some(selector) = map.get(name) {
            return Ok(*selector);
        }

        let interned: &'static str = Box::leak(name.to_owned().into_boxed_str());
        let selector = Selector {
            name: interned,
            hash: fxhash::hash64(interned),
        };
        map.insert(interned, selector);
        Ok(selector)
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        // Interned names are unique, so identity comparison is sound.
        std::ptr::eq(self.name.as_ptr(), other.name.as_ptr())
    }
}

impl Eq for Selector {}

impl Hash for Selector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("name", &self.name)
            .field("hash", &self.hash)
            .finish()
    }
}
