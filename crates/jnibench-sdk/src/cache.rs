//! Field-identifier memo table
//!
//! Maps `(class, field name, descriptor)` to a resolved field identifier.
//! Entries live for the rest of the process, which is only sound while the
//! owning class stays loaded. The host does not unload the benchmark class.

use dashmap::DashMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use crate::error::HostResult;

/// Memo table key
///
/// Borrows `'static` names so building a key for a lookup never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    /// Owning class binary name
    pub class: &'static str,
    /// Field name
    pub name: &'static str,
    /// Type descriptor
    pub descriptor: &'static str,
}

impl FieldKey {
    /// Create a new key.
    pub const fn new(class: &'static str, name: &'static str, descriptor: &'static str) -> Self {
        Self {
            class,
            name,
            descriptor,
        }
    }
}

/// Thread-safe memo table of resolved field identifiers.
///
/// Two threads missing on the same key both run the resolver and the last
/// insert wins. That is harmless as long as resolution is idempotent, which
/// holds for a fixed class, name and descriptor.
pub struct FieldCache<F> {
    map: DashMap<FieldKey, F, BuildHasherDefault<FxHasher>>,
}

impl<F: Copy> FieldCache<F> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            map: DashMap::default(),
        }
    }

    /// Look up a key without resolving.
    pub fn get(&self, key: &FieldKey) -> Option<F> {
        self.map.get(key).map(|entry| *entry)
    }

    /// Return the cached identifier, or run `resolve` and cache its result.
    ///
    /// Failed resolutions are not cached.
    pub fn get_or_try_insert_with(
        &self,
        key: &FieldKey,
        resolve: impl FnOnce() -> HostResult<F>,
    ) -> HostResult<F> {
        if let Some(id) = self.get(key) {
            return Ok(id);
        }
        // The map guard is not held while the resolver calls into the host.
        let id = resolve()?;
        self.map.insert(*key, id);
        tracing::debug!(
            target: "jnibench",
            class = key.class,
            field = key.name,
            descriptor = key.descriptor,
            "cached field id"
        );
        Ok(id)
    }

    /// Number of cached identifiers
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<F: Copy> Default for FieldCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
