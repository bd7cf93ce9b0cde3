//! Memoized record types keyed by field-name set.
//!
//! [`RecordType::define`] always mints a new type. The cache instead returns
//! the *same* type for every request with the same set of field names, so
//! records derived from similar data can be compared directly.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tabula_foundation::{AsFieldMap, FieldName, Record, RecordType, Result};

use crate::config::CacheConfig;

/// Sorted, deduplicated field names identifying one cached type.
type CacheKey = Arc<[FieldName]>;

fn cache_key<I, N>(names: I) -> CacheKey
where
    I: IntoIterator<Item = N>,
    N: Into<FieldName>,
{
    let mut names: Vec<FieldName> = names.into_iter().map(Into::into).collect();
    names.sort_unstable();
    names.dedup();
    names.into()
}

/// Process-wide memo from field-name set to generated record type.
///
/// Entries are created on first request and never evicted. Lookups take a
/// shared lock; a miss re-checks under the exclusive lock, so at most one
/// type is ever committed per key.
pub struct TypeCache {
    config: CacheConfig,
    types: RwLock<HashMap<CacheKey, RecordType>>,
}

impl TypeCache {
    /// Creates an empty cache with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with the given configuration.
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        let types = RwLock::new(HashMap::with_capacity(config.initial_capacity));
        Self { config, types }
    }

    /// Returns the cache configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the record type for this set of field names, generating it on
    /// first use.
    ///
    /// Name order and repeats are ignored; the generated schema lists the
    /// names in sorted order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` if `names` is empty.
    pub fn type_for<I, N>(&self, names: I) -> Result<RecordType>
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        let key = cache_key(names);

        if let Some(ty) = self.types.read().get(&key) {
            if self.config.trace_hits {
                tracing::trace!(type_id = ty.id().index(), fields = ?key, "type cache hit");
            }
            return Ok(ty.clone());
        }

        let mut types = self.types.write();
        match types.entry(key) {
            // Another writer got here between our read and write locks.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let ty = RecordType::builder(entry.key().iter().cloned())
                    .name(self.config.type_name.clone())
                    .build()?;
                tracing::debug!(
                    type_id = ty.id().index(),
                    fields = ?entry.key(),
                    "type cache miss, generated record type"
                );
                Ok(entry.insert(ty).clone())
            }
        }
    }

    /// Derives a record from any field-map source, using the cached type for
    /// its key set.
    ///
    /// # Errors
    ///
    /// Returns an uncoercible-input error if `source` has no mapping form, or
    /// `InvalidSchema` if it has no keys.
    pub fn instantiate<S: AsFieldMap + ?Sized>(&self, source: &S) -> Result<Record> {
        let pairs = source.as_field_map()?;
        let ty = self.type_for(pairs.iter().map(|(name, _)| name))?;
        ty.construct_from_map(pairs)
    }

    /// Returns true if a type is cached for this set of field names.
    pub fn contains<I, N>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        self.types.read().contains_key(&cache_key(names))
    }

    /// Returns the number of cached types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Returns true if no types are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl Default for TypeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCache")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}

static GLOBAL: LazyLock<TypeCache> = LazyLock::new(TypeCache::new);

/// Returns the process-wide type cache.
#[must_use]
pub fn global() -> &'static TypeCache {
    &GLOBAL
}

/// Derives a record from `source` through the process-wide cache.
///
/// Two calls whose sources share a key set produce records of the identical
/// record type.
///
/// # Errors
///
/// See [`TypeCache::instantiate`].
pub fn from<S: AsFieldMap + ?Sized>(source: &S) -> Result<Record> {
    global().instantiate(source)
}
