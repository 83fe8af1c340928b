use crate::types::ItemKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type PriceMap = HashMap<ItemKey, String>;

/// Stores raw price responses in memory, keyed by market hash name. Entries are never evicted
/// and never expire; the cache lives as long as the process.
///
/// Internally the map is stored in an [`Arc`] wrapped in a [`Mutex`]. Cloning the cache gives
/// another handle to the same map, so the same cache can be handed to every component that
/// prices items.
///
/// # Examples
/// ```
/// use steam_inventory_pricer::PriceCache;
///
/// let price_cache = PriceCache::default();
/// let shared = price_cache.clone();
///
/// price_cache.insert("AK-47 | Redline (Field-Tested)".into(), "{}".into());
///
/// assert!(shared.get("AK-47 | Redline (Field-Tested)").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceCache {
    inner: Arc<Mutex<PriceMap>>,
}

impl PriceCache {
    /// Creates a new empty [`PriceCache`].
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PriceMap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Gets the raw price payload for `item_key`.
    pub fn get(&self, item_key: &str) -> Option<String> {
        self.lock().get(item_key).cloned()
    }

    /// Inserts the raw price payload for `item_key`, replacing any previous payload.
    pub fn insert(&self, item_key: ItemKey, payload: String) {
        self.lock().insert(item_key, payload);
    }

    /// Whether a payload is stored for `item_key`.
    pub fn contains(&self, item_key: &str) -> bool {
        self.lock().contains_key(item_key)
    }

    /// The number of stored payloads.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
