//! Shared query cache.
//!
//! Every page reads its collections through [`QueryClient`]. Entries are
//! keyed by resource plus query parameters; a mutation invalidates every
//! entry of its resource. Each load is tagged with a generation number and a
//! response is only stored (and handed back) when its generation is still
//! the latest for the key.

use super::api_utils::{api_base, collection_url, with_query};
use super::http::{fetch_all, ApiError};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// REST collections the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Products,
    Categories,
    Inventory,
    Orders,
    OrdersByMonth,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Categories => "categories",
            Resource::Inventory => "inventory",
            Resource::Orders => "orders",
            Resource::OrdersByMonth => "orders-by-month",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub params: Vec<(String, String)>,
}

impl QueryKey {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    pub fn url(&self, base: &str) -> String {
        with_query(&collection_url(base, self.resource.path()), &self.params)
    }
}

impl From<Resource> for QueryKey {
    fn from(resource: Resource) -> Self {
        Self::new(resource)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource.path())?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

/// Proof that a load was started; redeemed by [`CacheStore::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: QueryKey,
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Untyped storage behind [`QueryClient`]. Values are stored as `Rc<dyn Any>`
/// and downcast on read.
#[derive(Default)]
pub struct CacheStore {
    entries: HashMap<QueryKey, Rc<dyn Any>>,
    generations: HashMap<QueryKey, u64>,
}

impl CacheStore {
    pub fn get<T: 'static>(&self, key: &QueryKey) -> Option<Rc<T>> {
        self.entries
            .get(key)
            .and_then(|value| value.clone().downcast::<T>().ok())
    }

    pub fn begin(&mut self, key: &QueryKey) -> Ticket {
        let generation = self.generations.entry(key.clone()).or_insert(0);
        *generation += 1;
        Ticket {
            key: key.clone(),
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generations.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Store `value` if the ticket is still the latest load for its key.
    /// Stale results are dropped and `None` is returned.
    pub fn complete<T: 'static>(&mut self, ticket: &Ticket, value: T) -> Option<Rc<T>> {
        if !self.is_current(ticket) {
            return None;
        }
        let value = Rc::new(value);
        self.entries
            .insert(ticket.key.clone(), value.clone() as Rc<dyn Any>);
        Some(value)
    }

    /// Forget every entry of `resource`. In-flight loads for it become stale.
    /// Returns the number of entries dropped.
    pub fn invalidate(&mut self, resource: Resource) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.resource != resource);
        for (key, generation) in self.generations.iter_mut() {
            if key.resource == resource {
                *generation += 1;
            }
        }
        before - self.entries.len()
    }
}

/// Handle to the app-wide cache, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct QueryClient {
    store: StoredValue<CacheStore, LocalStorage>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            store: StoredValue::new_local(CacheStore::default()),
        }
    }

    /// Load a whole collection, served from the cache when present.
    pub async fn fetch<T>(&self, key: impl Into<QueryKey>) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + Clone + 'static,
    {
        let key = key.into();
        if let Some(hit) = self
            .store
            .try_with_value(|store| store.get::<Vec<T>>(&key))
            .flatten()
        {
            log::debug!("cache hit: {}", key);
            return Ok(hit.as_ref().clone());
        }

        let ticket = self
            .store
            .try_update_value(|store| store.begin(&key))
            .ok_or(ApiError::Superseded)?;
        let rows = fetch_all::<T>(&key.url(&api_base())).await?;

        let stored = self
            .store
            .try_update_value(|store| store.complete(&ticket, rows))
            .flatten();
        match stored {
            Some(rows) => {
                log::info!("loaded {} ({} rows)", key, rows.len());
                Ok(rows.as_ref().clone())
            }
            None => {
                log::debug!("dropped stale response for {} (gen {})", key, ticket.generation());
                Err(ApiError::Superseded)
            }
        }
    }

    pub fn invalidate(&self, resource: Resource) {
        let dropped = self
            .store
            .try_update_value(|store| store.invalidate(resource))
            .unwrap_or(0);
        leptos::logging::log!("invalidated {} ({} entries)", resource.path(), dropped);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The cache provided by `App`.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_and_url() {
        let key = QueryKey::new(Resource::Orders).with_param("status", "shipped");
        assert_eq!(key.to_string(), "orders?status=shipped");
        assert_eq!(key.url("http://h/api"), "http://h/api/orders/?status=shipped");
        assert_eq!(
            QueryKey::from(Resource::OrdersByMonth).url("http://h/api"),
            "http://h/api/orders-by-month/"
        );
    }

    #[test]
    fn test_complete_and_get() {
        let mut store = CacheStore::default();
        let key = QueryKey::new(Resource::Products);
        let ticket = store.begin(&key);
        assert!(store.complete(&ticket, vec![1, 2, 3]).is_some());
        assert_eq!(store.get::<Vec<i32>>(&key).as_deref(), Some(&vec![1, 2, 3]));
        // wrong type reads as a miss
        assert!(store.get::<Vec<String>>(&key).is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut store = CacheStore::default();
        let key = QueryKey::new(Resource::Inventory);
        let first = store.begin(&key);
        let second = store.begin(&key);

        assert!(store.complete(&second, vec!["new"]).is_some());
        assert!(store.complete(&first, vec!["old"]).is_none());
        assert_eq!(store.get::<Vec<&str>>(&key).as_deref(), Some(&vec!["new"]));
    }

    #[test]
    fn test_invalidate_drops_entries_and_in_flight_loads() {
        let mut store = CacheStore::default();
        let all = QueryKey::new(Resource::Products);
        let filtered = QueryKey::new(Resource::Products).with_param("category", "3");
        let other = QueryKey::new(Resource::Categories);

        for key in [&all, &filtered, &other] {
            let ticket = store.begin(key);
            store.complete(&ticket, 1_u8);
        }
        let in_flight = store.begin(&all);

        assert_eq!(store.invalidate(Resource::Products), 2);
        assert!(store.get::<u8>(&all).is_none());
        assert!(store.get::<u8>(&filtered).is_none());
        assert_eq!(store.get::<u8>(&other).as_deref(), Some(&1));
        assert!(!store.is_current(&in_flight));
        assert!(store.complete(&in_flight, 2_u8).is_none());
    }

    #[test]
    fn test_refetch_during_page_load_wins_over_it() {
        let mut store = CacheStore::default();
        let key = QueryKey::new(Resource::Inventory);
        let page_load = store.begin(&key);

        // a refetch invalidates first, then loads on its own ticket
        store.invalidate(Resource::Inventory);
        let refetch = store.begin(&key);
        assert!(store.complete(&refetch, vec![7_i64]).is_some());

        // the page load's response is stale and must be retried by the caller
        assert!(!store.is_current(&page_load));
        assert!(store.complete(&page_load, vec![1_i64]).is_none());
        assert_eq!(store.get::<Vec<i64>>(&key).as_deref(), Some(&vec![7_i64]));
    }
}
