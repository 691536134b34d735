//! Query cache for tenant-scoped fetches
//!
//! Short-lived cache of the last successful fetch per
//! (resource, company, params) key. Staleness is purely mutation-driven:
//! a successful create/update/delete marks the matching slice stale, and a
//! tenant switch destroys everything. No TTL.
//!
//! `get` never serves a stale entry; `peek` does, so a page can keep
//! rendering the previous data while a refetch is in flight.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;
use uuid::Uuid;
use xxhash_rust::xxh3::xxh3_64;

/// Cacheable console resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Conversations,
    Products,
    Categories,
    Orders,
    Plans,
    Invitations,
}

impl Resource {
    /// URL path segment for this resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conversations => "conversations",
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Orders => "orders",
            Self::Plans => "plans",
            Self::Invitations => "invitations",
        }
    }
}

/// Cache key: deterministic from (resource, company, query params)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub tenant_id: Uuid,
    pub params_hash: u64,
}

impl QueryKey {
    /// Build a key. Params are canonicalized (sorted by name) before hashing
    /// so pair order at the call site cannot split cache entries.
    pub fn new(resource: Resource, tenant_id: Uuid, params: &[(String, String)]) -> Self {
        let mut sorted: Vec<&(String, String)> = params.iter().collect();
        sorted.sort();
        let mut buf = String::new();
        for (name, value) in sorted {
            buf.push_str(name);
            buf.push('=');
            buf.push_str(value);
            buf.push('&');
        }
        Self {
            resource,
            tenant_id,
            params_hash: xxh3_64(buf.as_bytes()),
        }
    }

    /// Key for a parameterless list fetch
    pub fn bare(resource: Resource, tenant_id: Uuid) -> Self {
        Self::new(resource, tenant_id, &[])
    }
}

/// A cached value handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cached<T> {
    pub value: T,
    pub fetched_at: DateTime<Utc>,
    pub stale: bool,
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: DateTime<Utc>,
    stale: bool,
}

/// Concurrent cache of last successful fetches
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh entry for this key, if any. Stale entries are never returned:
    /// after a mutation the caller sees `None` until a refetch lands.
    pub fn get<T: Clone + Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Cached<T>> {
        let entry = self.entries.get(key)?;
        if entry.stale {
            return None;
        }
        let value = entry.value.downcast_ref::<T>()?.clone();
        Some(Cached {
            value,
            fetched_at: entry.fetched_at,
            stale: false,
        })
    }

    /// Entry for this key even if stale - for rendering while a refetch is
    /// in flight.
    pub fn peek<T: Clone + Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Cached<T>> {
        let entry = self.entries.get(key)?;
        let value = entry.value.downcast_ref::<T>()?.clone();
        Some(Cached {
            value,
            fetched_at: entry.fetched_at,
            stale: entry.stale,
        })
    }

    /// Store a fresh value for this key
    pub fn set<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        self.entries.insert(
            key,
            CacheEntry {
                value: Arc::new(value),
                fetched_at: Utc::now(),
                stale: false,
            },
        );
    }

    /// Mark every entry matching the predicate stale
    pub fn invalidate<F: Fn(&QueryKey) -> bool>(&self, predicate: F) {
        for mut entry in self.entries.iter_mut() {
            if predicate(entry.key()) {
                entry.stale = true;
            }
        }
    }

    /// Mutation-site convenience: stale out every entry for one resource of
    /// one company, regardless of params.
    pub fn invalidate_resource(&self, resource: Resource, tenant_id: Uuid) {
        self.invalidate(|key| key.resource == resource && key.tenant_id == tenant_id);
    }

    /// Mark everything stale
    pub fn invalidate_all(&self) {
        self.invalidate(|_| true);
    }

    /// Destroy every entry. Called on tenant switch and sign-out so nothing
    /// cached under the previous company can ever be served again.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of entries currently held (stale included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_param_order() {
        let tenant = Uuid::new_v4();
        let a = QueryKey::new(
            Resource::Conversations,
            tenant,
            &[
                ("limit".to_string(), "10".to_string()),
                ("recent_only".to_string(), "true".to_string()),
            ],
        );
        let b = QueryKey::new(
            Resource::Conversations,
            tenant,
            &[
                ("recent_only".to_string(), "true".to_string()),
                ("limit".to_string(), "10".to_string()),
            ],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_separates_tenants_and_params() {
        let t1 = Uuid::new_v4();
        let t2 = Uuid::new_v4();
        assert_ne!(
            QueryKey::bare(Resource::Products, t1),
            QueryKey::bare(Resource::Products, t2)
        );
        assert_ne!(
            QueryKey::bare(Resource::Conversations, t1),
            QueryKey::new(
                Resource::Conversations,
                t1,
                &[("limit".to_string(), "5".to_string())]
            )
        );
    }

    #[test]
    fn test_get_filters_stale_but_peek_serves_it() {
        let cache = QueryCache::new();
        let tenant = Uuid::new_v4();
        let key = QueryKey::bare(Resource::Products, tenant);
        cache.set(key, vec!["widget".to_string()]);

        assert!(cache.get::<Vec<String>>(&key).is_some());

        cache.invalidate_resource(Resource::Products, tenant);

        assert!(cache.get::<Vec<String>>(&key).is_none());
        let peeked = cache.peek::<Vec<String>>(&key).unwrap();
        assert!(peeked.stale);
        assert_eq!(peeked.value, vec!["widget".to_string()]);
    }

    #[test]
    fn test_invalidate_is_scoped_to_resource_and_tenant() {
        let cache = QueryCache::new();
        let t1 = Uuid::new_v4();
        let t2 = Uuid::new_v4();
        cache.set(QueryKey::bare(Resource::Products, t1), 1u32);
        cache.set(QueryKey::bare(Resource::Orders, t1), 2u32);
        cache.set(QueryKey::bare(Resource::Products, t2), 3u32);

        cache.invalidate_resource(Resource::Products, t1);

        assert!(cache.get::<u32>(&QueryKey::bare(Resource::Products, t1)).is_none());
        assert!(cache.get::<u32>(&QueryKey::bare(Resource::Orders, t1)).is_some());
        assert!(cache.get::<u32>(&QueryKey::bare(Resource::Products, t2)).is_some());
    }

    #[test]
    fn test_set_after_invalidate_is_fresh_again() {
        let cache = QueryCache::new();
        let tenant = Uuid::new_v4();
        let key = QueryKey::bare(Resource::Categories, tenant);
        cache.set(key, 1u32);
        cache.invalidate_resource(Resource::Categories, tenant);
        cache.set(key, 2u32);

        let cached = cache.get::<u32>(&key).unwrap();
        assert_eq!(cached.value, 2);
        assert!(!cached.stale);
    }

    #[test]
    fn test_clear_destroys_everything() {
        let cache = QueryCache::new();
        cache.set(QueryKey::bare(Resource::Plans, Uuid::new_v4()), 1u32);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_type_mismatch_is_a_miss() {
        let cache = QueryCache::new();
        let key = QueryKey::bare(Resource::Plans, Uuid::new_v4());
        cache.set(key, 7u32);
        assert!(cache.get::<String>(&key).is_none());
    }
}
