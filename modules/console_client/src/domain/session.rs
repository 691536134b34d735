//! Current-company session state
//!
//! Exactly one company is "current" per client session. The store owns that
//! identity: pages read it by reference and never copy it into resource
//! state. Persistence is write-through so the session survives a reload, but
//! it is NOT a security boundary - whatever is read back is untrusted and
//! re-validated server-side on every request.

use crate::contract::Company;
use crate::domain::cache::QueryCache;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Durable storage for the session's company identity
///
/// `load` returns `None` for absent OR malformed state: a corrupted document
/// means logged-out, never an error surfaced to the page.
pub trait SessionPersistence: Send + Sync {
    /// Read the persisted company, if any
    fn load(&self) -> Option<Company>;

    /// Write-through persist the company
    fn store(&self, company: &Company) -> anyhow::Result<()>;

    /// Remove the persisted company
    fn remove(&self) -> anyhow::Result<()>;
}

/// Session store holding the active company
pub struct SessionStore {
    current: RwLock<Option<Company>>,
    persistence: Arc<dyn SessionPersistence>,
    cache: Arc<QueryCache>,
    tenant_tx: watch::Sender<Option<Uuid>>,
}

impl SessionStore {
    /// Create a store, restoring any persisted session
    pub fn new(persistence: Arc<dyn SessionPersistence>, cache: Arc<QueryCache>) -> Self {
        let restored = persistence.load();
        let (tenant_tx, _) = watch::channel(restored.as_ref().map(|c| c.id));
        Self {
            current: RwLock::new(restored),
            persistence,
            cache,
            tenant_tx,
        }
    }

    /// Current company, if signed in. Synchronous, no I/O.
    pub fn current(&self) -> Option<Company> {
        self.current.read().clone()
    }

    /// Replace the current company.
    ///
    /// Purges the query cache before the new identity becomes observable so
    /// a tenant switch can never serve data cached under the previous one.
    pub fn set_current(&self, company: Company) {
        self.cache.clear();
        if let Err(e) = self.persistence.store(&company) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        let tenant_id = company.id;
        *self.current.write() = Some(company);
        let _ = self.tenant_tx.send(Some(tenant_id));
    }

    /// Sign out: drop state, purge the cache, broadcast `None` so dependent
    /// pages redirect to the auth entry point.
    pub fn clear(&self) {
        self.cache.clear();
        if let Err(e) = self.persistence.remove() {
            tracing::warn!("Failed to remove persisted session: {}", e);
        }
        *self.current.write() = None;
        let _ = self.tenant_tx.send(None);
    }

    /// Subscribe to tenant changes; receives the active company id or `None`
    /// after sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<Uuid>> {
        self.tenant_tx.subscribe()
    }
}

/// In-memory persistence for tests and ephemeral sessions
#[derive(Clone, Default)]
pub struct MemorySessionPersistence {
    slot: Arc<RwLock<Option<Company>>>,
}

impl MemorySessionPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionPersistence for MemorySessionPersistence {
    fn load(&self) -> Option<Company> {
        self.slot.read().clone()
    }

    fn store(&self, company: &Company) -> anyhow::Result<()> {
        *self.slot.write() = Some(company.clone());
        Ok(())
    }

    fn remove(&self) -> anyhow::Result<()> {
        *self.slot.write() = None;
        Ok(())
    }
}
