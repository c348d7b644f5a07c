//! Cache-aware catalog loading.
//!
//! Two policies are supported:
//! - **Cache-first**: serve the session cache right away, then revalidate
//!   against the remote in the background.
//! - **Revalidate-with-fallback**: fetch first; fall back to the session
//!   cache only when the fetch fails.
//!
//! Remote failures never escape this module. They are logged and the view
//! ends up with an empty, cached or fresh catalog. No timeout is applied: a
//! remote call that never resolves leaves the handle loading forever.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Freshness};
use crate::error::SgpiResult;
use crate::record::Record;
use crate::remote::CatalogSource;
use crate::resource::Resource;
use crate::session::{self, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    CacheFirst,
    RevalidateWithFallback,
}

/// Snapshot published to a [`CatalogHandle`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState {
    pub catalog: Catalog,
    pub loading: bool,
}

/// A view's end of an in-flight load.
///
/// Dropping the handle is how a view unmounts: the background task notices
/// and discards its result.
pub struct CatalogHandle {
    rx: watch::Receiver<LoadState>,
}

impl CatalogHandle {
    /// The catalog as currently known (possibly empty or cached).
    pub fn catalog(&self) -> Catalog {
        self.rx.borrow().catalog.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.rx.borrow().loading
    }

    /// Wait for the next published catalog. `None` once loading has ended
    /// and nothing further will arrive.
    pub async fn changed(&mut self) -> Option<Catalog> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().catalog.clone())
    }

    /// Wait until loading has finished and return the final catalog.
    pub async fn settled(&mut self) -> Catalog {
        let settled = self
            .rx
            .wait_for(|state| !state.loading)
            .await
            .map(|state| state.catalog.clone());

        // Loader went away without finishing; keep what we have.
        settled.unwrap_or_else(|_| self.catalog())
    }
}

/// Reconciles the session cache with the remote catalog source.
#[derive(Clone)]
pub struct CatalogSync {
    source: Arc<dyn CatalogSource>,
    store: Arc<dyn SessionStore>,
}

impl CatalogSync {
    pub fn new(source: Arc<dyn CatalogSource>, store: Arc<dyn SessionStore>) -> Self {
        CatalogSync { source, store }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Catalog from the session cache alone; empty on a miss.
    pub fn cached(&self, resource: Resource) -> Catalog {
        let catalog = Catalog::empty(resource);
        match session::read_records(&*self.store, resource) {
            Some(records) => catalog.with_cached(records),
            None => {
                debug!(%resource, "session cache miss");
                catalog
            }
        }
    }

    /// Start loading `resource` under `policy` without blocking the caller.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&self, resource: Resource, policy: LoadPolicy) -> CatalogHandle {
        let initial = match policy {
            LoadPolicy::CacheFirst => self.cached(resource),
            LoadPolicy::RevalidateWithFallback => Catalog::empty(resource),
        };

        let (tx, rx) = watch::channel(LoadState {
            catalog: initial.clone(),
            loading: true,
        });

        let sync = self.clone();
        tokio::spawn(async move {
            let catalog = match policy {
                LoadPolicy::CacheFirst => sync.refresh(initial).await,
                LoadPolicy::RevalidateWithFallback => sync.revalidate_from(initial).await,
            };

            if tx.is_closed() {
                debug!(%resource, "view dropped before load finished; discarding result");
                return;
            }
            let _ = tx.send(LoadState {
                catalog,
                loading: false,
            });
        });

        CatalogHandle { rx }
    }

    /// Revalidate-with-fallback, awaited in place.
    pub async fn revalidate(&self, resource: Resource) -> Catalog {
        self.revalidate_from(Catalog::empty(resource)).await
    }

    /// Serve the cache when it has an entry, otherwise fetch once.
    ///
    /// Used by one-shot readers (the homepage card) that do not need a
    /// background refresh.
    pub async fn cache_or_fetch(&self, resource: Resource) -> Catalog {
        let cached = self.cached(resource);
        if cached.freshness == Freshness::Cached {
            return cached;
        }
        self.refresh(cached).await
    }

    async fn fetch_and_store(&self, resource: Resource) -> SgpiResult<Vec<Record>> {
        let records = self.source.fetch(resource).await?;
        session::write_records(&*self.store, resource, &records);
        Ok(records)
    }

    /// Fresh catalog on success, `current` unchanged on failure.
    async fn refresh(&self, current: Catalog) -> Catalog {
        let resource = current.resource;
        match self.fetch_and_store(resource).await {
            Ok(records) => current.with_fresh(records),
            Err(e) => {
                warn!(%resource, error = %e, "catalog fetch failed; keeping current catalog");
                current
            }
        }
    }

    async fn revalidate_from(&self, current: Catalog) -> Catalog {
        let resource = current.resource;
        match self.fetch_and_store(resource).await {
            Ok(records) => current.with_fresh(records),
            Err(e) => {
                warn!(%resource, error = %e, "catalog fetch failed; falling back to session cache");
                match session::read_records(&*self.store, resource) {
                    Some(records) => current.with_cached(records),
                    None => current,
                }
            }
        }
    }
}
