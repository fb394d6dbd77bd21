//! Thread-safe handle over a [`CatalogStore`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn, Span};

use shopmatch_core::{DomainResult, ProductId};

use crate::product::{NewProduct, Product, ProductPatch};
use crate::store::{CatalogStore, StatusSummary};

/// Cloneable handle to one catalog shared by several callers.
///
/// A single lock guards the whole store and is held for the full duration of
/// each operation, so id assignment and insertion in `add` happen as one step.
/// Reads hand out owned clones. Log events are emitted inside the handle's
/// span, so they carry whatever fields the owner attached to it.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogStore>>,
    span: Span,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
            span: Span::none(),
        }
    }

    /// Emit this handle's log events inside `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn seeded() -> Self {
        Self::new(CatalogStore::seeded())
    }

    pub fn list(&self) -> Vec<Product> {
        self.read().list().to_vec()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        let _entered = self.span.enter();
        let result = self.read().get(id).cloned();
        if result.is_err() {
            debug!(product_id = %id, "product lookup missed");
        }
        result
    }

    pub fn add(&self, input: NewProduct) -> DomainResult<Product> {
        let _entered = self.span.enter();
        match self.write().add(input) {
            Ok(product) => {
                info!(
                    product_id = %product.id_typed(),
                    status = %product.status(),
                    stock = product.stock(),
                    "product added"
                );
                Ok(product)
            }
            Err(e) => {
                warn!("product add rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn update(&self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let _entered = self.span.enter();
        match self.write().update(id, patch) {
            Ok(product) => {
                info!(
                    product_id = %id,
                    status = %product.status(),
                    stock = product.stock(),
                    "product updated"
                );
                Ok(product)
            }
            Err(e) => {
                warn!(product_id = %id, "product update rejected: {e}");
                Err(e)
            }
        }
    }

    /// Remove a product; unknown ids are a no-op returning `None`.
    pub fn delete(&self, id: ProductId) -> Option<Product> {
        let _entered = self.span.enter();
        let removed = self.write().delete(id);
        match &removed {
            Some(_) => info!(product_id = %id, "product deleted"),
            None => debug!(product_id = %id, "delete of unknown product ignored"),
        }
        removed
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        self.read().search(query).into_iter().cloned().collect()
    }

    pub fn status_summary(&self) -> StatusSummary {
        self.read().status_summary()
    }

    /// Owned copy of the current catalog state.
    pub fn snapshot(&self) -> CatalogStore {
        self.read().clone()
    }

    // Every mutation is all-or-nothing, so a store behind a poisoned lock is
    // still consistent and can keep serving.
    fn read(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(CatalogStore::default())
    }
}

impl From<CatalogStore> for SharedCatalog {
    fn from(store: CatalogStore) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductStatus;

    #[test]
    fn clones_share_one_store() {
        let a = SharedCatalog::seeded();
        let b = a.clone();
        let added = a.add(NewProduct::new("X", 10.0)).unwrap();
        assert_eq!(b.get(added.id_typed()).unwrap(), added);
        assert_eq!(b.list()[0].id_typed(), added.id_typed());
    }

    #[test]
    fn snapshot_is_detached() {
        let shared = SharedCatalog::seeded();
        let snapshot = shared.snapshot();
        shared.delete(ProductId::new(1));
        assert_eq!(snapshot.len(), 4);
        assert_eq!(shared.list().len(), 3);
    }

    #[test]
    fn update_through_handle_recomputes_status() {
        let shared = SharedCatalog::seeded();
        let updated = shared.update(ProductId::new(3), ProductPatch::stock(20)).unwrap();
        assert_eq!(updated.status(), ProductStatus::Active);
        assert_eq!(shared.status_summary().out_of_stock, 0);
    }
}
