//! The in-memory catalog of one seller session.

use serde::Serialize;

use shopmatch_core::{DomainError, DomainResult, ProductId};

use crate::product::{NewProduct, Product, ProductPatch, ProductStatus};
use crate::seed;

/// Authoritative, exclusively-owned collection of products.
///
/// Products are kept in display order: the most recently added product comes
/// first. New ids are `max(existing ids, 0) + 1`, so an id frees up again once
/// every product with a higher id has been deleted.
///
/// Every mutation either succeeds completely or leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the demo seed products (ids 1 to 4).
    pub fn seeded() -> Self {
        Self {
            products: seed::seed_products(),
        }
    }

    /// All products, newest first.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id_typed() == id)
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// The id the next `add` would assign.
    pub fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(Product::id_typed)
            .max()
            .unwrap_or(ProductId::new(0))
            .next()
    }

    /// Validate and store a new product at the front of the list.
    pub fn add(&mut self, input: NewProduct) -> DomainResult<Product> {
        let product = Product::create(self.next_id(), input)?;
        self.products.insert(0, product.clone());
        Ok(product)
    }

    /// Merge `patch` onto the product with `id` and return the updated record.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found("product", id))?;
        let product = &mut self.products[index];
        product.apply(patch)?;
        Ok(product.clone())
    }

    /// Remove the product with `id`.
    ///
    /// Deleting an unknown id is a no-op, reported as `None` rather than an
    /// error. Callers that care can check the return value.
    pub fn delete(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position(id)?;
        Some(self.products.remove(index))
    }

    /// Products whose name contains `query`, ignoring case, in list order.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn status_summary(&self) -> StatusSummary {
        self.products
            .iter()
            .fold(StatusSummary::default(), |mut summary, p| {
                match p.status() {
                    ProductStatus::Active => summary.active += 1,
                    ProductStatus::LowStock => summary.low_stock += 1,
                    ProductStatus::OutOfStock => summary.out_of_stock += 1,
                }
                summary
            })
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id_typed() == id)
    }
}

/// Product counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub active: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.active + self.low_stock + self.out_of_stock
    }
}
