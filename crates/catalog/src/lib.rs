//! Seller catalog domain module.
//!
//! This crate owns the in-memory product catalog of one seller session: the
//! product model, the stock-derived status rule, and the store that keeps both
//! consistent. Pure domain logic (no IO, no HTTP, no storage); `SharedCatalog`
//! adds the locking needed when several callers share one store.

pub mod product;
pub mod seed;
pub mod shared;
pub mod store;

pub use product::{
    derive_status, NewProduct, Product, ProductPatch, ProductStatus, LOW_STOCK_THRESHOLD,
};
pub use shared::SharedCatalog;
pub use store::{CatalogStore, StatusSummary};

pub use shopmatch_core::{DomainError, DomainResult, Price, ProductId};
