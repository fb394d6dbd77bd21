//! Demo catalog a fresh seller session starts with.

use tracing::error;

use shopmatch_core::{DomainResult, ProductId};

use crate::product::{NewProduct, Product};

/// The seed products, oldest first.
///
/// Statuses are derived from stock like any other product, so the first camera
/// (5 units) reports `LowStock`.
pub fn seed_inputs() -> Vec<(ProductId, NewProduct)> {
    vec![
        (
            ProductId::new(1),
            NewProduct::new("Cámara Vintage 35mm", 299.99)
                .with_stock(5)
                .with_sku("CAM-001")
                .with_category("Cámaras"),
        ),
        (
            ProductId::new(2),
            NewProduct::new("Lente 50mm f/1.8", 149.99)
                .with_stock(12)
                .with_sku("LEN-001")
                .with_category("Lentes"),
        ),
        (
            ProductId::new(3),
            NewProduct::new("Trípode Profesional", 89.99)
                .with_stock(0)
                .with_sku("TRI-001")
                .with_category("Accesorios"),
        ),
        (
            ProductId::new(4),
            NewProduct::new("Flash Externo", 199.99)
                .with_stock(3)
                .with_sku("FLA-001")
                .with_category("Iluminación"),
        ),
    ]
}

/// Build the seed products, failing on the first invalid entry.
pub(crate) fn try_seed_products() -> DomainResult<Vec<Product>> {
    seed_inputs()
        .into_iter()
        .map(|(id, input)| Product::create(id, input))
        .collect()
}

pub(crate) fn seed_products() -> Vec<Product> {
    match try_seed_products() {
        Ok(products) => products,
        Err(e) => {
            debug_assert!(false, "seed catalog is invalid: {e}");
            error!("seed catalog is invalid, starting empty: {e}");
            Vec::new()
        }
    }
}
