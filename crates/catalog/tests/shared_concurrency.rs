use std::collections::HashSet;
use std::thread;

use shopmatch_catalog::{derive_status, NewProduct, ProductPatch, SharedCatalog};

#[test]
fn concurrent_adds_get_distinct_ids() {
    let catalog = SharedCatalog::seeded();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|i| {
                        catalog
                            .add(NewProduct::new(format!("w{worker}-{i}"), 1.0).with_stock(i))
                            .unwrap()
                            .id_typed()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "id {id} assigned twice");
        }
    }

    let products = catalog.list();
    assert_eq!(products.len(), 4 + 8 * 25);
    assert_eq!(products[0].id_typed().get(), 4 + 8 * 25);
}

#[test]
fn status_stays_consistent_under_concurrent_updates() {
    let catalog = SharedCatalog::seeded();

    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for round in 0..50u32 {
                    let id = (round % 4 + 1) as u64;
                    catalog
                        .update(id.into(), ProductPatch::stock((round + worker) % 9))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for product in catalog.list() {
        assert_eq!(product.status(), derive_status(product.stock()));
    }
}
