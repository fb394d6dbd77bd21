use std::thread;

use shopmatch_catalog::{NewProduct, ProductId, ProductPatch, ProductStatus};
use shopmatch_parties::{Client, ClientFilter, ClientId, ClientStatus, ProfilePatch};
use shopmatch_session::{Session, SessionConfig};

#[test]
fn seller_manages_catalog_profile_and_buyers() {
    let mut session = Session::start(SessionConfig::default().with_username("carlos"));
    assert_eq!(session.config().username.as_deref(), Some("carlos"));

    // Product form submission.
    let input: NewProduct =
        serde_json::from_str(r#"{"name":"Correa de cuero","price":25.0,"stock":8}"#).unwrap();
    let added = session.catalog().add(input).unwrap();
    assert_eq!(added.id_typed(), ProductId::new(5));
    assert_eq!(added.status(), ProductStatus::Active);

    // Edit form: sell down to two units.
    let patch: ProductPatch = serde_json::from_str(r#"{"stock":2,"price":22.5}"#).unwrap();
    let edited = session.catalog().update(added.id_typed(), patch).unwrap();
    assert_eq!(edited.status(), ProductStatus::LowStock);
    assert_eq!(edited.price().amount(), 22.5);

    // Profile page.
    let profile = session
        .update_profile(ProfilePatch {
            address: Some("Monterrey, MX".to_string()),
            ..ProfilePatch::default()
        })
        .unwrap();
    assert_eq!(profile.address, "Monterrey, MX");
    assert_eq!(profile.email, "carlos@example.com");

    // Buyer list.
    let buyers: Vec<Client> = serde_json::from_str(
        r#"[{"id":1,"name":"Ana","status":"pending"},{"id":2,"name":"Beto","status":"sold"}]"#,
    )
    .unwrap();
    session.load_clients(buyers);
    assert!(session
        .set_client_status(&ClientId::new("1"), ClientStatus::Contacted)
        .unwrap());
    let contacted = session
        .clients()
        .filtered(ClientFilter::Status(ClientStatus::Contacted), "");
    assert_eq!(contacted.len(), 1);
    assert_eq!(session.clients().totals().pending, 0);
}

#[test]
fn catalog_handle_is_shared_across_threads() {
    let session = Session::start(SessionConfig::default().with_seed_catalog(false));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let catalog = session.catalog().clone();
            thread::spawn(move || catalog.add(NewProduct::new(format!("p{i}"), 1.0)).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut ids: Vec<u64> = session
        .catalog()
        .list()
        .iter()
        .map(|p| p.id_typed().get())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn rejected_profile_update_reports_invalid_input() {
    let mut session = Session::start(SessionConfig::default());
    let err = session
        .update_profile(ProfilePatch {
            seller_rating: Some(-1.0),
            ..ProfilePatch::default()
        })
        .unwrap_err();
    assert!(matches!(err, shopmatch_core::DomainError::InvalidInput(_)));
}
