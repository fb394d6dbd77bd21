use anyhow::Context;
use tracing::{info, info_span, warn, Span};

use shopmatch_catalog::{CatalogStore, SharedCatalog};
use shopmatch_core::{DomainResult, SessionId};
use shopmatch_parties::{
    Client, ClientDirectory, ClientId, ClientStatus, ProfilePatch, ProfileStore, SellerProfile,
};

use crate::config::SessionConfig;

/// Everything a signed-in seller works with, owned for the session lifetime.
///
/// The catalog is a [`SharedCatalog`] so it can be handed to several callers;
/// profile and buyer list are owned directly and mutated through `&mut self`.
/// All log events, catalog ones included, are emitted inside a `session` span
/// carrying `session_id` and `username`.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    span: Span,
    config: SessionConfig,
    catalog: SharedCatalog,
    profile: ProfileStore,
    clients: ClientDirectory,
}

impl Session {
    /// Build a session from `config`. Does not touch logging setup.
    pub fn start(config: SessionConfig) -> Self {
        let id = SessionId::new();
        let store = if config.seed_catalog {
            CatalogStore::seeded()
        } else {
            CatalogStore::new()
        };
        let span = info_span!(
            "session",
            session_id = %id,
            username = config.username.as_deref().unwrap_or("-")
        );
        span.in_scope(|| info!(products = store.len(), "session started"));

        Self {
            id,
            catalog: SharedCatalog::new(store).with_span(span.clone()),
            span,
            config,
            profile: ProfileStore::default(),
            clients: ClientDirectory::new(),
        }
    }

    /// Load configuration from the environment, initialize logging, and start.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = SessionConfig::from_env().context("failed to read session configuration")?;
        shopmatch_observability::init(config.log_format);
        Ok(Self::start(config))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    pub fn profile(&self) -> &SellerProfile {
        self.profile.profile()
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) -> DomainResult<&SellerProfile> {
        let _entered = self.span.enter();
        match self.profile.update(patch) {
            Ok(profile) => {
                info!("profile updated");
                Ok(profile)
            }
            Err(e) => {
                warn!("profile update rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn clients(&self) -> &ClientDirectory {
        &self.clients
    }

    /// Install the buyer list returned by the backend.
    pub fn load_clients(&mut self, clients: Vec<Client>) {
        let _entered = self.span.enter();
        info!(clients = clients.len(), "buyer list loaded");
        self.clients.replace_all(clients);
    }

    /// Record a buyer status change the backend confirmed.
    pub fn set_client_status(&mut self, id: &ClientId, status: ClientStatus) -> DomainResult<bool> {
        let _entered = self.span.enter();
        let changed = self.clients.set_status(id, status)?;
        if changed {
            info!(client_id = %id, ?status, "buyer status changed");
        }
        Ok(changed)
    }
}
