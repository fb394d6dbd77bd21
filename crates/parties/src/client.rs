use serde::{Deserialize, Deserializer, Serialize};

use shopmatch_core::{DomainError, DomainResult};

/// Identifier assigned to a buyer by the remote backend.
///
/// The backend sends either numbers or strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ClientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClientId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Where a buyer stands in the seller's follow-up pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Pending,
    Contacted,
    Sold,
    /// Any status string this dashboard does not know about.
    #[serde(other)]
    Other,
}

/// A buyer as reported by the backend. Every field may be missing.
///
/// Rows without an `id` are still listed but cannot have their status changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
}

impl Client {
    fn has_id(&self, id: &ClientId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Short detail line for list rows: city, else phone.
    pub fn detail(&self) -> Option<&str> {
        self.city.as_deref().or(self.phone.as_deref())
    }

    fn matches_name(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
    }
}

/// Which buyers a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientFilter {
    #[default]
    All,
    Status(ClientStatus),
}

impl ClientFilter {
    pub fn matches(self, client: &Client) -> bool {
        match self {
            ClientFilter::All => true,
            ClientFilter::Status(status) => client.status == Some(status),
        }
    }
}

/// Buyer counts for the filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClientTotals {
    pub all: usize,
    pub pending: usize,
    pub contacted: usize,
    pub sold: usize,
}

/// The buyer list of the current session, as last fetched from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch result.
    pub fn replace_all(&mut self, clients: Vec<Client>) {
        self.clients = clients;
    }

    /// Drop everything, e.g. after a failed fetch.
    pub fn clear(&mut self) {
        self.clients.clear();
    }

    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn get(&self, id: &ClientId) -> DomainResult<&Client> {
        self.clients
            .iter()
            .find(|c| c.has_id(id))
            .ok_or_else(|| DomainError::not_found("client", id))
    }

    /// Buyers passing `filter` whose name contains `query` (case-insensitive).
    ///
    /// Buyers without a name only show up for a blank query, so an unfiltered
    /// list still shows every row the backend returned.
    pub fn filtered(&self, filter: ClientFilter, query: &str) -> Vec<&Client> {
        let needle = query.trim().to_lowercase();
        self.clients
            .iter()
            .filter(|c| filter.matches(c) && c.matches_name(&needle))
            .collect()
    }

    pub fn totals(&self) -> ClientTotals {
        let count = |status| {
            self.clients
                .iter()
                .filter(|c| c.status == Some(status))
                .count()
        };
        ClientTotals {
            all: self.clients.len(),
            pending: count(ClientStatus::Pending),
            contacted: count(ClientStatus::Contacted),
            sold: count(ClientStatus::Sold),
        }
    }

    /// Record a status the backend accepted for a buyer.
    ///
    /// Returns `false` when the buyer already had that status. Buyers without
    /// an id never match, so they are skipped.
    pub fn set_status(&mut self, id: &ClientId, status: ClientStatus) -> DomainResult<bool> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.has_id(id))
            .ok_or_else(|| DomainError::not_found("client", id))?;
        if client.status == Some(status) {
            return Ok(false);
        }
        client.status = Some(status);
        Ok(true)
    }
}
