use serde::{Deserialize, Serialize};

use shopmatch_core::{DomainError, DomainResult};

/// Highest seller rating the dashboard displays.
pub const MAX_SELLER_RATING: f64 = 5.0;

/// Seller profile shown on the dashboard header and the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_sales: f64,
    pub active_listings: u32,
    pub seller_rating: f64,
    pub notifications: bool,
}

impl SellerProfile {
    /// Profile a fresh session starts with until the seller edits it.
    pub fn demo() -> Self {
        Self {
            full_name: "Carlos Mendoza".to_string(),
            email: "carlos@example.com".to_string(),
            phone: "+52 555 123 4567".to_string(),
            address: "Ciudad de México, MX".to_string(),
            total_sales: 15_400.0,
            active_listings: 85,
            seller_rating: 4.8,
            notifications: true,
        }
    }
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_listings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl ProfilePatch {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.full_name {
            if name.trim().is_empty() {
                return Err(DomainError::invalid_input("fullName cannot be empty"));
            }
        }
        if let Some(email) = &self.email {
            let email = email.trim();
            if email.is_empty() || !email.contains('@') {
                return Err(DomainError::invalid_input("email must be an address"));
            }
        }
        if let Some(sales) = self.total_sales {
            if !sales.is_finite() || sales < 0.0 {
                return Err(DomainError::invalid_input("totalSales cannot be negative"));
            }
        }
        if let Some(rating) = self.seller_rating {
            if !(0.0..=MAX_SELLER_RATING).contains(&rating) {
                return Err(DomainError::invalid_input(format!(
                    "sellerRating must be between 0 and {MAX_SELLER_RATING}"
                )));
            }
        }
        Ok(())
    }
}

/// Owns the seller profile for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStore {
    profile: SellerProfile,
}

impl ProfileStore {
    pub fn new(profile: SellerProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    /// Shallow-merge `patch` onto the profile.
    ///
    /// The whole patch is validated first; on error nothing changes.
    pub fn update(&mut self, patch: ProfilePatch) -> DomainResult<&SellerProfile> {
        patch.validate()?;

        let p = &mut self.profile;
        if let Some(v) = patch.full_name {
            p.full_name = v;
        }
        if let Some(v) = patch.email {
            p.email = v;
        }
        if let Some(v) = patch.phone {
            p.phone = v;
        }
        if let Some(v) = patch.address {
            p.address = v;
        }
        if let Some(v) = patch.total_sales {
            p.total_sales = v;
        }
        if let Some(v) = patch.active_listings {
            p.active_listings = v;
        }
        if let Some(v) = patch.seller_rating {
            p.seller_rating = v;
        }
        if let Some(v) = patch.notifications {
            p.notifications = v;
        }
        Ok(&self.profile)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(SellerProfile::demo())
    }
}
