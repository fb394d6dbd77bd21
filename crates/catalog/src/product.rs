use serde::{Deserialize, Serialize};

use shopmatch_core::{DomainError, DomainResult, Entity, Price, ProductId};

/// Highest stock count that still reports as [`ProductStatus::LowStock`].
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Availability of a product, derived from its stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    LowStock,
    OutOfStock,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::LowStock => "LowStock",
            ProductStatus::OutOfStock => "OutOfStock",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status for a given stock count. Depends on `stock` alone.
pub fn derive_status(stock: u32) -> ProductStatus {
    if stock == 0 {
        ProductStatus::OutOfStock
    } else if stock <= LOW_STOCK_THRESHOLD {
        ProductStatus::LowStock
    } else {
        ProductStatus::Active
    }
}

/// A catalog item owned by the [`CatalogStore`](crate::CatalogStore).
///
/// Products are only constructed by the store, so `id` and `status` can never be
/// chosen by callers. `status` always matches the last stock value written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sku: Option<String>,
    price: Price,
    stock: u32,
    status: ProductStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Product {
    /// Validate `input` and build the stored record for `id`.
    pub(crate) fn create(id: ProductId, input: NewProduct) -> DomainResult<Self> {
        validate_name(&input.name)?;
        let price = match input.price {
            Some(amount) => Price::new(amount)?,
            None => return Err(DomainError::invalid_input("price is required")),
        };

        let image = input.image.or_else(|| input.images.first().cloned());

        Ok(Self {
            id,
            name: input.name,
            description: input.description,
            sku: input.sku,
            price,
            stock: input.stock,
            status: derive_status(input.stock),
            image,
            images: input.images,
            category: input.category,
        })
    }

    /// Shallow-merge `patch` onto this product.
    ///
    /// All supplied fields are validated before anything is written, so a
    /// rejected patch leaves the product untouched. Status is recomputed only
    /// when the patch carries a stock value. A new image list without an
    /// explicit cover makes its first entry the cover (none if the list is empty).
    pub(crate) fn apply(&mut self, patch: ProductPatch) -> DomainResult<()> {
        if let Some(name) = patch.name.as_deref() {
            validate_name(name)?;
        }
        let price = patch.price.map(Price::new).transpose()?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(sku) = patch.sku {
            self.sku = Some(sku);
        }
        if let Some(price) = price {
            self.price = price;
        }
        match (patch.image, patch.images) {
            (Some(image), images) => {
                self.image = Some(image);
                if let Some(images) = images {
                    self.images = images;
                }
            }
            (None, Some(images)) => {
                self.image = images.first().cloned();
                self.images = images;
            }
            (None, None) => {}
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
            self.status = derive_status(stock);
        }
        Ok(())
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Cover image (data URL or remote URL), opaque to the catalog.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Check if the product can currently be sold (anything in stock).
    pub fn is_available(&self) -> bool {
        self.status != ProductStatus::OutOfStock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_input("name cannot be empty"));
    }
    Ok(())
}

/// Input for [`CatalogStore::add`](crate::CatalogStore::add).
///
/// `price` is optional at the type level so that a payload without a price
/// decodes and is then rejected by the store with `InvalidInput`. A missing
/// `stock` means zero units. Without an explicit `image`, the first entry of
/// `images` becomes the cover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock: u32,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub category: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach uploaded images. The first one becomes the cover image unless a
    /// cover was already set.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        if self.image.is_none() {
            self.image = images.first().cloned();
        }
        self.images = images;
        self
    }
}

/// Partial update for [`CatalogStore::update`](crate::CatalogStore::update).
///
/// Absent fields are left untouched. There is no `id` or `status` field: an
/// incoming payload carrying either key has it ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn stock(stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
