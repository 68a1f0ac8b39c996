//! Product records.
//!
//! [`Product`] implements [`Resource`](resource_framework::Resource), so it can be
//! stored by a [`ResourceActor`](resource_framework::ResourceActor). See the impl for
//! how [`ProductInput`] and [`ProductFilter`] are applied.

use resource_framework::validation::{Validate, ValidationErrors, Validator};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const MIN_PRICE: f64 = 0.01;

/// Type-safe identifier for Products. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `description` - Free-form description, may be empty
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Payload for creating a product, and for replacing all of its fields on update.
///
/// Absent JSON fields fall back to empty/zero so that validation, not deserialization,
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .max_chars("name", &self.name, NAME_MAX_CHARS)
            .in_range("price", self.price, MIN_PRICE, f64::MAX)
            .max_chars("description", &self.description, DESCRIPTION_MAX_CHARS)
            .finish()
    }
}

/// Case-insensitive substring match on the product name.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFilter {
    pub name: String,
}
