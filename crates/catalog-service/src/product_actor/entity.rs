//! Resource trait implementation for the Product domain type.
//!
//! This module contains the [`Resource`] implementation that lets [`Product`] be
//! stored and served by the generic [`resource_framework::ResourceActor`].

use crate::model::{Product, ProductFilter, ProductId, ProductInput};
use resource_framework::Resource;

impl Resource for Product {
    type Id = ProductId;
    type Create = ProductInput;
    type Update = ProductInput;
    type Filter = ProductFilter;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_create_params(id: ProductId, params: ProductInput) -> Self {
        Self::new(id, params.name, params.price, params.description)
    }

    /// Full replace: name, price and description all take the new values.
    fn apply_update(&mut self, update: ProductInput) {
        self.name = update.name;
        self.price = update.price;
        self.description = update.description;
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        self.name
            .to_lowercase()
            .contains(&filter.name.to_lowercase())
    }
}
