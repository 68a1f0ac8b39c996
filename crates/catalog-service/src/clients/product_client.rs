//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductFilter, ProductId, ProductInput};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl ProductClient {
    /// Validates and stores a new product, returning it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces every field of product `id`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductInput,
    ) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Products whose name contains `name`, ignoring case. May be empty.
    #[instrument(skip(self))]
    pub async fn search_products(&self, name: String) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .search(ProductFilter { name })
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_create, expect_search, expect_update};
    use resource_framework::validation::Validate;
    use resource_framework::StoreError;

    fn widget_input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            price: 9.99,
            description: "A widget".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_product_sends_payload_unchanged() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task =
            tokio::spawn(async move { product_client.create_product(widget_input()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, widget_input());

        responder
            .send(Ok(Product::new(ProductId(1), "Widget", 9.99, "A widget")))
            .unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_create_product_maps_validation_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductInput::default())
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        let errors = params.validate().unwrap_err();
        responder
            .send(Err(StoreError::Validation(errors.clone()).into()))
            .unwrap();

        assert_eq!(
            create_task.await.unwrap(),
            Err(ProductError::Validation(errors))
        );
    }

    #[tokio::test]
    async fn test_update_product_maps_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            product_client
                .update_product(ProductId(42), widget_input())
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(42));
        assert_eq!(update.name, "Widget");
        responder
            .send(Err(StoreError::NotFound("42".to_string()).into()))
            .unwrap();

        assert_eq!(
            update_task.await.unwrap(),
            Err(ProductError::NotFound("42".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_products_wraps_name_in_filter() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let search_task = tokio::spawn(async move {
            product_client.search_products("lamp".to_string()).await
        });

        let (filter, responder) = expect_search(&mut receiver).await.unwrap();
        assert_eq!(filter.name, "lamp");
        responder.send(Ok(vec![])).unwrap();

        assert_eq!(search_task.await.unwrap(), Ok(vec![]));
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.list().await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(msg)) if msg == "Actor closed"
        ));
    }
}
