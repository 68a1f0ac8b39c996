use crate::clients::{ProductClient, QuoteClient};
use crate::config::ServiceConfig;
use crate::{product_actor, quote_actor};
use resource_framework::StoreError;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A store could not be built from its seed records.
    #[error("Invalid seed data: {0}")]
    Seed(#[from] StoreError),

    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

/// The runtime orchestrator for the catalog.
///
/// Owns one actor per resource type, each in its own Tokio task. The two actors share
/// nothing, so they never wait on each other.
///
/// # Example
///
/// ```rust
/// use catalog_service::config::ServiceConfig;
/// use catalog_service::lifecycle::CatalogSystem;
/// use resource_framework::ActorClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CatalogSystem::start(&ServiceConfig::default())?;
///
///     assert!(system.product_client.list().await?.is_empty());
///     assert_eq!(system.quote_client.list().await?.len(), 8);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Quote actor
    pub quote_client: QuoteClient,

    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Creates both actors and spawns them. Must be called inside a Tokio runtime.
    ///
    /// Fails with [`LifecycleError::Seed`] before anything is spawned if the quote seed
    /// is rejected.
    pub fn start(config: &ServiceConfig) -> Result<Self, LifecycleError> {
        let (product_actor, product_client) = product_actor::new(config.channel_capacity);
        let (quote_actor, quote_client) =
            quote_actor::new(config.channel_capacity, config.seed_quotes)?;

        let product_handle = tokio::spawn(product_actor.run());
        let quote_handle = tokio::spawn(quote_actor.run());

        info!(
            channel_capacity = config.channel_capacity,
            seed_quotes = config.seed_quotes,
            "Catalog system started"
        );

        Ok(Self {
            product_client: ProductClient::new(product_client),
            quote_client: QuoteClient::new(quote_client),
            handles: vec![product_handle, quote_handle],
        })
    }

    /// Drops this system's clients and waits for every actor to finish.
    ///
    /// Returns once the last outstanding clone of each client is gone.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.product_client);
        drop(self.quote_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(LifecycleError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
