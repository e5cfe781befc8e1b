//! Catalog seeding: wipe every product, then load the static dataset with
//! one concurrent insert per record.

pub mod data;

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info, info_span, instrument, warn, Instrument, Span};

use crate::errors::ServiceError;
use crate::products::ProductsService;

pub const SEED_EXECUTED: &str = "Seed executed";

pub struct SeedService {
    products: Arc<ProductsService>,
    span: Span,
}

impl SeedService {
    pub fn new(products: Arc<ProductsService>) -> Self {
        Self { products, span: info_span!("seed_service") }
    }

    pub fn with_span(products: Arc<ProductsService>, span: Span) -> Self { Self { products, span } }

    /// Replace the catalog with [`data::initial_products`].
    ///
    /// The first failed insert fails the whole run and aborts the inserts
    /// still in flight; rows already written stay.
    #[instrument(parent = &self.span, skip_all)]
    pub async fn run_seed(&self) -> Result<&'static str, ServiceError> {
        let inserted = self.insert_new_products().await?;
        info!(inserted, "seed_completed");
        Ok(SEED_EXECUTED)
    }

    async fn insert_new_products(&self) -> Result<usize, ServiceError> {
        self.products.delete_all_products().await?;

        let mut tasks = JoinSet::new();
        for product in data::initial_products() {
            let products = Arc::clone(&self.products);
            tasks.spawn(async move { products.create(product).await }.instrument(Span::current()));
        }

        let mut inserted = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(_)) => inserted += 1,
                Ok(Err(e)) => {
                    warn!(error = %e, inserted, "seed insert failed");
                    return Err(e);
                }
                Err(e) => {
                    error!(error = %e, "seed insert task did not finish");
                    return Err(ServiceError::Internal);
                }
            }
        }
        Ok(inserted)
    }
}
