use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::ProductId;
use pdc_core::list::ProductCriteria;
use pdc_core::model::{Product, ProductPatchPayload, ProductPayload};
use pdc_core::repository::ProductRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct ProductService<E> {
    engine: E,
}

impl<E: Engine> ProductService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "product_service#get")]
    pub async fn get(&self, id: ProductId) -> OptServiceResult<Product> {
        self.engine.products().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "product_service#list")]
    pub async fn list(&self, criteria: ProductCriteria) -> ServiceResult<Vec<Product>> {
        self.engine.products().list(criteria).await.map_err(classify)
    }

    /// Validates the raw payload and stores the product. Unknown types and
    /// malformed prices come back as violations, unresolved references as
    /// `Reference` failures from the store.
    #[instrument(skip_all, name = "product_service#create")]
    pub async fn create(&self, payload: ProductPayload) -> ServiceResult<Product> {
        let new = validate::product(&payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.products().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "product_service#patch")]
    pub async fn patch(
        &self,
        id: ProductId,
        payload: ProductPatchPayload,
    ) -> OptServiceResult<Product> {
        let patch =
            validate::product_patch(payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine
            .products()
            .patch(id, patch)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "product_service#delete")]
    pub async fn delete(&self, id: ProductId) -> OptServiceResult<()> {
        self.engine.products().delete(id).await.map_err(classify)
    }
}
