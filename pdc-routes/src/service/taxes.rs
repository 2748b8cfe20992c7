use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::TaxId;
use pdc_core::list::Pagination;
use pdc_core::model::{Tax, TaxPatchPayload, TaxPayload};
use pdc_core::repository::TaxRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct TaxService<E> {
    engine: E,
}

impl<E: Engine> TaxService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "tax_service#get")]
    pub async fn get(&self, id: TaxId) -> OptServiceResult<Tax> {
        self.engine.taxes().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "tax_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<Vec<Tax>> {
        self.engine.taxes().list(pagination).await.map_err(classify)
    }

    #[instrument(skip_all, name = "tax_service#create")]
    pub async fn create(&self, payload: TaxPayload) -> ServiceResult<Tax> {
        let new = validate::tax(&payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.taxes().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "tax_service#patch")]
    pub async fn patch(&self, id: TaxId, payload: TaxPatchPayload) -> OptServiceResult<Tax> {
        let patch = validate::tax_patch(payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.taxes().patch(id, patch).await.map_err(classify)
    }

    #[instrument(skip_all, name = "tax_service#delete")]
    pub async fn delete(&self, id: TaxId) -> OptServiceResult<()> {
        self.engine.taxes().delete(id).await.map_err(classify)
    }
}
