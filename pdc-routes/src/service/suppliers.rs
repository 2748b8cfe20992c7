use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::SupplierId;
use pdc_core::list::OrgCriteria;
use pdc_core::model::{NewSupplier, Supplier, SupplierPatch};
use pdc_core::repository::SupplierRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct SupplierService<E> {
    engine: E,
}

impl<E: Engine> SupplierService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "supplier_service#get")]
    pub async fn get(&self, id: SupplierId) -> OptServiceResult<Supplier> {
        self.engine.suppliers().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "supplier_service#list")]
    pub async fn list(&self, criteria: OrgCriteria) -> ServiceResult<Vec<Supplier>> {
        self.engine.suppliers().list(criteria).await.map_err(classify)
    }

    #[instrument(skip_all, name = "supplier_service#create")]
    pub async fn create(&self, new: NewSupplier) -> ServiceResult<Supplier> {
        validate::supplier(&new).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.suppliers().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "supplier_service#patch")]
    pub async fn patch(&self, id: SupplierId, patch: SupplierPatch) -> OptServiceResult<Supplier> {
        validate::supplier_patch(&patch).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine
            .suppliers()
            .patch(id, patch)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "supplier_service#delete")]
    pub async fn delete(&self, id: SupplierId) -> OptServiceResult<()> {
        self.engine.suppliers().delete(id).await.map_err(classify)
    }
}
