use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::CustomerTypeId;
use pdc_core::list::Pagination;
use pdc_core::model::{CustomerType, CustomerTypePatch, NewCustomerType};
use pdc_core::repository::CustomerTypeRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct CustomerTypeService<E> {
    engine: E,
}

impl<E: Engine> CustomerTypeService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "customer_type_service#get")]
    pub async fn get(&self, id: CustomerTypeId) -> OptServiceResult<CustomerType> {
        self.engine.customer_types().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "customer_type_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<Vec<CustomerType>> {
        self.engine
            .customer_types()
            .list(pagination)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "customer_type_service#create")]
    pub async fn create(&self, new: NewCustomerType) -> ServiceResult<CustomerType> {
        validate::customer_type(&new).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine
            .customer_types()
            .create(new)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "customer_type_service#patch")]
    pub async fn patch(
        &self,
        id: CustomerTypeId,
        patch: CustomerTypePatch,
    ) -> OptServiceResult<CustomerType> {
        validate::customer_type_patch(&patch).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine
            .customer_types()
            .patch(id, patch)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "customer_type_service#delete")]
    pub async fn delete(&self, id: CustomerTypeId) -> OptServiceResult<()> {
        self.engine
            .customer_types()
            .delete(id)
            .await
            .map_err(classify)
    }
}
