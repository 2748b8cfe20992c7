use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::CatalogueId;
use pdc_core::list::OrgCriteria;
use pdc_core::model::{Catalogue, CataloguePatch, NewCatalogue};
use pdc_core::repository::CatalogueRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct CatalogueService<E> {
    engine: E,
}

impl<E: Engine> CatalogueService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "catalogue_service#get")]
    pub async fn get(&self, id: CatalogueId) -> OptServiceResult<Catalogue> {
        self.engine.catalogues().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "catalogue_service#list")]
    pub async fn list(&self, criteria: OrgCriteria) -> ServiceResult<Vec<Catalogue>> {
        self.engine.catalogues().list(criteria).await.map_err(classify)
    }

    #[instrument(skip_all, name = "catalogue_service#create")]
    pub async fn create(&self, new: NewCatalogue) -> ServiceResult<Catalogue> {
        validate::catalogue(&new).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.catalogues().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "catalogue_service#patch")]
    pub async fn patch(
        &self,
        id: CatalogueId,
        patch: CataloguePatch,
    ) -> OptServiceResult<Catalogue> {
        validate::catalogue_patch(&patch).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine
            .catalogues()
            .patch(id, patch)
            .await
            .map_err(classify)
    }

    #[instrument(skip_all, name = "catalogue_service#delete")]
    pub async fn delete(&self, id: CatalogueId) -> OptServiceResult<()> {
        self.engine.catalogues().delete(id).await.map_err(classify)
    }
}
