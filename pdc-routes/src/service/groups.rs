use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::GroupId;
use pdc_core::list::Pagination;
use pdc_core::model::{Group, GroupPatch, GroupPayload};
use pdc_core::repository::GroupRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct GroupService<E> {
    engine: E,
}

impl<E: Engine> GroupService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "group_service#get")]
    pub async fn get(&self, id: GroupId) -> OptServiceResult<Group> {
        self.engine.groups().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "group_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<Vec<Group>> {
        self.engine.groups().list(pagination).await.map_err(classify)
    }

    #[instrument(skip_all, name = "group_service#create")]
    pub async fn create(&self, payload: GroupPayload) -> ServiceResult<Group> {
        let new = validate::group(&payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.groups().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "group_service#patch")]
    pub async fn patch(&self, id: GroupId, patch: GroupPatch) -> OptServiceResult<Group> {
        validate::group_patch(&patch).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.groups().patch(id, patch).await.map_err(classify)
    }

    #[instrument(skip_all, name = "group_service#delete")]
    pub async fn delete(&self, id: GroupId) -> OptServiceResult<()> {
        self.engine.groups().delete(id).await.map_err(classify)
    }
}
