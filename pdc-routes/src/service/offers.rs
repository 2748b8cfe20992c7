use error_stack::Report;
use pdc_core::Engine;
use pdc_core::id::OfferId;
use pdc_core::list::Pagination;
use pdc_core::model::{Offer, OfferPatchPayload, OfferPayload};
use pdc_core::repository::OfferRepository;
use pdc_core::validate;
use tracing::instrument;

use crate::error::{ServiceError, classify};
use crate::{OptServiceResult, ServiceResult};

#[derive(Debug, Clone)]
pub struct OfferService<E> {
    engine: E,
}

impl<E: Engine> OfferService<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    #[instrument(skip_all, name = "offer_service#get")]
    pub async fn get(&self, id: OfferId) -> OptServiceResult<Offer> {
        self.engine.offers().get(id).await.map_err(classify)
    }

    #[instrument(skip_all, name = "offer_service#list")]
    pub async fn list(&self, pagination: Pagination) -> ServiceResult<Vec<Offer>> {
        self.engine.offers().list(pagination).await.map_err(classify)
    }

    #[instrument(skip_all, name = "offer_service#create")]
    pub async fn create(&self, payload: OfferPayload) -> ServiceResult<Offer> {
        let new = validate::offer(&payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.offers().create(new).await.map_err(classify)
    }

    #[instrument(skip_all, name = "offer_service#patch")]
    pub async fn patch(&self, id: OfferId, payload: OfferPatchPayload) -> OptServiceResult<Offer> {
        let patch =
            validate::offer_patch(payload).map_err(|v| Report::new(ServiceError::from(v)))?;
        self.engine.offers().patch(id, patch).await.map_err(classify)
    }

    #[instrument(skip_all, name = "offer_service#delete")]
    pub async fn delete(&self, id: OfferId) -> OptServiceResult<()> {
        self.engine.offers().delete(id).await.map_err(classify)
    }
}
