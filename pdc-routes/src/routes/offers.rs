use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::OfferId;
use pdc_core::list::Pagination;
use pdc_core::model::{Offer, OfferPatchPayload, OfferPayload};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::OfferService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{offer_id}";

#[derive(OpenApi)]
#[openapi(paths(list_offers, get_offer, create_offer, patch_offer, delete_offer))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(LIST_PATH, get(list_offers::<E>).post(create_offer::<E>))
        .route(
            GET_PATH,
            get(get_offer::<E>)
                .patch(patch_offer::<E>)
                .delete(delete_offer::<E>),
        )
}

#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination),
    responses(
        (status = OK, description = "The requested page of offers", body = Vec<Offer>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_offers<E: Engine>(
    State(service): State<OfferService<E>>,
    Query(pagination): Query<Pagination>,
) -> Result<Response, EndpointError> {
    let offers = service.list(pagination).await?;
    Ok(StreamingResponse::ok(offers).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("offer_id" = OfferId, Path, description = "The offer to fetch")),
    responses(
        (status = OK, description = "The offer was found", body = Offer),
        (status = NOT_FOUND, description = "No offer has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_offer<E: Engine>(
    State(service): State<OfferService<E>>,
    Path(offer_id): Path<OfferId>,
) -> Result<Response, EndpointError> {
    let offer = service.get(offer_id).await?;
    Ok(offer
        .map(|o| EntityResponse::ok(o).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("offer").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = OfferPayload,
    responses(
        (status = CREATED, description = "The offer was stored and linked to its product", body = Offer),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown entity", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %offer.name))]
async fn create_offer<E: Engine>(
    State(service): State<OfferService<E>>,
    Json(offer): Json<OfferPayload>,
) -> Result<Response, EndpointError> {
    let offer = service.create(offer).await?;
    metrics::increment_created("offer");
    Ok(EntityResponse::created(offer).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("offer_id" = OfferId, Path, description = "The offer to patch")),
    request_body = OfferPatchPayload,
    responses(
        (status = OK, description = "The patched offer", body = Offer),
        (status = NOT_FOUND, description = "No offer has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown entity", body = ErrorBody),
        (status = CONFLICT, description = "The patch would invert the availability window", body = ErrorBody),
    )
)]
#[instrument(skip(service, payload), err(Debug))]
async fn patch_offer<E: Engine>(
    State(service): State<OfferService<E>>,
    Path(offer_id): Path<OfferId>,
    Json(payload): Json<OfferPatchPayload>,
) -> Result<Response, EndpointError> {
    let offer = service.patch(offer_id, payload).await?;
    Ok(match offer {
        Some(offer) => {
            metrics::increment_patched("offer");
            EntityResponse::ok(offer).into_response()
        }
        None => ErrorBody::not_found("offer").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("offer_id" = OfferId, Path, description = "The offer to delete")),
    responses(
        (status = NO_CONTENT, description = "The offer was deleted and unlinked everywhere"),
        (status = NOT_FOUND, description = "No offer has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_offer<E: Engine>(
    State(service): State<OfferService<E>>,
    Path(offer_id): Path<OfferId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(offer_id).await? {
        Some(()) => {
            metrics::increment_deleted("offer");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("offer").into_response(),
    })
}
