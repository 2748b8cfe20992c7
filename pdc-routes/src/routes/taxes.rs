use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::TaxId;
use pdc_core::list::Pagination;
use pdc_core::model::{Tax, TaxPatchPayload, TaxPayload};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::TaxService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{tax_id}";

#[derive(OpenApi)]
#[openapi(paths(list_taxes, get_tax, create_tax, patch_tax, delete_tax))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(LIST_PATH, get(list_taxes::<E>).post(create_tax::<E>))
        .route(
            GET_PATH,
            get(get_tax::<E>)
                .patch(patch_tax::<E>)
                .delete(delete_tax::<E>),
        )
}

#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination),
    responses(
        (status = OK, description = "The requested page of taxes", body = Vec<Tax>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_taxes<E: Engine>(
    State(service): State<TaxService<E>>,
    Query(pagination): Query<Pagination>,
) -> Result<Response, EndpointError> {
    let taxes = service.list(pagination).await?;
    Ok(StreamingResponse::ok(taxes).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("tax_id" = TaxId, Path, description = "The tax to fetch")),
    responses(
        (status = OK, description = "The tax was found", body = Tax),
        (status = NOT_FOUND, description = "No tax has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_tax<E: Engine>(
    State(service): State<TaxService<E>>,
    Path(tax_id): Path<TaxId>,
) -> Result<Response, EndpointError> {
    let tax = service.get(tax_id).await?;
    Ok(tax
        .map(|t| EntityResponse::ok(t).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("tax").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = TaxPayload,
    responses(
        (status = CREATED, description = "The tax was stored", body = Tax),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %tax.name))]
async fn create_tax<E: Engine>(
    State(service): State<TaxService<E>>,
    Json(tax): Json<TaxPayload>,
) -> Result<Response, EndpointError> {
    let tax = service.create(tax).await?;
    metrics::increment_created("tax");
    Ok(EntityResponse::created(tax).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("tax_id" = TaxId, Path, description = "The tax to patch")),
    request_body = TaxPatchPayload,
    responses(
        (status = OK, description = "The patched tax", body = Tax),
        (status = NOT_FOUND, description = "No tax has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip(service, payload), err(Debug))]
async fn patch_tax<E: Engine>(
    State(service): State<TaxService<E>>,
    Path(tax_id): Path<TaxId>,
    Json(payload): Json<TaxPatchPayload>,
) -> Result<Response, EndpointError> {
    let tax = service.patch(tax_id, payload).await?;
    Ok(match tax {
        Some(tax) => {
            metrics::increment_patched("tax");
            EntityResponse::ok(tax).into_response()
        }
        None => ErrorBody::not_found("tax").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("tax_id" = TaxId, Path, description = "The tax to delete")),
    responses(
        (status = NO_CONTENT, description = "The tax was deleted and removed from its offers"),
        (status = NOT_FOUND, description = "No tax has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_tax<E: Engine>(
    State(service): State<TaxService<E>>,
    Path(tax_id): Path<TaxId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(tax_id).await? {
        Some(()) => {
            metrics::increment_deleted("tax");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("tax").into_response(),
    })
}
