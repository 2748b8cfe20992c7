use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::CatalogueId;
use pdc_core::list::{OrgCriteria, OrgFilter, Pagination};
use pdc_core::model::{Catalogue, CataloguePatch, NewCatalogue};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::CatalogueService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{catalogue_id}";

#[derive(OpenApi)]
#[openapi(paths(
    list_catalogues,
    get_catalogue,
    create_catalogue,
    patch_catalogue,
    delete_catalogue,
))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(
            LIST_PATH,
            get(list_catalogues::<E>).post(create_catalogue::<E>),
        )
        .route(
            GET_PATH,
            get(get_catalogue::<E>)
                .patch(patch_catalogue::<E>)
                .delete(delete_catalogue::<E>),
        )
}

/// List catalogues, optionally narrowed to one organization.
#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination, OrgFilter),
    responses(
        (status = OK, description = "The requested page of catalogues", body = Vec<Catalogue>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_catalogues<E: Engine>(
    State(service): State<CatalogueService<E>>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<OrgFilter>,
) -> Result<Response, EndpointError> {
    let catalogues = service
        .list(OrgCriteria {
            pagination,
            source_organization: filter.source_organization,
        })
        .await?;
    Ok(StreamingResponse::ok(catalogues).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("catalogue_id" = CatalogueId, Path, description = "The catalogue to fetch")),
    responses(
        (status = OK, description = "The catalogue was found", body = Catalogue),
        (status = NOT_FOUND, description = "No catalogue has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_catalogue<E: Engine>(
    State(service): State<CatalogueService<E>>,
    Path(catalogue_id): Path<CatalogueId>,
) -> Result<Response, EndpointError> {
    let catalogue = service.get(catalogue_id).await?;
    Ok(catalogue
        .map(|c| EntityResponse::ok(c).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("catalogue").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = NewCatalogue,
    responses(
        (status = CREATED, description = "The catalogue was stored", body = Catalogue),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %catalogue.name))]
async fn create_catalogue<E: Engine>(
    State(service): State<CatalogueService<E>>,
    Json(catalogue): Json<NewCatalogue>,
) -> Result<Response, EndpointError> {
    let catalogue = service.create(catalogue).await?;
    metrics::increment_created("catalogue");
    Ok(EntityResponse::created(catalogue).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("catalogue_id" = CatalogueId, Path, description = "The catalogue to patch")),
    request_body = CataloguePatch,
    responses(
        (status = OK, description = "The patched catalogue", body = Catalogue),
        (status = NOT_FOUND, description = "No catalogue has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip(service, patch), err(Debug))]
async fn patch_catalogue<E: Engine>(
    State(service): State<CatalogueService<E>>,
    Path(catalogue_id): Path<CatalogueId>,
    Json(patch): Json<CataloguePatch>,
) -> Result<Response, EndpointError> {
    let catalogue = service.patch(catalogue_id, patch).await?;
    Ok(match catalogue {
        Some(catalogue) => {
            metrics::increment_patched("catalogue");
            EntityResponse::ok(catalogue).into_response()
        }
        None => ErrorBody::not_found("catalogue").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("catalogue_id" = CatalogueId, Path, description = "The catalogue to delete")),
    responses(
        (status = NO_CONTENT, description = "The catalogue and everything it owned were deleted"),
        (status = NOT_FOUND, description = "No catalogue has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_catalogue<E: Engine>(
    State(service): State<CatalogueService<E>>,
    Path(catalogue_id): Path<CatalogueId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(catalogue_id).await? {
        Some(()) => {
            metrics::increment_deleted("catalogue");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("catalogue").into_response(),
    })
}
