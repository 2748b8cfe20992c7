use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::SupplierId;
use pdc_core::list::{OrgCriteria, OrgFilter, Pagination};
use pdc_core::model::{NewSupplier, Supplier, SupplierPatch};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::SupplierService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{supplier_id}";

#[derive(OpenApi)]
#[openapi(paths(
    list_suppliers,
    get_supplier,
    create_supplier,
    patch_supplier,
    delete_supplier,
))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(
            LIST_PATH,
            get(list_suppliers::<E>).post(create_supplier::<E>),
        )
        .route(
            GET_PATH,
            get(get_supplier::<E>)
                .patch(patch_supplier::<E>)
                .delete(delete_supplier::<E>),
        )
}

/// List suppliers, optionally narrowed to one organization.
#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination, OrgFilter),
    responses(
        (status = OK, description = "The requested page of suppliers", body = Vec<Supplier>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_suppliers<E: Engine>(
    State(service): State<SupplierService<E>>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<OrgFilter>,
) -> Result<Response, EndpointError> {
    let suppliers = service
        .list(OrgCriteria {
            pagination,
            source_organization: filter.source_organization,
        })
        .await?;
    Ok(StreamingResponse::ok(suppliers).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("supplier_id" = SupplierId, Path, description = "The supplier to fetch")),
    responses(
        (status = OK, description = "The supplier was found", body = Supplier),
        (status = NOT_FOUND, description = "No supplier has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_supplier<E: Engine>(
    State(service): State<SupplierService<E>>,
    Path(supplier_id): Path<SupplierId>,
) -> Result<Response, EndpointError> {
    let supplier = service.get(supplier_id).await?;
    Ok(supplier
        .map(|s| EntityResponse::ok(s).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("supplier").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = NewSupplier,
    responses(
        (status = CREATED, description = "The supplier was stored", body = Supplier),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %supplier.name))]
async fn create_supplier<E: Engine>(
    State(service): State<SupplierService<E>>,
    Json(supplier): Json<NewSupplier>,
) -> Result<Response, EndpointError> {
    let supplier = service.create(supplier).await?;
    metrics::increment_created("supplier");
    Ok(EntityResponse::created(supplier).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("supplier_id" = SupplierId, Path, description = "The supplier to patch")),
    request_body = SupplierPatch,
    responses(
        (status = OK, description = "The patched supplier", body = Supplier),
        (status = NOT_FOUND, description = "No supplier has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip(service, patch), err(Debug))]
async fn patch_supplier<E: Engine>(
    State(service): State<SupplierService<E>>,
    Path(supplier_id): Path<SupplierId>,
    Json(patch): Json<SupplierPatch>,
) -> Result<Response, EndpointError> {
    let supplier = service.patch(supplier_id, patch).await?;
    Ok(match supplier {
        Some(supplier) => {
            metrics::increment_patched("supplier");
            EntityResponse::ok(supplier).into_response()
        }
        None => ErrorBody::not_found("supplier").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("supplier_id" = SupplierId, Path, description = "The supplier to delete")),
    responses(
        (status = NO_CONTENT, description = "The supplier was deleted"),
        (status = NOT_FOUND, description = "No supplier has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_supplier<E: Engine>(
    State(service): State<SupplierService<E>>,
    Path(supplier_id): Path<SupplierId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(supplier_id).await? {
        Some(()) => {
            metrics::increment_deleted("supplier");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("supplier").into_response(),
    })
}
