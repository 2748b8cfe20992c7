use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::CustomerTypeId;
use pdc_core::list::Pagination;
use pdc_core::model::{CustomerType, CustomerTypePatch, NewCustomerType};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::CustomerTypeService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{customer_type_id}";

#[derive(OpenApi)]
#[openapi(paths(
    list_customer_types,
    get_customer_type,
    create_customer_type,
    patch_customer_type,
    delete_customer_type,
))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(
            LIST_PATH,
            get(list_customer_types::<E>).post(create_customer_type::<E>),
        )
        .route(
            GET_PATH,
            get(get_customer_type::<E>)
                .patch(patch_customer_type::<E>)
                .delete(delete_customer_type::<E>),
        )
}

#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination),
    responses(
        (status = OK, description = "The requested page of customer types", body = Vec<CustomerType>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_customer_types<E: Engine>(
    State(service): State<CustomerTypeService<E>>,
    Query(pagination): Query<Pagination>,
) -> Result<Response, EndpointError> {
    let customer_types = service.list(pagination).await?;
    Ok(StreamingResponse::ok(customer_types).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("customer_type_id" = CustomerTypeId, Path, description = "The customer type to fetch")),
    responses(
        (status = OK, description = "The customer type was found", body = CustomerType),
        (status = NOT_FOUND, description = "No customer type has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_customer_type<E: Engine>(
    State(service): State<CustomerTypeService<E>>,
    Path(customer_type_id): Path<CustomerTypeId>,
) -> Result<Response, EndpointError> {
    let customer_type = service.get(customer_type_id).await?;
    Ok(customer_type
        .map(|c| EntityResponse::ok(c).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("customer type").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = NewCustomerType,
    responses(
        (status = CREATED, description = "The customer type was stored", body = CustomerType),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %customer_type.name))]
async fn create_customer_type<E: Engine>(
    State(service): State<CustomerTypeService<E>>,
    Json(customer_type): Json<NewCustomerType>,
) -> Result<Response, EndpointError> {
    let customer_type = service.create(customer_type).await?;
    metrics::increment_created("customer_type");
    Ok(EntityResponse::created(customer_type).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("customer_type_id" = CustomerTypeId, Path, description = "The customer type to patch")),
    request_body = CustomerTypePatch,
    responses(
        (status = OK, description = "The patched customer type", body = CustomerType),
        (status = NOT_FOUND, description = "No customer type has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation", body = ErrorBody),
    )
)]
#[instrument(skip(service, patch), err(Debug))]
async fn patch_customer_type<E: Engine>(
    State(service): State<CustomerTypeService<E>>,
    Path(customer_type_id): Path<CustomerTypeId>,
    Json(patch): Json<CustomerTypePatch>,
) -> Result<Response, EndpointError> {
    let customer_type = service.patch(customer_type_id, patch).await?;
    Ok(match customer_type {
        Some(customer_type) => {
            metrics::increment_patched("customer_type");
            EntityResponse::ok(customer_type).into_response()
        }
        None => ErrorBody::not_found("customer type").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("customer_type_id" = CustomerTypeId, Path, description = "The customer type to delete")),
    responses(
        (status = NO_CONTENT, description = "The customer type was deleted and removed from its offers"),
        (status = NOT_FOUND, description = "No customer type has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_customer_type<E: Engine>(
    State(service): State<CustomerTypeService<E>>,
    Path(customer_type_id): Path<CustomerTypeId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(customer_type_id).await? {
        Some(()) => {
            metrics::increment_deleted("customer_type");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("customer type").into_response(),
    })
}
