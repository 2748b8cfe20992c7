use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::ProductId;
use pdc_core::list::{Pagination, ProductCriteria, ProductFilter};
use pdc_core::model::{Product, ProductPatchPayload, ProductPayload};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::ProductService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{product_id}";

#[derive(OpenApi)]
#[openapi(paths(
    list_products,
    get_product,
    create_product,
    patch_product,
    delete_product,
))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(LIST_PATH, get(list_products::<E>).post(create_product::<E>))
        .route(
            GET_PATH,
            get(get_product::<E>)
                .patch(patch_product::<E>)
                .delete(delete_product::<E>),
        )
}

/// List products, optionally filtered by group and organization and sorted
/// by product type.
#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination, ProductFilter),
    responses(
        (status = OK, description = "The requested page of products", body = Vec<Product>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_products<E: Engine>(
    State(service): State<ProductService<E>>,
    Query(pagination): Query<Pagination>,
    Query(filter): Query<ProductFilter>,
) -> Result<Response, EndpointError> {
    let products = service.list(ProductCriteria { pagination, filter }).await?;
    Ok(StreamingResponse::ok(products).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("product_id" = ProductId, Path, description = "The product to fetch")),
    responses(
        (status = OK, description = "The product was found", body = Product),
        (status = NOT_FOUND, description = "No product has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_product<E: Engine>(
    State(service): State<ProductService<E>>,
    Path(product_id): Path<ProductId>,
) -> Result<Response, EndpointError> {
    let product = service.get(product_id).await?;
    Ok(product
        .map(|p| EntityResponse::ok(p).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("product").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = ProductPayload,
    responses(
        (status = CREATED, description = "The product was stored", body = Product),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown entity", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %product.name))]
async fn create_product<E: Engine>(
    State(service): State<ProductService<E>>,
    Json(product): Json<ProductPayload>,
) -> Result<Response, EndpointError> {
    let product = service.create(product).await?;
    metrics::increment_created("product");
    Ok(EntityResponse::created(product).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("product_id" = ProductId, Path, description = "The product to patch")),
    request_body = ProductPatchPayload,
    responses(
        (status = OK, description = "The patched product", body = Product),
        (status = NOT_FOUND, description = "No product has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown entity", body = ErrorBody),
        (status = CONFLICT, description = "The patch would make the product its own ancestor", body = ErrorBody),
    )
)]
#[instrument(skip(service, payload), err(Debug))]
async fn patch_product<E: Engine>(
    State(service): State<ProductService<E>>,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<ProductPatchPayload>,
) -> Result<Response, EndpointError> {
    let product = service.patch(product_id, payload).await?;
    Ok(match product {
        Some(product) => {
            metrics::increment_patched("product");
            EntityResponse::ok(product).into_response()
        }
        None => ErrorBody::not_found("product").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("product_id" = ProductId, Path, description = "The product to delete")),
    responses(
        (status = NO_CONTENT, description = "The product and its offers were deleted"),
        (status = NOT_FOUND, description = "No product has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_product<E: Engine>(
    State(service): State<ProductService<E>>,
    Path(product_id): Path<ProductId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(product_id).await? {
        Some(()) => {
            metrics::increment_deleted("product");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("product").into_response(),
    })
}
