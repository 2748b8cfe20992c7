use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use pdc_core::Engine;
use pdc_core::id::GroupId;
use pdc_core::list::Pagination;
use pdc_core::model::{Group, GroupPatch, GroupPayload};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::error::{EndpointError, ErrorBody};
use crate::metrics;
use crate::routes::responses::EntityResponse;
use crate::service::GroupService;
use crate::state::AppState;
use crate::stream::StreamingResponse;

const LIST_PATH: &str = "/";
const GET_PATH: &str = "/{group_id}";

#[derive(OpenApi)]
#[openapi(paths(list_groups, get_group, create_group, patch_group, delete_group))]
pub(super) struct Docs;

pub(super) fn router<E: Engine>() -> OpenApiRouter<AppState<E>> {
    OpenApiRouter::new()
        .route(LIST_PATH, get(list_groups::<E>).post(create_group::<E>))
        .route(
            GET_PATH,
            get(get_group::<E>)
                .patch(patch_group::<E>)
                .delete(delete_group::<E>),
        )
}

#[utoipa::path(
    get,
    path = LIST_PATH,
    params(Pagination),
    responses(
        (status = OK, description = "The requested page of groups", body = Vec<Group>),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn list_groups<E: Engine>(
    State(service): State<GroupService<E>>,
    Query(pagination): Query<Pagination>,
) -> Result<Response, EndpointError> {
    let groups = service.list(pagination).await?;
    Ok(StreamingResponse::ok(groups).into_response())
}

#[utoipa::path(
    get,
    path = GET_PATH,
    params(("group_id" = GroupId, Path, description = "The group to fetch")),
    responses(
        (status = OK, description = "The group was found", body = Group),
        (status = NOT_FOUND, description = "No group has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn get_group<E: Engine>(
    State(service): State<GroupService<E>>,
    Path(group_id): Path<GroupId>,
) -> Result<Response, EndpointError> {
    let group = service.get(group_id).await?;
    Ok(group
        .map(|g| EntityResponse::ok(g).into_response())
        .unwrap_or_else(|| ErrorBody::not_found("group").into_response()))
}

#[utoipa::path(
    post,
    path = LIST_PATH,
    request_body = GroupPayload,
    responses(
        (status = CREATED, description = "The group was stored", body = Group),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown catalogue", body = ErrorBody),
    )
)]
#[instrument(skip_all, err(Debug), fields(req.name = %group.name))]
async fn create_group<E: Engine>(
    State(service): State<GroupService<E>>,
    Json(group): Json<GroupPayload>,
) -> Result<Response, EndpointError> {
    let group = service.create(group).await?;
    metrics::increment_created("group");
    Ok(EntityResponse::created(group).into_response())
}

#[utoipa::path(
    patch,
    path = GET_PATH,
    params(("group_id" = GroupId, Path, description = "The group to patch")),
    request_body = GroupPatch,
    responses(
        (status = OK, description = "The patched group", body = Group),
        (status = NOT_FOUND, description = "No group has the given id", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "The payload failed validation or refers to an unknown catalogue", body = ErrorBody),
    )
)]
#[instrument(skip(service, patch), err(Debug))]
async fn patch_group<E: Engine>(
    State(service): State<GroupService<E>>,
    Path(group_id): Path<GroupId>,
    Json(patch): Json<GroupPatch>,
) -> Result<Response, EndpointError> {
    let group = service.patch(group_id, patch).await?;
    Ok(match group {
        Some(group) => {
            metrics::increment_patched("group");
            EntityResponse::ok(group).into_response()
        }
        None => ErrorBody::not_found("group").into_response(),
    })
}

#[utoipa::path(
    delete,
    path = GET_PATH,
    params(("group_id" = GroupId, Path, description = "The group to delete")),
    responses(
        (status = NO_CONTENT, description = "The group was deleted and removed from its products"),
        (status = NOT_FOUND, description = "No group has the given id", body = ErrorBody),
    )
)]
#[instrument(skip(service), err(Debug))]
async fn delete_group<E: Engine>(
    State(service): State<GroupService<E>>,
    Path(group_id): Path<GroupId>,
) -> Result<Response, EndpointError> {
    Ok(match service.delete(group_id).await? {
        Some(()) => {
            metrics::increment_deleted("group");
            StatusCode::NO_CONTENT.into_response()
        }
        None => ErrorBody::not_found("group").into_response(),
    })
}
