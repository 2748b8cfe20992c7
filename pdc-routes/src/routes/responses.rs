use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A stored entity plus the status it should be answered with.
#[derive(Debug)]
pub struct EntityResponse<T> {
    status_code: StatusCode,
    body: T,
}

impl<T: Serialize> EntityResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for EntityResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
