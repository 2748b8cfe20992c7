use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use pdc_core::error::StoreError;
use pdc_core::validate::{Violation, Violations};
use serde::Serialize;
use std::borrow::Cow;
use tracing::error;
use utoipa::ToSchema;

/// Failure of a service call, classified by how the endpoint should answer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("the payload failed validation")]
    Validation(Violations),
    #[error("the payload referenced an entity that does not exist")]
    Reference(Cow<'static, str>),
    #[error("the change would violate catalogue integrity")]
    Integrity(Cow<'static, str>),
    #[error("the storage engine failed")]
    Storage,
}

impl From<Violations> for ServiceError {
    fn from(violations: Violations) -> Self {
        Self::Validation(violations)
    }
}

/// Reclassifies a store failure, preserving the original report as context.
pub(crate) fn classify(report: Report<StoreError>) -> Report<ServiceError> {
    let service_error = match report.current_context() {
        StoreError::Reference { entity, field } => {
            ServiceError::Reference(format!("{field} refers to an unknown {entity}").into())
        }
        StoreError::Integrity(reason) => ServiceError::Integrity(Cow::Borrowed(reason)),
        StoreError::Storage => ServiceError::Storage,
    };
    report.change_context(service_error)
}

/// The JSON shape of every non-2xx answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[serde(skip)]
    status_code: StatusCode,
    message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl ErrorBody {
    pub fn not_found(entity: &'static str) -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            message: format!("the requested {entity} does not exist").into(),
            violations: Vec::new(),
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

/// Endpoint-level error wrapper. Handlers bubble service reports up with `?`
/// and this converts them into the documented status codes.
#[derive(thiserror::Error)]
#[error("there was an error running the endpoint")]
pub struct EndpointError(Report<ServiceError>);

impl std::fmt::Debug for EndpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Report<ServiceError>> for EndpointError {
    fn from(report: Report<ServiceError>) -> Self {
        Self(report)
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        let body = match self.0.current_context() {
            ServiceError::Validation(violations) => ErrorBody {
                status_code: StatusCode::UNPROCESSABLE_ENTITY,
                message: "the payload failed validation".into(),
                violations: violations.0.clone(),
            },
            ServiceError::Reference(message) => ErrorBody {
                status_code: StatusCode::UNPROCESSABLE_ENTITY,
                message: message.clone(),
                violations: Vec::new(),
            },
            ServiceError::Integrity(message) => ErrorBody {
                status_code: StatusCode::CONFLICT,
                message: message.clone(),
                violations: Vec::new(),
            },
            ServiceError::Storage => {
                error!("storage failure: {:?}", self.0);
                ErrorBody {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "internal error".into(),
                    violations: Vec::new(),
                }
            }
        };
        body.into_response()
    }
}
