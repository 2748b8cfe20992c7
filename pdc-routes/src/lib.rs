use error_stack::Report;

use crate::error::ServiceError;

pub type ServiceResult<T> = Result<T, Report<ServiceError>>;
pub type OptServiceResult<T> = Result<Option<T>, Report<ServiceError>>;

pub mod error;
mod metrics;
pub mod routes;
pub mod service;
pub mod state;
mod stream;
