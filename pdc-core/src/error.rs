use error_stack::Report;

pub type StoreResult<T> = Result<T, Report<StoreError>>;
pub type OptStoreResult<T> = Result<Option<T>, Report<StoreError>>;

/// Failures raised by a store once a payload has already passed validation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A payload referenced an entity that does not exist.
    #[error("{field} refers to an unknown {entity}")]
    Reference {
        entity: &'static str,
        field: &'static str,
    },
    /// The requested change would break a structural invariant, e.g. a
    /// product becoming its own ancestor.
    #[error("{0}")]
    Integrity(&'static str),
    #[error("the store failed to complete the operation")]
    Storage,
}
