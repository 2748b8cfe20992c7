use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::SupplierId;

/// An external organization that manufactures or provides products sold by a
/// seller. Not a foreign key target: other entities correlate to a supplier
/// only loosely, through a matching `source_organization`.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    /// Chamber-of-commerce (KvK) number.
    pub kvk: String,
    /// RSIN-like identifier of the organization itself.
    pub source_organization: String,
    pub logo: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub kvk: String,
    pub source_organization: String,
    pub logo: Option<String>,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub kvk: Option<String>,
    pub source_organization: Option<String>,
    #[schema(value_type = Option<String>)]
    pub logo: Field<String>,
}
