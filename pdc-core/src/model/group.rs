use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{CatalogueId, GroupId, ProductId};

/// A named category used to organize products within one catalogue.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub source_organization: String,
    pub catalogue: CatalogueId,
    pub products: Vec<ProductId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

/// Raw creation request; `catalogue` is checked by validation so its
/// absence is reported together with any other violations.
#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct GroupPayload {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub source_organization: String,
    pub catalogue: Option<CatalogueId>,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub source_organization: String,
    pub catalogue: CatalogueId,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct GroupPatch {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[schema(value_type = Option<String>)]
    pub logo: Field<String>,
    pub source_organization: Option<String>,
    /// Moves the group (and nothing else) to another existing catalogue.
    pub catalogue: Option<CatalogueId>,
}
