use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{CatalogueId, GroupId, ProductId};

/// A named collection of everything orderable from one organization or point
/// of service. Owns its groups and products: deleting a catalogue deletes
/// them too.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Catalogue {
    pub id: CatalogueId,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub source_organization: String,
    pub groups: Vec<GroupId>,
    pub products: Vec<ProductId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct NewCatalogue {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub source_organization: String,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct CataloguePatch {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[schema(value_type = Option<String>)]
    pub logo: Field<String>,
    pub source_organization: Option<String>,
}
