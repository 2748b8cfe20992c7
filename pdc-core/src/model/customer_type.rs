use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{CustomerTypeId, OfferId};

/// A customer segment (e.g. "resident", "business") used to restrict which
/// customers may take up an offer.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct CustomerType {
    pub id: CustomerTypeId,
    pub name: String,
    pub description: String,
    pub offers: Vec<OfferId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct NewCustomerType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}
