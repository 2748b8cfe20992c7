use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{OfferId, TaxId};
use crate::model::product::default_currency;
use crate::money::Money;

/// A named, reusable tax rule: a flat add-on amount plus a percentage, both
/// applicable to any number of offers.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Tax {
    pub id: TaxId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub price_currency: String,
    pub percentage: u32,
    pub offers: Vec<OfferId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct TaxPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    pub percentage: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct NewTax {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub price_currency: String,
    pub percentage: u32,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaxPatchPayload {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    pub price: Option<String>,
    pub price_currency: Option<String>,
    pub percentage: Option<u32>,
}

#[derive(Debug)]
pub struct TaxPatch {
    pub name: Option<String>,
    pub description: Field<String>,
    pub price: Option<Money>,
    pub price_currency: Option<String>,
    pub percentage: Option<u32>,
}
