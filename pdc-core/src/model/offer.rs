use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{CustomerTypeId, OfferId, ProductId, TaxId};
use crate::model::product::default_currency;
use crate::money::Money;

/// A price-locked, time-bounded snapshot tied to one product. Offers carry
/// their own price so that past orders keep the price they were placed at,
/// independent of later changes to the product's live price.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub price_currency: String,
    /// URL of the offering organization.
    pub offered_by: String,
    pub availability_starts: DateTime<Utc>,
    pub availability_ends: DateTime<Utc>,
    pub tax_percentage: Option<u32>,
    pub product: ProductId,
    /// Empty means the offer is open to all customer types.
    pub eligible_customer_types: Vec<CustomerTypeId>,
    pub taxes: Vec<TaxId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct OfferPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    pub offered_by: Option<String>,
    pub availability_starts: Option<DateTime<Utc>>,
    pub availability_ends: Option<DateTime<Utc>>,
    pub tax_percentage: Option<u32>,
    pub product: Option<ProductId>,
    #[serde(default)]
    pub eligible_customer_types: Vec<CustomerTypeId>,
    #[serde(default)]
    pub taxes: Vec<TaxId>,
}

#[derive(Debug, Clone)]
pub struct NewOffer {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub price_currency: String,
    pub offered_by: String,
    pub availability_starts: DateTime<Utc>,
    pub availability_ends: DateTime<Utc>,
    pub tax_percentage: Option<u32>,
    pub product: ProductId,
    pub eligible_customer_types: Vec<CustomerTypeId>,
    pub taxes: Vec<TaxId>,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct OfferPatchPayload {
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    pub price: Option<String>,
    pub price_currency: Option<String>,
    pub offered_by: Option<String>,
    pub availability_starts: Option<DateTime<Utc>>,
    pub availability_ends: Option<DateTime<Utc>>,
    #[schema(value_type = Option<u32>)]
    pub tax_percentage: Field<u32>,
    pub eligible_customer_types: Option<Vec<CustomerTypeId>>,
    pub taxes: Option<Vec<TaxId>>,
}

#[derive(Debug)]
pub struct OfferPatch {
    pub name: Option<String>,
    pub description: Field<String>,
    pub price: Option<Money>,
    pub price_currency: Option<String>,
    pub offered_by: Option<String>,
    pub availability_starts: Option<DateTime<Utc>>,
    pub availability_ends: Option<DateTime<Utc>>,
    pub tax_percentage: Field<u32>,
    pub eligible_customer_types: Option<Vec<CustomerTypeId>>,
    pub taxes: Option<Vec<TaxId>>,
}
