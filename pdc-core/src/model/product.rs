use chrono::{DateTime, Utc};
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::{CatalogueId, GroupId, OfferId, ProductId};
use crate::money::Money;
use crate::product_type::ProductType;

/// The central sellable entity. All products share this one shape; `type`
/// only governs how a product participates in composition (sets, variations)
/// and is otherwise advisory metadata for front-ends.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    /// Human readable reference, also known as Stock Keeping Unit.
    pub sku: Option<String>,
    /// Auto-incremented component of the sku, unique per organization.
    pub sku_id: Option<u32>,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub movie: Option<String>,
    pub source_organization: String,
    #[serde(rename = "type")]
    #[schema(rename = "type")]
    pub product_type: ProductType,
    pub price: Money,
    pub price_currency: String,
    pub tax_percentage: u32,
    pub requires_appointment: bool,
    pub calendar: Option<String>,
    pub documents: Vec<String>,
    pub images: Vec<String>,
    pub external_docs: Vec<String>,
    pub catalogue: CatalogueId,
    pub groups: Vec<GroupId>,
    /// The product this one is a variation of.
    pub parent: Option<ProductId>,
    pub variations: Vec<ProductId>,
    /// For `type=set` products, the members of the set (owning side).
    pub grouped_products: Vec<ProductId>,
    /// The set products this product is a member of (inverse side).
    pub sets: Vec<ProductId>,
    pub offers: Vec<OfferId>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

/// Wire payload for product creation. `price` and `type` arrive as strings
/// and are parsed during validation, so a bad value surfaces as a violation
/// naming the constraint instead of a deserialization failure.
#[derive(Debug, Deserialize, ToSchema, Clone)]
pub struct ProductPayload {
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub movie: Option<String>,
    pub source_organization: String,
    #[serde(rename = "type")]
    #[schema(rename = "type")]
    pub product_type: Option<String>,
    pub price: Option<String>,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    pub tax_percentage: Option<u32>,
    pub requires_appointment: Option<bool>,
    pub calendar: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub external_docs: Vec<String>,
    pub catalogue: Option<CatalogueId>,
    #[serde(default)]
    pub groups: Vec<GroupId>,
    pub parent: Option<ProductId>,
    #[serde(default)]
    pub grouped_products: Vec<ProductId>,
    #[serde(default)]
    pub sets: Vec<ProductId>,
}

pub(crate) fn default_currency() -> String {
    "EUR".to_owned()
}

/// A validated product creation, ready for the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub movie: Option<String>,
    pub source_organization: String,
    pub product_type: ProductType,
    pub price: Money,
    pub price_currency: String,
    pub tax_percentage: u32,
    pub requires_appointment: bool,
    pub calendar: Option<String>,
    pub documents: Vec<String>,
    pub images: Vec<String>,
    pub external_docs: Vec<String>,
    pub catalogue: CatalogueId,
    pub groups: Vec<GroupId>,
    pub parent: Option<ProductId>,
    pub grouped_products: Vec<ProductId>,
    pub sets: Vec<ProductId>,
}

#[serde_optional_fields]
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductPatchPayload {
    pub sku: Option<String>,
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub description: Field<String>,
    #[schema(value_type = Option<String>)]
    pub logo: Field<String>,
    #[schema(value_type = Option<String>)]
    pub movie: Field<String>,
    pub source_organization: Option<String>,
    #[serde(rename = "type")]
    #[schema(rename = "type")]
    pub product_type: Option<String>,
    pub price: Option<String>,
    pub price_currency: Option<String>,
    pub tax_percentage: Option<u32>,
    pub requires_appointment: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub calendar: Field<String>,
    pub documents: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub external_docs: Option<Vec<String>>,
    pub catalogue: Option<CatalogueId>,
    pub groups: Option<Vec<GroupId>>,
    /// Present-null clears the parent and removes this product from the old
    /// parent's variations.
    #[schema(value_type = Option<ProductId>)]
    pub parent: Field<ProductId>,
    pub grouped_products: Option<Vec<ProductId>>,
    pub sets: Option<Vec<ProductId>>,
}

/// Validated patch, ready for the store.
#[derive(Debug)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Field<String>,
    pub logo: Field<String>,
    pub movie: Field<String>,
    pub source_organization: Option<String>,
    pub product_type: Option<ProductType>,
    pub price: Option<Money>,
    pub price_currency: Option<String>,
    pub tax_percentage: Option<u32>,
    pub requires_appointment: Option<bool>,
    pub calendar: Field<String>,
    pub documents: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub external_docs: Option<Vec<String>>,
    pub catalogue: Option<CatalogueId>,
    pub groups: Option<Vec<GroupId>>,
    pub parent: Field<ProductId>,
    pub grouped_products: Option<Vec<ProductId>>,
    pub sets: Option<Vec<ProductId>>,
}
