//! Pure, side-effect free payload checking. Each validator walks the whole
//! payload and collects every violation it finds, so a caller can render all
//! problems at once. Reference resolution (does this catalogue id exist?)
//! is the store's job, not ours.

use optional_field::Field;
use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use crate::model::{
    CataloguePatch, CustomerTypePatch, GroupPatch, GroupPayload, NewCatalogue, NewCustomerType,
    NewGroup, NewOffer, NewProduct, NewSupplier, NewTax, OfferPatch, OfferPatchPayload,
    OfferPayload,
    ProductPatch, ProductPatchPayload, ProductPayload, SupplierPatch, TaxPatch, TaxPatchPayload,
    TaxPayload,
};
use crate::money::{Money, MoneyError};
use crate::product_type::ProductType;

const MAX_NAME: usize = 255;
const MAX_DESCRIPTION: usize = 2550;
const MAX_URL: usize = 255;
const ORG_MIN: usize = 8;
const ORG_MAX: usize = 11;

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Required,
    MaxLength,
    LengthRange,
    Url,
    Choice,
    Currency,
    Decimal,
    NonNegative,
    DateOrder,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq, Clone)]
pub struct Violation {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
#[error("the payload failed {} validation constraint(s)", .0.len())]
pub struct Violations(pub Vec<Violation>);

/// Accumulates violations across a payload.
#[derive(Debug, Default)]
struct Check {
    violations: Vec<Violation>,
}

impl Check {
    fn push(&mut self, field: &'static str, constraint: Constraint, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            constraint,
            message: message.into(),
        });
    }

    fn required(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, Constraint::Required, format!("{field} is required"));
        }
    }

    fn max_length(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(
                field,
                Constraint::MaxLength,
                format!("{field} must be at most {max} characters"),
            );
        }
    }

    fn organization(&mut self, field: &'static str, value: &str) {
        let len = value.chars().count();
        if !(ORG_MIN..=ORG_MAX).contains(&len) {
            self.push(
                field,
                Constraint::LengthRange,
                format!("{field} must be between {ORG_MIN} and {ORG_MAX} characters"),
            );
        }
    }

    fn url(&mut self, field: &'static str, value: &str) {
        if Url::parse(value).is_err() {
            self.push(field, Constraint::Url, format!("{field} must be a valid URL"));
        }
        self.max_length(field, value, MAX_URL);
    }

    fn opt_url(&mut self, field: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.url(field, value);
        }
    }

    fn urls(&mut self, field: &'static str, values: &[String]) {
        for value in values {
            self.url(field, value);
        }
    }

    fn currency(&mut self, field: &'static str, value: &str) {
        let valid = value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            self.push(
                field,
                Constraint::Currency,
                format!("{field} must be a 3-letter ISO 4217 code"),
            );
        }
    }

    /// Parses a price field; pushes a violation and yields `None` when the
    /// value is missing, malformed, too precise, or negative.
    fn price(&mut self, field: &'static str, value: Option<&str>) -> Option<Money> {
        let Some(raw) = value else {
            self.push(field, Constraint::Required, format!("{field} is required"));
            return None;
        };
        self.parse_price(field, raw)
    }

    fn parse_price(&mut self, field: &'static str, raw: &str) -> Option<Money> {
        let money = match raw.parse::<Money>() {
            Ok(money) => money,
            Err(err @ MoneyError::NotDecimal(_)) => {
                self.push(field, Constraint::Decimal, err.to_string());
                return None;
            }
            Err(err @ MoneyError::TooPrecise(_)) => {
                self.push(field, Constraint::Decimal, err.to_string());
                return None;
            }
        };
        if money.is_negative() {
            self.push(
                field,
                Constraint::NonNegative,
                format!("{field} must not be negative"),
            );
            return None;
        }
        Some(money)
    }

    fn product_type(&mut self, field: &'static str, value: Option<&str>) -> Option<ProductType> {
        let Some(raw) = value else {
            self.push(field, Constraint::Required, format!("{field} is required"));
            return None;
        };
        self.parse_product_type(field, raw)
    }

    fn parse_product_type(&mut self, field: &'static str, raw: &str) -> Option<ProductType> {
        match raw.parse::<ProductType>() {
            Ok(ty) => Some(ty),
            Err(err) => {
                self.push(field, Constraint::Choice, err.to_string());
                None
            }
        }
    }

    fn finish(self) -> Result<(), Violations> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(self.violations))
        }
    }

    fn finish_with<T>(self, value: T) -> Result<T, Violations> {
        self.finish().map(|()| value)
    }
}

fn patch_url(check: &mut Check, field: &'static str, value: &Field<String>) {
    if let Field::Present(Some(value)) = value {
        check.url(field, value);
    }
}

pub fn supplier(input: &NewSupplier) -> Result<(), Violations> {
    let mut check = Check::default();
    check.required("name", &input.name);
    check.max_length("name", &input.name, MAX_NAME);
    check.required("kvk", &input.kvk);
    check.max_length("kvk", &input.kvk, MAX_NAME);
    check.organization("source_organization", &input.source_organization);
    check.opt_url("logo", input.logo.as_deref());
    check.finish()
}

pub fn supplier_patch(patch: &SupplierPatch) -> Result<(), Violations> {
    let mut check = Check::default();
    if let Some(name) = &patch.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    if let Some(kvk) = &patch.kvk {
        check.required("kvk", kvk);
    }
    if let Some(org) = &patch.source_organization {
        check.organization("source_organization", org);
    }
    patch_url(&mut check, "logo", &patch.logo);
    check.finish()
}

pub fn catalogue(input: &NewCatalogue) -> Result<(), Violations> {
    let mut check = Check::default();
    check.required("name", &input.name);
    check.max_length("name", &input.name, MAX_NAME);
    if let Some(description) = &input.description {
        check.max_length("description", description, MAX_DESCRIPTION);
    }
    check.opt_url("logo", input.logo.as_deref());
    check.organization("source_organization", &input.source_organization);
    check.finish()
}

pub fn catalogue_patch(patch: &CataloguePatch) -> Result<(), Violations> {
    let mut check = Check::default();
    if let Some(name) = &patch.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    if let Field::Present(Some(description)) = &patch.description {
        check.max_length("description", description, MAX_DESCRIPTION);
    }
    patch_url(&mut check, "logo", &patch.logo);
    if let Some(org) = &patch.source_organization {
        check.organization("source_organization", org);
    }
    check.finish()
}

pub fn group(payload: &GroupPayload) -> Result<NewGroup, Violations> {
    let mut check = Check::default();
    check.required("name", &payload.name);
    check.max_length("name", &payload.name, MAX_NAME);
    check.opt_url("logo", payload.logo.as_deref());
    check.organization("source_organization", &payload.source_organization);
    if payload.catalogue.is_none() {
        check.push("catalogue", Constraint::Required, "catalogue is required");
    }
    let Some(catalogue) = payload.catalogue else {
        return Err(Violations(check.violations));
    };
    check.finish_with(NewGroup {
        name: payload.name.clone(),
        description: payload.description.clone(),
        logo: payload.logo.clone(),
        source_organization: payload.source_organization.clone(),
        catalogue,
    })
}

pub fn group_patch(patch: &GroupPatch) -> Result<(), Violations> {
    let mut check = Check::default();
    if let Some(name) = &patch.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    patch_url(&mut check, "logo", &patch.logo);
    if let Some(org) = &patch.source_organization {
        check.organization("source_organization", org);
    }
    check.finish()
}

pub fn product(payload: &ProductPayload) -> Result<NewProduct, Violations> {
    let mut check = Check::default();
    check.required("name", &payload.name);
    check.max_length("name", &payload.name, MAX_NAME);
    if let Some(description) = &payload.description {
        check.max_length("description", description, MAX_DESCRIPTION);
    }
    check.opt_url("logo", payload.logo.as_deref());
    check.opt_url("movie", payload.movie.as_deref());
    check.opt_url("calendar", payload.calendar.as_deref());
    check.urls("documents", &payload.documents);
    check.urls("images", &payload.images);
    check.urls("external_docs", &payload.external_docs);
    check.organization("source_organization", &payload.source_organization);
    check.currency("price_currency", &payload.price_currency);

    let product_type = check.product_type("type", payload.product_type.as_deref());
    let price = check.price("price", payload.price.as_deref());

    if payload.tax_percentage.is_none() {
        check.push(
            "tax_percentage",
            Constraint::Required,
            "tax_percentage is required",
        );
    }
    if payload.requires_appointment.is_none() {
        check.push(
            "requires_appointment",
            Constraint::Required,
            "requires_appointment is required",
        );
    }
    if payload.catalogue.is_none() {
        check.push("catalogue", Constraint::Required, "catalogue is required");
    }

    let (Some(product_type), Some(price), Some(tax_percentage), Some(requires_appointment), Some(catalogue)) = (
        product_type,
        price,
        payload.tax_percentage,
        payload.requires_appointment,
        payload.catalogue,
    ) else {
        // at least one violation has been recorded for every missing part
        return Err(Violations(check.violations));
    };

    check.finish_with(NewProduct {
        sku: payload.sku.clone(),
        name: payload.name.clone(),
        description: payload.description.clone(),
        logo: payload.logo.clone(),
        movie: payload.movie.clone(),
        source_organization: payload.source_organization.clone(),
        product_type,
        price,
        price_currency: payload.price_currency.clone(),
        tax_percentage,
        requires_appointment,
        calendar: payload.calendar.clone(),
        documents: payload.documents.clone(),
        images: payload.images.clone(),
        external_docs: payload.external_docs.clone(),
        catalogue,
        groups: payload.groups.clone(),
        parent: payload.parent,
        grouped_products: payload.grouped_products.clone(),
        sets: payload.sets.clone(),
    })
}

pub fn product_patch(payload: ProductPatchPayload) -> Result<ProductPatch, Violations> {
    let mut check = Check::default();
    if let Some(name) = &payload.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    if let Field::Present(Some(description)) = &payload.description {
        check.max_length("description", description, MAX_DESCRIPTION);
    }
    patch_url(&mut check, "logo", &payload.logo);
    patch_url(&mut check, "movie", &payload.movie);
    patch_url(&mut check, "calendar", &payload.calendar);
    if let Some(org) = &payload.source_organization {
        check.organization("source_organization", org);
    }
    if let Some(currency) = &payload.price_currency {
        check.currency("price_currency", currency);
    }
    if let Some(documents) = &payload.documents {
        check.urls("documents", documents);
    }
    if let Some(images) = &payload.images {
        check.urls("images", images);
    }
    if let Some(external_docs) = &payload.external_docs {
        check.urls("external_docs", external_docs);
    }

    let product_type = match &payload.product_type {
        Some(raw) => check.parse_product_type("type", raw),
        None => None,
    };
    let price = match &payload.price {
        Some(raw) => check.parse_price("price", raw),
        None => None,
    };

    check.finish_with(ProductPatch {
        sku: payload.sku,
        name: payload.name,
        description: payload.description,
        logo: payload.logo,
        movie: payload.movie,
        source_organization: payload.source_organization,
        product_type,
        price,
        price_currency: payload.price_currency,
        tax_percentage: payload.tax_percentage,
        requires_appointment: payload.requires_appointment,
        calendar: payload.calendar,
        documents: payload.documents,
        images: payload.images,
        external_docs: payload.external_docs,
        catalogue: payload.catalogue,
        groups: payload.groups,
        parent: payload.parent,
        grouped_products: payload.grouped_products,
        sets: payload.sets,
    })
}

pub fn offer(payload: &OfferPayload) -> Result<NewOffer, Violations> {
    let mut check = Check::default();
    check.required("name", &payload.name);
    check.max_length("name", &payload.name, MAX_NAME);
    check.currency("price_currency", &payload.price_currency);

    let price = check.price("price", payload.price.as_deref());

    match payload.offered_by.as_deref() {
        Some(offered_by) => check.url("offered_by", offered_by),
        None => check.push("offered_by", Constraint::Required, "offered_by is required"),
    }
    if payload.product.is_none() {
        check.push("product", Constraint::Required, "product is required");
    }
    if payload.availability_starts.is_none() {
        check.push(
            "availability_starts",
            Constraint::Required,
            "availability_starts is required",
        );
    }
    if payload.availability_ends.is_none() {
        check.push(
            "availability_ends",
            Constraint::Required,
            "availability_ends is required",
        );
    }
    if let (Some(starts), Some(ends)) = (payload.availability_starts, payload.availability_ends)
        && starts > ends
    {
        check.push(
            "availability_starts",
            Constraint::DateOrder,
            "availability_starts must not be after availability_ends",
        );
    }

    let (Some(price), Some(offered_by), Some(product), Some(starts), Some(ends)) = (
        price,
        payload.offered_by.clone(),
        payload.product,
        payload.availability_starts,
        payload.availability_ends,
    ) else {
        return Err(Violations(check.violations));
    };

    check.finish_with(NewOffer {
        name: payload.name.clone(),
        description: payload.description.clone(),
        price,
        price_currency: payload.price_currency.clone(),
        offered_by,
        availability_starts: starts,
        availability_ends: ends,
        tax_percentage: payload.tax_percentage,
        product,
        eligible_customer_types: payload.eligible_customer_types.clone(),
        taxes: payload.taxes.clone(),
    })
}

pub fn offer_patch(payload: OfferPatchPayload) -> Result<OfferPatch, Violations> {
    let mut check = Check::default();
    if let Some(name) = &payload.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    if let Some(currency) = &payload.price_currency {
        check.currency("price_currency", currency);
    }
    if let Some(offered_by) = &payload.offered_by {
        check.url("offered_by", offered_by);
    }
    if let (Some(starts), Some(ends)) = (payload.availability_starts, payload.availability_ends)
        && starts > ends
    {
        check.push(
            "availability_starts",
            Constraint::DateOrder,
            "availability_starts must not be after availability_ends",
        );
    }
    let price = match &payload.price {
        Some(raw) => check.parse_price("price", raw),
        None => None,
    };

    check.finish_with(OfferPatch {
        name: payload.name,
        description: payload.description,
        price,
        price_currency: payload.price_currency,
        offered_by: payload.offered_by,
        availability_starts: payload.availability_starts,
        availability_ends: payload.availability_ends,
        tax_percentage: payload.tax_percentage,
        eligible_customer_types: payload.eligible_customer_types,
        taxes: payload.taxes,
    })
}

pub fn tax(payload: &TaxPayload) -> Result<NewTax, Violations> {
    let mut check = Check::default();
    check.required("name", &payload.name);
    check.max_length("name", &payload.name, MAX_NAME);
    check.currency("price_currency", &payload.price_currency);
    let price = check.price("price", payload.price.as_deref());
    if payload.percentage.is_none() {
        check.push("percentage", Constraint::Required, "percentage is required");
    }

    let (Some(price), Some(percentage)) = (price, payload.percentage) else {
        return Err(Violations(check.violations));
    };

    check.finish_with(NewTax {
        name: payload.name.clone(),
        description: payload.description.clone(),
        price,
        price_currency: payload.price_currency.clone(),
        percentage,
    })
}

pub fn tax_patch(payload: TaxPatchPayload) -> Result<TaxPatch, Violations> {
    let mut check = Check::default();
    if let Some(name) = &payload.name {
        check.required("name", name);
        check.max_length("name", name, MAX_NAME);
    }
    if let Some(currency) = &payload.price_currency {
        check.currency("price_currency", currency);
    }
    let price = match &payload.price {
        Some(raw) => check.parse_price("price", raw),
        None => None,
    };

    check.finish_with(TaxPatch {
        name: payload.name,
        description: payload.description,
        price,
        price_currency: payload.price_currency,
        percentage: payload.percentage,
    })
}

pub fn customer_type(input: &NewCustomerType) -> Result<(), Violations> {
    let mut check = Check::default();
    check.required("name", &input.name);
    check.required("description", &input.description);
    check.finish()
}

pub fn customer_type_patch(patch: &CustomerTypePatch) -> Result<(), Violations> {
    let mut check = Check::default();
    if let Some(name) = &patch.name {
        check.required("name", name);
    }
    if let Some(description) = &patch.description {
        check.required("description", description);
    }
    check.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{CatalogueId, ProductId};
    use chrono::{TimeZone, Utc};

    fn product_payload() -> ProductPayload {
        ProductPayload {
            sku: None,
            name: "Trouwen / Partnerschap".to_owned(),
            description: None,
            logo: None,
            movie: None,
            source_organization: "002220647".to_owned(),
            product_type: Some("set".to_owned()),
            price: Some("627.00".to_owned()),
            price_currency: "EUR".to_owned(),
            tax_percentage: Some(0),
            requires_appointment: Some(false),
            calendar: None,
            documents: vec![],
            images: vec![],
            external_docs: vec![],
            catalogue: Some(CatalogueId::new()),
            groups: vec![],
            parent: None,
            grouped_products: vec![],
            sets: vec![],
        }
    }

    fn offer_payload(product: ProductId) -> OfferPayload {
        OfferPayload {
            name: "Trouwen 2024".to_owned(),
            description: None,
            price: Some("627.00".to_owned()),
            price_currency: "EUR".to_owned(),
            offered_by: Some("https://www.utrecht.nl".to_owned()),
            availability_starts: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            availability_ends: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            tax_percentage: Some(0),
            product: Some(product),
            eligible_customer_types: vec![],
            taxes: vec![],
        }
    }

    #[test]
    fn valid_product_passes() {
        let new = product(&product_payload()).unwrap();
        assert_eq!(ProductType::Set, new.product_type);
        assert_eq!("627.00", new.price.to_string());
    }

    #[test]
    fn unknown_product_type_names_the_allowed_values() {
        let mut payload = product_payload();
        payload.product_type = Some("bundle".to_owned());

        let violations = product(&payload).unwrap_err();
        let violation = &violations.0[0];
        assert_eq!("type", violation.field);
        assert_eq!(Constraint::Choice, violation.constraint);
        for allowed in ProductType::ALLOWED {
            assert!(violation.message.contains(allowed));
        }
    }

    #[test]
    fn violations_are_collected_not_fail_fast() {
        let mut payload = product_payload();
        payload.name = String::new();
        payload.product_type = None;
        payload.price = Some("12.345".to_owned());
        payload.source_organization = "123".to_owned();

        let violations = product(&payload).unwrap_err();
        let fields: Vec<_> = violations.0.iter().map(|v| v.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"type"));
        assert!(fields.contains(&"price"));
        assert!(fields.contains(&"source_organization"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut payload = product_payload();
        payload.price = Some("-1.00".to_owned());

        let violations = product(&payload).unwrap_err();
        assert_eq!(Constraint::NonNegative, violations.0[0].constraint);
    }

    #[test]
    fn offer_with_inverted_availability_window_is_rejected() {
        let mut payload = offer_payload(ProductId::new());
        std::mem::swap(
            &mut payload.availability_starts,
            &mut payload.availability_ends,
        );

        let violations = offer(&payload).unwrap_err();
        assert_eq!(Constraint::DateOrder, violations.0[0].constraint);
    }

    #[test]
    fn valid_offer_passes() {
        assert!(offer(&offer_payload(ProductId::new())).is_ok());
    }

    #[test]
    fn supplier_requires_kvk_and_org_length() {
        let violations = supplier(&NewSupplier {
            name: "Gemeente Utrecht".to_owned(),
            kvk: " ".to_owned(),
            source_organization: "123".to_owned(),
            logo: None,
        })
        .unwrap_err();
        let fields: Vec<_> = violations.0.iter().map(|v| v.field).collect();
        assert_eq!(vec!["kvk", "source_organization"], fields);
    }

    #[test]
    fn bad_logo_url_is_a_violation() {
        let violations = catalogue(&NewCatalogue {
            name: "Gemeente Utrecht".to_owned(),
            description: None,
            logo: Some("not a url".to_owned()),
            source_organization: "002220647".to_owned(),
        })
        .unwrap_err();
        assert_eq!(Constraint::Url, violations.0[0].constraint);
    }

    #[test]
    fn currency_must_be_three_uppercase_letters() {
        let mut payload = product_payload();
        payload.price_currency = "eur".to_owned();
        let violations = product(&payload).unwrap_err();
        assert_eq!(Constraint::Currency, violations.0[0].constraint);
    }
}
