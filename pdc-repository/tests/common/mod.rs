#![allow(dead_code)]

use pdc_core::id::{CatalogueId, ProductId, TaxId};
use pdc_core::model::{NewCatalogue, NewOffer, NewProduct, NewTax};
use pdc_core::money::Money;
use pdc_core::product_type::ProductType;
use pdc_core::repository::{CatalogueRepository, ProductRepository};
use pdc_repository::MemoryStore;

pub fn money(raw: &str) -> Money {
    raw.parse().unwrap()
}

pub async fn catalogue(store: &MemoryStore) -> CatalogueId {
    CatalogueRepository::create(
        store,
        NewCatalogue {
            name: "Gemeente Utrecht".to_owned(),
            description: None,
            logo: None,
            source_organization: "002220647".to_owned(),
        },
    )
    .await
    .unwrap()
    .id
}

pub fn new_product(name: &str, catalogue: CatalogueId) -> NewProduct {
    NewProduct {
        sku: None,
        name: name.to_owned(),
        description: None,
        logo: None,
        movie: None,
        source_organization: "002220647".to_owned(),
        product_type: ProductType::Simple,
        price: money("0.00"),
        price_currency: "EUR".to_owned(),
        tax_percentage: 0,
        requires_appointment: false,
        calendar: None,
        documents: Vec::new(),
        images: Vec::new(),
        external_docs: Vec::new(),
        catalogue,
        groups: Vec::new(),
        parent: None,
        grouped_products: Vec::new(),
        sets: Vec::new(),
    }
}

pub async fn product(store: &MemoryStore, name: &str, catalogue: CatalogueId) -> ProductId {
    ProductRepository::create(store, new_product(name, catalogue))
        .await
        .unwrap()
        .id
}

pub fn new_offer(product: ProductId, taxes: Vec<TaxId>) -> NewOffer {
    use chrono::TimeZone;
    NewOffer {
        name: "Trouwen 2024".to_owned(),
        description: None,
        price: money("627.00"),
        price_currency: "EUR".to_owned(),
        offered_by: "https://www.utrecht.nl".to_owned(),
        availability_starts: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        availability_ends: chrono::Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
        tax_percentage: Some(0),
        product,
        eligible_customer_types: Vec::new(),
        taxes,
    }
}

pub fn new_tax() -> NewTax {
    NewTax {
        name: "BTW hoog".to_owned(),
        description: None,
        price: money("0.00"),
        price_currency: "EUR".to_owned(),
        percentage: 21,
    }
}
