use axum::extract::FromRef;
use pdc_core::Engine;

use crate::service::{
    CatalogueService, CustomerTypeService, GroupService, OfferService, ProductService,
    SupplierService, TaxService,
};

#[derive(Clone)]
pub struct AppState<E: Engine> {
    pub suppliers: SupplierService<E>,
    pub catalogues: CatalogueService<E>,
    pub groups: GroupService<E>,
    pub products: ProductService<E>,
    pub offers: OfferService<E>,
    pub taxes: TaxService<E>,
    pub customer_types: CustomerTypeService<E>,
    pub metrics_enabled: bool,
}

impl<E: Engine> AppState<E> {
    pub fn new_with_metrics(engine: E) -> Self {
        Self::new(engine, true)
    }

    pub fn new_without_metrics(engine: E) -> Self {
        Self::new(engine, false)
    }

    fn new(engine: E, metrics_enabled: bool) -> Self {
        Self {
            suppliers: SupplierService::new(engine.clone()),
            catalogues: CatalogueService::new(engine.clone()),
            groups: GroupService::new(engine.clone()),
            products: ProductService::new(engine.clone()),
            offers: OfferService::new(engine.clone()),
            taxes: TaxService::new(engine.clone()),
            customer_types: CustomerTypeService::new(engine),
            metrics_enabled,
        }
    }
}

impl<E: Engine> FromRef<AppState<E>> for SupplierService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.suppliers.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for CatalogueService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.catalogues.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for GroupService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.groups.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for ProductService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.products.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for OfferService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.offers.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for TaxService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.taxes.clone()
    }
}

impl<E: Engine> FromRef<AppState<E>> for CustomerTypeService<E> {
    fn from_ref(input: &AppState<E>) -> Self {
        input.customer_types.clone()
    }
}
