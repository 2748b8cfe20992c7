use std::fmt::Debug;

use crate::repository::{
    CatalogueRepository, CustomerTypeRepository, GroupRepository, OfferRepository,
    ProductRepository, SupplierRepository, TaxRepository,
};

pub mod error;
pub mod id;
pub mod list;
pub mod model;
pub mod money;
pub mod product_type;
pub mod repository;
pub mod validate;

/// The backing engine of the catalogue service. One implementation per
/// deployment; hands out a repository per entity type. Every repository is
/// expected to see the same underlying data so that cross-entity references
/// resolve consistently.
pub trait Engine: Debug + Clone + Send + Sync + 'static {
    type Suppliers: SupplierRepository + Send + Sync + 'static;
    type Catalogues: CatalogueRepository + Send + Sync + 'static;
    type Groups: GroupRepository + Send + Sync + 'static;
    type Products: ProductRepository + Send + Sync + 'static;
    type Offers: OfferRepository + Send + Sync + 'static;
    type Taxes: TaxRepository + Send + Sync + 'static;
    type CustomerTypes: CustomerTypeRepository + Send + Sync + 'static;

    fn suppliers(&self) -> Self::Suppliers;
    fn catalogues(&self) -> Self::Catalogues;
    fn groups(&self) -> Self::Groups;
    fn products(&self) -> Self::Products;
    fn offers(&self) -> Self::Offers;
    fn taxes(&self) -> Self::Taxes;
    fn customer_types(&self) -> Self::CustomerTypes;
}
