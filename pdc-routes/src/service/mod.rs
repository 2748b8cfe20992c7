//! One thin service per entity: validate the payload, forward to the
//! engine's repository, reclassify failures for the endpoint layer.

mod catalogues;
mod customer_types;
mod groups;
mod offers;
mod products;
mod suppliers;
mod taxes;

pub use catalogues::CatalogueService;
pub use customer_types::CustomerTypeService;
pub use groups::GroupService;
pub use offers::OfferService;
pub use products::ProductService;
pub use suppliers::SupplierService;
pub use taxes::TaxService;
