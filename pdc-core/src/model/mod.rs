pub mod catalogue;
pub mod customer_type;
pub mod group;
pub mod offer;
pub mod product;
pub mod supplier;
pub mod tax;

pub use catalogue::{Catalogue, CataloguePatch, NewCatalogue};
pub use customer_type::{CustomerType, CustomerTypePatch, NewCustomerType};
pub use group::{Group, GroupPatch, GroupPayload, NewGroup};
pub use offer::{NewOffer, Offer, OfferPatch, OfferPatchPayload, OfferPayload};
pub use product::{NewProduct, Product, ProductPatch, ProductPatchPayload, ProductPayload};
pub use supplier::{NewSupplier, Supplier, SupplierPatch};
pub use tax::{NewTax, Tax, TaxPatch, TaxPatchPayload, TaxPayload};
