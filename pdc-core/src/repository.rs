//! Storage traits, one per entity. All take validated input and return
//! `Option` for "that id does not exist" rather than an error variant.

use crate::error::{OptStoreResult, StoreResult};
use crate::id::{CatalogueId, CustomerTypeId, GroupId, OfferId, ProductId, SupplierId, TaxId};
use crate::list::{OrgCriteria, Pagination, ProductCriteria};
use crate::model::{
    Catalogue, CataloguePatch, CustomerType, CustomerTypePatch, Group, GroupPatch, NewCatalogue,
    NewCustomerType, NewGroup, NewOffer, NewProduct, NewSupplier, NewTax, Offer, OfferPatch,
    Product, ProductPatch, Supplier, SupplierPatch, Tax, TaxPatch,
};

pub trait SupplierRepository {
    fn get(&self, id: SupplierId) -> impl Future<Output = OptStoreResult<Supplier>> + Send;

    fn list(&self, criteria: OrgCriteria)
    -> impl Future<Output = StoreResult<Vec<Supplier>>> + Send;

    fn create(&self, new: NewSupplier) -> impl Future<Output = StoreResult<Supplier>> + Send;

    fn patch(
        &self,
        id: SupplierId,
        patch: SupplierPatch,
    ) -> impl Future<Output = OptStoreResult<Supplier>> + Send;

    fn delete(&self, id: SupplierId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait CatalogueRepository {
    fn get(&self, id: CatalogueId) -> impl Future<Output = OptStoreResult<Catalogue>> + Send;

    fn list(
        &self,
        criteria: OrgCriteria,
    ) -> impl Future<Output = StoreResult<Vec<Catalogue>>> + Send;

    fn create(&self, new: NewCatalogue) -> impl Future<Output = StoreResult<Catalogue>> + Send;

    fn patch(
        &self,
        id: CatalogueId,
        patch: CataloguePatch,
    ) -> impl Future<Output = OptStoreResult<Catalogue>> + Send;

    /// Deletes the catalogue together with everything it owns: its groups
    /// and its products, and the offers of those products.
    fn delete(&self, id: CatalogueId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait GroupRepository {
    fn get(&self, id: GroupId) -> impl Future<Output = OptStoreResult<Group>> + Send;

    fn list(&self, pagination: Pagination)
    -> impl Future<Output = StoreResult<Vec<Group>>> + Send;

    fn create(&self, new: NewGroup) -> impl Future<Output = StoreResult<Group>> + Send;

    fn patch(
        &self,
        id: GroupId,
        patch: GroupPatch,
    ) -> impl Future<Output = OptStoreResult<Group>> + Send;

    /// Deletes the group only; member products simply lose the membership.
    fn delete(&self, id: GroupId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait ProductRepository {
    fn get(&self, id: ProductId) -> impl Future<Output = OptStoreResult<Product>> + Send;

    fn list(
        &self,
        criteria: ProductCriteria,
    ) -> impl Future<Output = StoreResult<Vec<Product>>> + Send;

    fn create(&self, new: NewProduct) -> impl Future<Output = StoreResult<Product>> + Send;

    fn patch(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> impl Future<Output = OptStoreResult<Product>> + Send;

    /// Deletes the product and its offers; unlinks it everywhere else.
    fn delete(&self, id: ProductId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait OfferRepository {
    fn get(&self, id: OfferId) -> impl Future<Output = OptStoreResult<Offer>> + Send;

    fn list(&self, pagination: Pagination)
    -> impl Future<Output = StoreResult<Vec<Offer>>> + Send;

    fn create(&self, new: NewOffer) -> impl Future<Output = StoreResult<Offer>> + Send;

    fn patch(
        &self,
        id: OfferId,
        patch: OfferPatch,
    ) -> impl Future<Output = OptStoreResult<Offer>> + Send;

    fn delete(&self, id: OfferId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait TaxRepository {
    fn get(&self, id: TaxId) -> impl Future<Output = OptStoreResult<Tax>> + Send;

    fn list(&self, pagination: Pagination) -> impl Future<Output = StoreResult<Vec<Tax>>> + Send;

    fn create(&self, new: NewTax) -> impl Future<Output = StoreResult<Tax>> + Send;

    fn patch(
        &self,
        id: TaxId,
        patch: TaxPatch,
    ) -> impl Future<Output = OptStoreResult<Tax>> + Send;

    fn delete(&self, id: TaxId) -> impl Future<Output = OptStoreResult<()>> + Send;
}

pub trait CustomerTypeRepository {
    fn get(&self, id: CustomerTypeId) -> impl Future<Output = OptStoreResult<CustomerType>> + Send;

    fn list(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = StoreResult<Vec<CustomerType>>> + Send;

    fn create(
        &self,
        new: NewCustomerType,
    ) -> impl Future<Output = StoreResult<CustomerType>> + Send;

    fn patch(
        &self,
        id: CustomerTypeId,
        patch: CustomerTypePatch,
    ) -> impl Future<Output = OptStoreResult<CustomerType>> + Send;

    fn delete(&self, id: CustomerTypeId) -> impl Future<Output = OptStoreResult<()>> + Send;
}
