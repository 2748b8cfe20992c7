use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use error_stack::Report;
use pdc_core::error::{StoreError, StoreResult};
use pdc_core::id::{
    CatalogueId, CustomerTypeId, GroupId, OfferId, ProductId, SupplierId, TaxId,
};
use pdc_core::model::{Catalogue, CustomerType, Group, Offer, Product, Supplier, Tax};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory backing store. All seven repositories hand out clones of this,
/// so every view shares the same data. Each write takes the single write
/// lock for its whole duration, keeping both sides of every bidirectional
/// relationship consistent.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct StoreInner {
    pub(crate) suppliers: HashMap<SupplierId, Supplier>,
    pub(crate) catalogues: HashMap<CatalogueId, Catalogue>,
    pub(crate) groups: HashMap<GroupId, Group>,
    pub(crate) products: HashMap<ProductId, Product>,
    pub(crate) offers: HashMap<OfferId, Offer>,
    pub(crate) taxes: HashMap<TaxId, Tax>,
    pub(crate) customer_types: HashMap<CustomerTypeId, CustomerType>,
    /// Next sku_id per source organization.
    pub(crate) sku_counters: HashMap<String, u32>,
}

pub(crate) fn push_unique<T: PartialEq>(list: &mut Vec<T>, id: T) {
    if !list.contains(&id) {
        list.push(id);
    }
}

pub(crate) fn remove_id<T: PartialEq>(list: &mut Vec<T>, id: &T) {
    list.retain(|existing| existing != id);
}

pub(crate) fn reference(entity: &'static str, field: &'static str) -> Report<StoreError> {
    Report::new(StoreError::Reference { entity, field })
}

impl StoreInner {
    pub(crate) fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
            && self.catalogues.is_empty()
            && self.groups.is_empty()
            && self.products.is_empty()
            && self.offers.is_empty()
            && self.taxes.is_empty()
            && self.customer_types.is_empty()
    }

    pub(crate) fn next_sku_id(&mut self, source_organization: &str) -> u32 {
        let counter = self
            .sku_counters
            .entry(source_organization.to_owned())
            .or_insert(0);
        *counter += 1;
        *counter
    }

    pub(crate) fn require_catalogue(
        &self,
        id: CatalogueId,
        field: &'static str,
    ) -> StoreResult<()> {
        if self.catalogues.contains_key(&id) {
            Ok(())
        } else {
            Err(reference("catalogue", field).attach(id.to_string()))
        }
    }

    pub(crate) fn require_product(&self, id: ProductId, field: &'static str) -> StoreResult<()> {
        if self.products.contains_key(&id) {
            Ok(())
        } else {
            Err(reference("product", field).attach(id.to_string()))
        }
    }

    pub(crate) fn require_products(
        &self,
        ids: &[ProductId],
        field: &'static str,
    ) -> StoreResult<()> {
        for id in ids {
            self.require_product(*id, field)?;
        }
        Ok(())
    }

    pub(crate) fn require_groups(&self, ids: &[GroupId], field: &'static str) -> StoreResult<()> {
        for id in ids {
            if !self.groups.contains_key(id) {
                return Err(reference("group", field).attach(id.to_string()));
            }
        }
        Ok(())
    }

    pub(crate) fn require_taxes(&self, ids: &[TaxId], field: &'static str) -> StoreResult<()> {
        for id in ids {
            if !self.taxes.contains_key(id) {
                return Err(reference("tax", field).attach(id.to_string()));
            }
        }
        Ok(())
    }

    pub(crate) fn require_customer_types(
        &self,
        ids: &[CustomerTypeId],
        field: &'static str,
    ) -> StoreResult<()> {
        for id in ids {
            if !self.customer_types.contains_key(id) {
                return Err(reference("customer type", field).attach(id.to_string()));
            }
        }
        Ok(())
    }

    /// Walks the parent chain upward from `parent` and fails if it passes
    /// through `child`. Chains are short in practice, but the walk is also
    /// bounded so that pre-existing corruption cannot loop forever.
    pub(crate) fn check_parent_cycle(
        &self,
        child: ProductId,
        parent: ProductId,
    ) -> StoreResult<()> {
        let mut current = Some(parent);
        let mut hops = 0usize;
        while let Some(id) = current {
            if id == child {
                return Err(Report::new(StoreError::Integrity(
                    "a product cannot be its own ancestor",
                ))
                .attach(child.to_string()));
            }
            hops += 1;
            if hops > self.products.len() {
                return Err(Report::new(StoreError::Storage)
                    .attach("parent chain does not terminate"));
            }
            current = self.products.get(&id).and_then(|p| p.parent);
        }
        Ok(())
    }

    /// Registers a freshly inserted product on the inverse side of each of
    /// its relationships.
    pub(crate) fn link_product(&mut self, product: &Product) {
        if let Some(catalogue) = self.catalogues.get_mut(&product.catalogue) {
            push_unique(&mut catalogue.products, product.id);
        }
        for group in &product.groups {
            if let Some(group) = self.groups.get_mut(group) {
                push_unique(&mut group.products, product.id);
            }
        }
        if let Some(parent) = product.parent
            && let Some(parent) = self.products.get_mut(&parent)
        {
            push_unique(&mut parent.variations, product.id);
        }
        for member in product.grouped_products.clone() {
            if let Some(member) = self.products.get_mut(&member) {
                push_unique(&mut member.sets, product.id);
            }
        }
        for set in product.sets.clone() {
            if let Some(set) = self.products.get_mut(&set) {
                push_unique(&mut set.grouped_products, product.id);
            }
        }
    }

    /// Removes every trace of a product from other entities, cascading to
    /// its offers. The product itself must already be out of the map.
    pub(crate) fn unlink_product(&mut self, product: &Product) {
        debug!(id = %product.id, offers = product.offers.len(), "unlinking product");
        if let Some(catalogue) = self.catalogues.get_mut(&product.catalogue) {
            remove_id(&mut catalogue.products, &product.id);
        }
        for group in &product.groups {
            if let Some(group) = self.groups.get_mut(group) {
                remove_id(&mut group.products, &product.id);
            }
        }
        if let Some(parent) = product.parent
            && let Some(parent) = self.products.get_mut(&parent)
        {
            remove_id(&mut parent.variations, &product.id);
        }
        for variation in &product.variations {
            if let Some(variation) = self.products.get_mut(variation) {
                variation.parent = None;
            }
        }
        for member in &product.grouped_products {
            if let Some(member) = self.products.get_mut(member) {
                remove_id(&mut member.sets, &product.id);
            }
        }
        for set in &product.sets {
            if let Some(set) = self.products.get_mut(set) {
                remove_id(&mut set.grouped_products, &product.id);
            }
        }
        for offer in &product.offers {
            if let Some(offer) = self.offers.remove(offer) {
                self.unlink_offer(&offer);
            }
        }
    }

    /// Removes an already-removed offer from its taxes and customer types.
    /// Leaves the owning product alone; callers that delete an offer while
    /// its product survives clean that side up themselves.
    pub(crate) fn unlink_offer(&mut self, offer: &Offer) {
        for tax in &offer.taxes {
            if let Some(tax) = self.taxes.get_mut(tax) {
                remove_id(&mut tax.offers, &offer.id);
            }
        }
        for customer_type in &offer.eligible_customer_types {
            if let Some(customer_type) = self.customer_types.get_mut(customer_type) {
                remove_id(&mut customer_type.offers, &offer.id);
            }
        }
    }
}

/// Stamps `updated` the way every patch path does.
pub(crate) fn touched() -> Option<chrono::DateTime<Utc>> {
    Some(Utc::now())
}
