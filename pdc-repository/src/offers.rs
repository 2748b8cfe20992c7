use chrono::Utc;
use error_stack::Report;
use optional_field::Field;
use pdc_core::error::{OptStoreResult, StoreError, StoreResult};
use pdc_core::id::OfferId;
use pdc_core::list::Pagination;
use pdc_core::model::{NewOffer, Offer, OfferPatch};
use pdc_core::repository::OfferRepository;
use tracing::debug;

use crate::store::{MemoryStore, StoreInner, push_unique, remove_id, touched};

impl OfferRepository for MemoryStore {
    async fn get(&self, id: OfferId) -> OptStoreResult<Offer> {
        Ok(self.inner.read().await.offers.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> StoreResult<Vec<Offer>> {
        let inner = self.inner.read().await;
        let mut offers: Vec<_> = inner.offers.values().cloned().collect();
        offers.sort_by_key(|offer| (offer.created, offer.id));
        Ok(pagination.slice(offers))
    }

    async fn create(&self, new: NewOffer) -> StoreResult<Offer> {
        let mut inner = self.inner.write().await;
        inner.require_product(new.product, "product")?;
        inner.require_taxes(&new.taxes, "taxes")?;
        inner.require_customer_types(&new.eligible_customer_types, "eligible_customer_types")?;

        let offer = Offer {
            id: OfferId::new(),
            name: new.name,
            description: new.description,
            price: new.price,
            price_currency: new.price_currency,
            offered_by: new.offered_by,
            availability_starts: new.availability_starts,
            availability_ends: new.availability_ends,
            tax_percentage: new.tax_percentage,
            product: new.product,
            eligible_customer_types: new.eligible_customer_types,
            taxes: new.taxes,
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %offer.id, product = %offer.product, "creating offer");
        if let Some(product) = inner.products.get_mut(&offer.product) {
            push_unique(&mut product.offers, offer.id);
        }
        for tax in &offer.taxes {
            if let Some(tax) = inner.taxes.get_mut(tax) {
                push_unique(&mut tax.offers, offer.id);
            }
        }
        for customer_type in &offer.eligible_customer_types {
            if let Some(customer_type) = inner.customer_types.get_mut(customer_type) {
                push_unique(&mut customer_type.offers, offer.id);
            }
        }
        inner.offers.insert(offer.id, offer.clone());
        Ok(offer)
    }

    async fn patch(&self, id: OfferId, patch: OfferPatch) -> OptStoreResult<Offer> {
        let mut inner = self.inner.write().await;
        if !inner.offers.contains_key(&id) {
            return Ok(None);
        }
        if let Some(taxes) = &patch.taxes {
            inner.require_taxes(taxes, "taxes")?;
        }
        if let Some(customer_types) = &patch.eligible_customer_types {
            inner.require_customer_types(customer_types, "eligible_customer_types")?;
        }
        // The merged availability window must still be ordered even when
        // only one end of it is patched.
        {
            let Some(offer) = inner.offers.get(&id) else {
                return Ok(None);
            };
            let starts = patch.availability_starts.unwrap_or(offer.availability_starts);
            let ends = patch.availability_ends.unwrap_or(offer.availability_ends);
            if starts > ends {
                return Err(Report::new(StoreError::Integrity(
                    "availability_starts must not be after availability_ends",
                ))
                .attach(id.to_string()));
            }
        }

        replace_taxes(&mut inner, id, patch.taxes);
        replace_customer_types(&mut inner, id, patch.eligible_customer_types);

        let Some(offer) = inner.offers.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            offer.name = name;
        }
        if let Field::Present(description) = patch.description {
            offer.description = description;
        }
        if let Some(price) = patch.price {
            offer.price = price;
        }
        if let Some(currency) = patch.price_currency {
            offer.price_currency = currency;
        }
        if let Some(offered_by) = patch.offered_by {
            offer.offered_by = offered_by;
        }
        if let Some(starts) = patch.availability_starts {
            offer.availability_starts = starts;
        }
        if let Some(ends) = patch.availability_ends {
            offer.availability_ends = ends;
        }
        if let Field::Present(tax_percentage) = patch.tax_percentage {
            offer.tax_percentage = tax_percentage;
        }
        offer.updated = touched();
        Ok(Some(offer.clone()))
    }

    async fn delete(&self, id: OfferId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(offer) = inner.offers.remove(&id) else {
            return Ok(None);
        };
        if let Some(product) = inner.products.get_mut(&offer.product) {
            remove_id(&mut product.offers, &id);
        }
        inner.unlink_offer(&offer);
        Ok(Some(()))
    }
}

fn replace_taxes(inner: &mut StoreInner, id: OfferId, taxes: Option<Vec<pdc_core::id::TaxId>>) {
    let Some(taxes) = taxes else { return };
    let Some(old) = inner.offers.get(&id).map(|offer| offer.taxes.clone()) else {
        return;
    };
    for removed in old.iter().filter(|tax| !taxes.contains(tax)) {
        if let Some(tax) = inner.taxes.get_mut(removed) {
            remove_id(&mut tax.offers, &id);
        }
    }
    for added in taxes.iter().filter(|tax| !old.contains(tax)) {
        if let Some(tax) = inner.taxes.get_mut(added) {
            push_unique(&mut tax.offers, id);
        }
    }
    if let Some(offer) = inner.offers.get_mut(&id) {
        offer.taxes = taxes;
    }
}

fn replace_customer_types(
    inner: &mut StoreInner,
    id: OfferId,
    customer_types: Option<Vec<pdc_core::id::CustomerTypeId>>,
) {
    let Some(customer_types) = customer_types else { return };
    let Some(old) = inner
        .offers
        .get(&id)
        .map(|offer| offer.eligible_customer_types.clone())
    else {
        return;
    };
    for removed in old.iter().filter(|ct| !customer_types.contains(ct)) {
        if let Some(customer_type) = inner.customer_types.get_mut(removed) {
            remove_id(&mut customer_type.offers, &id);
        }
    }
    for added in customer_types.iter().filter(|ct| !old.contains(ct)) {
        if let Some(customer_type) = inner.customer_types.get_mut(added) {
            push_unique(&mut customer_type.offers, id);
        }
    }
    if let Some(offer) = inner.offers.get_mut(&id) {
        offer.eligible_customer_types = customer_types;
    }
}
