use chrono::Utc;
use optional_field::Field;
use pdc_core::error::{OptStoreResult, StoreResult};
use pdc_core::id::TaxId;
use pdc_core::list::Pagination;
use pdc_core::model::{NewTax, Tax, TaxPatch};
use pdc_core::repository::TaxRepository;
use tracing::debug;

use crate::store::{MemoryStore, touched};

impl TaxRepository for MemoryStore {
    async fn get(&self, id: TaxId) -> OptStoreResult<Tax> {
        Ok(self.inner.read().await.taxes.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> StoreResult<Vec<Tax>> {
        let inner = self.inner.read().await;
        let mut taxes: Vec<_> = inner.taxes.values().cloned().collect();
        taxes.sort_by_key(|tax| (tax.created, tax.id));
        Ok(pagination.slice(taxes))
    }

    async fn create(&self, new: NewTax) -> StoreResult<Tax> {
        let tax = Tax {
            id: TaxId::new(),
            name: new.name,
            description: new.description,
            price: new.price,
            price_currency: new.price_currency,
            percentage: new.percentage,
            offers: Vec::new(),
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %tax.id, "creating tax");
        self.inner.write().await.taxes.insert(tax.id, tax.clone());
        Ok(tax)
    }

    async fn patch(&self, id: TaxId, patch: TaxPatch) -> OptStoreResult<Tax> {
        let mut inner = self.inner.write().await;
        let Some(tax) = inner.taxes.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            tax.name = name;
        }
        if let Field::Present(description) = patch.description {
            tax.description = description;
        }
        if let Some(price) = patch.price {
            tax.price = price;
        }
        if let Some(currency) = patch.price_currency {
            tax.price_currency = currency;
        }
        if let Some(percentage) = patch.percentage {
            tax.percentage = percentage;
        }
        tax.updated = touched();
        Ok(Some(tax.clone()))
    }

    async fn delete(&self, id: TaxId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(tax) = inner.taxes.remove(&id) else {
            return Ok(None);
        };
        for offer in &tax.offers {
            if let Some(offer) = inner.offers.get_mut(offer) {
                offer.taxes.retain(|existing| existing != &id);
            }
        }
        Ok(Some(()))
    }
}
