use chrono::Utc;
use pdc_core::error::{OptStoreResult, StoreResult};
use pdc_core::id::CustomerTypeId;
use pdc_core::list::Pagination;
use pdc_core::model::{CustomerType, CustomerTypePatch, NewCustomerType};
use pdc_core::repository::CustomerTypeRepository;
use tracing::debug;

use crate::store::{MemoryStore, touched};

impl CustomerTypeRepository for MemoryStore {
    async fn get(&self, id: CustomerTypeId) -> OptStoreResult<CustomerType> {
        Ok(self.inner.read().await.customer_types.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> StoreResult<Vec<CustomerType>> {
        let inner = self.inner.read().await;
        let mut customer_types: Vec<_> = inner.customer_types.values().cloned().collect();
        customer_types.sort_by_key(|ct| (ct.created, ct.id));
        Ok(pagination.slice(customer_types))
    }

    async fn create(&self, new: NewCustomerType) -> StoreResult<CustomerType> {
        let customer_type = CustomerType {
            id: CustomerTypeId::new(),
            name: new.name,
            description: new.description,
            offers: Vec::new(),
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %customer_type.id, "creating customer type");
        self.inner
            .write()
            .await
            .customer_types
            .insert(customer_type.id, customer_type.clone());
        Ok(customer_type)
    }

    async fn patch(
        &self,
        id: CustomerTypeId,
        patch: CustomerTypePatch,
    ) -> OptStoreResult<CustomerType> {
        let mut inner = self.inner.write().await;
        let Some(customer_type) = inner.customer_types.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            customer_type.name = name;
        }
        if let Some(description) = patch.description {
            customer_type.description = description;
        }
        customer_type.updated = touched();
        Ok(Some(customer_type.clone()))
    }

    async fn delete(&self, id: CustomerTypeId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(customer_type) = inner.customer_types.remove(&id) else {
            return Ok(None);
        };
        for offer in &customer_type.offers {
            if let Some(offer) = inner.offers.get_mut(offer) {
                offer
                    .eligible_customer_types
                    .retain(|existing| existing != &id);
            }
        }
        Ok(Some(()))
    }
}
