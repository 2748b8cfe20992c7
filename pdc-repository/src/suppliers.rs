use chrono::Utc;
use optional_field::Field;
use pdc_core::error::{OptStoreResult, StoreResult};
use pdc_core::id::SupplierId;
use pdc_core::list::OrgCriteria;
use pdc_core::model::{NewSupplier, Supplier, SupplierPatch};
use pdc_core::repository::SupplierRepository;
use tracing::debug;

use crate::store::{MemoryStore, touched};

impl SupplierRepository for MemoryStore {
    async fn get(&self, id: SupplierId) -> OptStoreResult<Supplier> {
        Ok(self.inner.read().await.suppliers.get(&id).cloned())
    }

    async fn list(&self, criteria: OrgCriteria) -> StoreResult<Vec<Supplier>> {
        let inner = self.inner.read().await;
        let mut suppliers: Vec<_> = inner
            .suppliers
            .values()
            .filter(|supplier| {
                criteria
                    .source_organization
                    .as_ref()
                    .is_none_or(|org| &supplier.source_organization == org)
            })
            .cloned()
            .collect();
        suppliers.sort_by_key(|supplier| (supplier.created, supplier.id));
        Ok(criteria.pagination.slice(suppliers))
    }

    async fn create(&self, new: NewSupplier) -> StoreResult<Supplier> {
        let supplier = Supplier {
            id: SupplierId::new(),
            name: new.name,
            kvk: new.kvk,
            source_organization: new.source_organization,
            logo: new.logo,
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %supplier.id, "creating supplier");
        self.inner
            .write()
            .await
            .suppliers
            .insert(supplier.id, supplier.clone());
        Ok(supplier)
    }

    async fn patch(&self, id: SupplierId, patch: SupplierPatch) -> OptStoreResult<Supplier> {
        let mut inner = self.inner.write().await;
        let Some(supplier) = inner.suppliers.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            supplier.name = name;
        }
        if let Some(kvk) = patch.kvk {
            supplier.kvk = kvk;
        }
        if let Some(org) = patch.source_organization {
            supplier.source_organization = org;
        }
        if let Field::Present(logo) = patch.logo {
            supplier.logo = logo;
        }
        supplier.updated = touched();
        Ok(Some(supplier.clone()))
    }

    async fn delete(&self, id: SupplierId) -> OptStoreResult<()> {
        Ok(self.inner.write().await.suppliers.remove(&id).map(|_| ()))
    }
}
