use chrono::Utc;
use optional_field::Field;
use pdc_core::error::{OptStoreResult, StoreResult};
use pdc_core::id::CatalogueId;
use pdc_core::list::OrgCriteria;
use pdc_core::model::{Catalogue, CataloguePatch, NewCatalogue};
use pdc_core::repository::CatalogueRepository;
use tracing::{debug, info};

use crate::store::{MemoryStore, remove_id, touched};

impl CatalogueRepository for MemoryStore {
    async fn get(&self, id: CatalogueId) -> OptStoreResult<Catalogue> {
        Ok(self.inner.read().await.catalogues.get(&id).cloned())
    }

    async fn list(&self, criteria: OrgCriteria) -> StoreResult<Vec<Catalogue>> {
        let inner = self.inner.read().await;
        let mut catalogues: Vec<_> = inner
            .catalogues
            .values()
            .filter(|catalogue| {
                criteria
                    .source_organization
                    .as_ref()
                    .is_none_or(|org| &catalogue.source_organization == org)
            })
            .cloned()
            .collect();
        catalogues.sort_by_key(|catalogue| (catalogue.created, catalogue.id));
        Ok(criteria.pagination.slice(catalogues))
    }

    async fn create(&self, new: NewCatalogue) -> StoreResult<Catalogue> {
        let catalogue = Catalogue {
            id: CatalogueId::new(),
            name: new.name,
            description: new.description,
            logo: new.logo,
            source_organization: new.source_organization,
            groups: Vec::new(),
            products: Vec::new(),
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %catalogue.id, "creating catalogue");
        self.inner
            .write()
            .await
            .catalogues
            .insert(catalogue.id, catalogue.clone());
        Ok(catalogue)
    }

    async fn patch(&self, id: CatalogueId, patch: CataloguePatch) -> OptStoreResult<Catalogue> {
        let mut inner = self.inner.write().await;
        let Some(catalogue) = inner.catalogues.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            catalogue.name = name;
        }
        if let Field::Present(description) = patch.description {
            catalogue.description = description;
        }
        if let Field::Present(logo) = patch.logo {
            catalogue.logo = logo;
        }
        if let Some(org) = patch.source_organization {
            catalogue.source_organization = org;
        }
        catalogue.updated = touched();
        Ok(Some(catalogue.clone()))
    }

    async fn delete(&self, id: CatalogueId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(catalogue) = inner.catalogues.remove(&id) else {
            return Ok(None);
        };
        info!(
            id = %id,
            groups = catalogue.groups.len(),
            products = catalogue.products.len(),
            "deleting catalogue and everything it owns"
        );
        for group_id in &catalogue.groups {
            let Some(group) = inner.groups.remove(group_id) else {
                continue;
            };
            // Members from other catalogues survive the cascade and must
            // stop referencing the removed group.
            for member in &group.products {
                if let Some(member) = inner.products.get_mut(member) {
                    remove_id(&mut member.groups, group_id);
                }
            }
        }
        for product in &catalogue.products {
            if let Some(product) = inner.products.remove(product) {
                inner.unlink_product(&product);
            }
        }
        Ok(Some(()))
    }
}
