use chrono::Utc;
use optional_field::Field;
use pdc_core::error::{OptStoreResult, StoreResult};
use pdc_core::id::GroupId;
use pdc_core::list::Pagination;
use pdc_core::model::{Group, GroupPatch, NewGroup};
use pdc_core::repository::GroupRepository;
use tracing::debug;

use crate::store::{MemoryStore, push_unique, remove_id, touched};

impl GroupRepository for MemoryStore {
    async fn get(&self, id: GroupId) -> OptStoreResult<Group> {
        Ok(self.inner.read().await.groups.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> StoreResult<Vec<Group>> {
        let inner = self.inner.read().await;
        let mut groups: Vec<_> = inner.groups.values().cloned().collect();
        groups.sort_by_key(|group| (group.created, group.id));
        Ok(pagination.slice(groups))
    }

    async fn create(&self, new: NewGroup) -> StoreResult<Group> {
        let mut inner = self.inner.write().await;
        inner.require_catalogue(new.catalogue, "catalogue")?;
        let group = Group {
            id: GroupId::new(),
            name: new.name,
            description: new.description,
            logo: new.logo,
            source_organization: new.source_organization,
            catalogue: new.catalogue,
            products: Vec::new(),
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %group.id, catalogue = %group.catalogue, "creating group");
        if let Some(catalogue) = inner.catalogues.get_mut(&group.catalogue) {
            push_unique(&mut catalogue.groups, group.id);
        }
        inner.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn patch(&self, id: GroupId, patch: GroupPatch) -> OptStoreResult<Group> {
        let mut inner = self.inner.write().await;
        let Some(current) = inner.groups.get(&id).map(|group| group.catalogue) else {
            return Ok(None);
        };
        if let Some(target) = patch.catalogue {
            inner.require_catalogue(target, "catalogue")?;
            if current != target {
                if let Some(old) = inner.catalogues.get_mut(&current) {
                    remove_id(&mut old.groups, &id);
                }
                if let Some(new) = inner.catalogues.get_mut(&target) {
                    push_unique(&mut new.groups, id);
                }
            }
        }
        let Some(group) = inner.groups.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(target) = patch.catalogue {
            group.catalogue = target;
        }
        if let Some(name) = patch.name {
            group.name = name;
        }
        if let Field::Present(description) = patch.description {
            group.description = description;
        }
        if let Field::Present(logo) = patch.logo {
            group.logo = logo;
        }
        if let Some(org) = patch.source_organization {
            group.source_organization = org;
        }
        group.updated = touched();
        Ok(Some(group.clone()))
    }

    async fn delete(&self, id: GroupId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(group) = inner.groups.remove(&id) else {
            return Ok(None);
        };
        if let Some(catalogue) = inner.catalogues.get_mut(&group.catalogue) {
            remove_id(&mut catalogue.groups, &id);
        }
        for product in &group.products {
            if let Some(product) = inner.products.get_mut(product) {
                remove_id(&mut product.groups, &id);
            }
        }
        Ok(Some(()))
    }
}
