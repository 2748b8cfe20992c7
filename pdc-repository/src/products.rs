use chrono::Utc;
use optional_field::Field;
use error_stack::Report;
use pdc_core::error::{OptStoreResult, StoreError, StoreResult};
use pdc_core::id::ProductId;
use pdc_core::list::{ProductCriteria, ProductSort};
use pdc_core::model::{NewProduct, Product, ProductPatch};
use pdc_core::repository::ProductRepository;
use tracing::debug;

use crate::store::{MemoryStore, StoreInner, push_unique, remove_id, touched};

impl ProductRepository for MemoryStore {
    async fn get(&self, id: ProductId) -> OptStoreResult<Product> {
        Ok(self.inner.read().await.products.get(&id).cloned())
    }

    async fn list(&self, criteria: ProductCriteria) -> StoreResult<Vec<Product>> {
        let inner = self.inner.read().await;
        let mut products: Vec<_> = inner
            .products
            .values()
            .filter(|product| {
                criteria
                    .filter
                    .group
                    .is_none_or(|group| product.groups.contains(&group))
            })
            .filter(|product| {
                criteria
                    .filter
                    .source_organization
                    .as_ref()
                    .is_none_or(|org| &product.source_organization == org)
            })
            .cloned()
            .collect();
        products.sort_by_key(|product| (product.created, product.id));
        if let Some(ProductSort::Type) = criteria.filter.sort {
            products.sort_by_key(|product| product.product_type.as_str());
        }
        Ok(criteria.pagination.slice(products))
    }

    async fn create(&self, new: NewProduct) -> StoreResult<Product> {
        let mut inner = self.inner.write().await;
        inner.require_catalogue(new.catalogue, "catalogue")?;
        inner.require_groups(&new.groups, "groups")?;
        inner.require_products(&new.grouped_products, "grouped_products")?;
        inner.require_products(&new.sets, "sets")?;
        if let Some(parent) = new.parent {
            inner.require_product(parent, "parent")?;
        }

        let sku_id = inner.next_sku_id(&new.source_organization);
        let product = Product {
            id: ProductId::new(),
            sku: new.sku,
            sku_id: Some(sku_id),
            name: new.name,
            description: new.description,
            logo: new.logo,
            movie: new.movie,
            source_organization: new.source_organization,
            product_type: new.product_type,
            price: new.price,
            price_currency: new.price_currency,
            tax_percentage: new.tax_percentage,
            requires_appointment: new.requires_appointment,
            calendar: new.calendar,
            documents: new.documents,
            images: new.images,
            external_docs: new.external_docs,
            catalogue: new.catalogue,
            groups: new.groups,
            parent: new.parent,
            variations: Vec::new(),
            grouped_products: new.grouped_products,
            sets: new.sets,
            offers: Vec::new(),
            created: Utc::now(),
            updated: None,
        };
        debug!(id = %product.id, ty = product.product_type.as_str(), "creating product");
        inner.link_product(&product);
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn patch(&self, id: ProductId, patch: ProductPatch) -> OptStoreResult<Product> {
        let mut inner = self.inner.write().await;
        if !inner.products.contains_key(&id) {
            return Ok(None);
        }

        // Resolve and cycle-check everything up front so a failing patch
        // leaves the store untouched.
        if let Some(catalogue) = patch.catalogue {
            inner.require_catalogue(catalogue, "catalogue")?;
        }
        if let Some(groups) = &patch.groups {
            inner.require_groups(groups, "groups")?;
        }
        if let Some(members) = &patch.grouped_products {
            inner.require_products(members, "grouped_products")?;
            if members.contains(&id) {
                return Err(self_membership(id));
            }
        }
        if let Some(sets) = &patch.sets {
            inner.require_products(sets, "sets")?;
            if sets.contains(&id) {
                return Err(self_membership(id));
            }
        }
        if let Field::Present(Some(parent)) = patch.parent {
            inner.require_product(parent, "parent")?;
            inner.check_parent_cycle(id, parent)?;
        }

        move_catalogue(&mut inner, id, patch.catalogue);
        replace_groups(&mut inner, id, patch.groups);
        reparent(&mut inner, id, &patch.parent);
        replace_members(&mut inner, id, patch.grouped_products);
        replace_sets(&mut inner, id, patch.sets);

        let Some(product) = inner.products.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(sku) = patch.sku {
            product.sku = Some(sku);
        }
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Field::Present(description) = patch.description {
            product.description = description;
        }
        if let Field::Present(logo) = patch.logo {
            product.logo = logo;
        }
        if let Field::Present(movie) = patch.movie {
            product.movie = movie;
        }
        if let Some(org) = patch.source_organization {
            product.source_organization = org;
        }
        if let Some(ty) = patch.product_type {
            product.product_type = ty;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(currency) = patch.price_currency {
            product.price_currency = currency;
        }
        if let Some(tax_percentage) = patch.tax_percentage {
            product.tax_percentage = tax_percentage;
        }
        if let Some(requires_appointment) = patch.requires_appointment {
            product.requires_appointment = requires_appointment;
        }
        if let Field::Present(calendar) = patch.calendar {
            product.calendar = calendar;
        }
        if let Some(documents) = patch.documents {
            product.documents = documents;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(external_docs) = patch.external_docs {
            product.external_docs = external_docs;
        }
        product.updated = touched();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> OptStoreResult<()> {
        let mut inner = self.inner.write().await;
        let Some(product) = inner.products.remove(&id) else {
            return Ok(None);
        };
        inner.unlink_product(&product);
        Ok(Some(()))
    }
}

fn self_membership(id: ProductId) -> Report<StoreError> {
    Report::new(StoreError::Integrity(
        "a product cannot be a member of its own set",
    ))
    .attach(id.to_string())
}

fn move_catalogue(
    inner: &mut StoreInner,
    id: ProductId,
    target: Option<pdc_core::id::CatalogueId>,
) {
    let Some(target) = target else { return };
    let Some(current) = inner.products.get(&id).map(|product| product.catalogue) else {
        return;
    };
    if current == target {
        return;
    }
    if let Some(old) = inner.catalogues.get_mut(&current) {
        remove_id(&mut old.products, &id);
    }
    if let Some(new) = inner.catalogues.get_mut(&target) {
        push_unique(&mut new.products, id);
    }
    if let Some(product) = inner.products.get_mut(&id) {
        product.catalogue = target;
    }
}

fn replace_groups(
    inner: &mut StoreInner,
    id: ProductId,
    groups: Option<Vec<pdc_core::id::GroupId>>,
) {
    let Some(groups) = groups else { return };
    let Some(old) = inner.products.get(&id).map(|product| product.groups.clone()) else {
        return;
    };
    for removed in old.iter().filter(|group| !groups.contains(group)) {
        if let Some(group) = inner.groups.get_mut(removed) {
            remove_id(&mut group.products, &id);
        }
    }
    for added in groups.iter().filter(|group| !old.contains(group)) {
        if let Some(group) = inner.groups.get_mut(added) {
            push_unique(&mut group.products, id);
        }
    }
    if let Some(product) = inner.products.get_mut(&id) {
        product.groups = groups;
    }
}

fn reparent(inner: &mut StoreInner, id: ProductId, parent: &Field<ProductId>) {
    let Field::Present(target) = *parent else {
        return;
    };
    let Some(current) = inner.products.get(&id).map(|product| product.parent) else {
        return;
    };
    if current == target {
        return;
    }
    if let Some(current) = current
        && let Some(old) = inner.products.get_mut(&current)
    {
        remove_id(&mut old.variations, &id);
    }
    if let Some(target) = target
        && let Some(new) = inner.products.get_mut(&target)
    {
        push_unique(&mut new.variations, id);
    }
    if let Some(product) = inner.products.get_mut(&id) {
        product.parent = target;
    }
}

fn replace_members(inner: &mut StoreInner, id: ProductId, members: Option<Vec<ProductId>>) {
    let Some(members) = members else { return };
    let Some(old) = inner
        .products
        .get(&id)
        .map(|product| product.grouped_products.clone())
    else {
        return;
    };
    for removed in old.iter().filter(|member| !members.contains(member)) {
        if let Some(member) = inner.products.get_mut(removed) {
            remove_id(&mut member.sets, &id);
        }
    }
    for added in members.iter().filter(|member| !old.contains(member)) {
        if let Some(member) = inner.products.get_mut(added) {
            push_unique(&mut member.sets, id);
        }
    }
    if let Some(product) = inner.products.get_mut(&id) {
        product.grouped_products = members;
    }
}

fn replace_sets(inner: &mut StoreInner, id: ProductId, sets: Option<Vec<ProductId>>) {
    let Some(sets) = sets else { return };
    let Some(old) = inner.products.get(&id).map(|product| product.sets.clone()) else {
        return;
    };
    for removed in old.iter().filter(|set| !sets.contains(set)) {
        if let Some(set) = inner.products.get_mut(removed) {
            remove_id(&mut set.grouped_products, &id);
        }
    }
    for added in sets.iter().filter(|set| !old.contains(set)) {
        if let Some(set) = inner.products.get_mut(added) {
            push_unique(&mut set.grouped_products, id);
        }
    }
    if let Some(product) = inner.products.get_mut(&id) {
        product.sets = sets;
    }
}
