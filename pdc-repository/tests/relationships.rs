use optional_field::Field;
use pdc_core::model::{GroupPatch, NewGroup, ProductPatch};
use pdc_core::repository::{
    CatalogueRepository, GroupRepository, OfferRepository, ProductRepository, TaxRepository,
};
use pdc_repository::MemoryStore;

mod common;

fn empty_product_patch() -> ProductPatch {
    ProductPatch {
        sku: None,
        name: None,
        description: Field::Missing,
        logo: Field::Missing,
        movie: Field::Missing,
        source_organization: None,
        product_type: None,
        price: None,
        price_currency: None,
        tax_percentage: None,
        requires_appointment: None,
        calendar: Field::Missing,
        documents: None,
        images: None,
        external_docs: None,
        catalogue: None,
        groups: None,
        parent: Field::Missing,
        grouped_products: None,
        sets: None,
    }
}

#[tokio::test]
async fn set_membership_is_symmetric() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let member = common::product(&store, "Ambtenaar", catalogue).await;

    let mut new_set = common::new_product("Trouwen / Partnerschap", catalogue);
    new_set.grouped_products = vec![member];
    let set = ProductRepository::create(&store, new_set).await.unwrap();

    assert_eq!(vec![member], set.grouped_products);
    let member = ProductRepository::get(&store, member)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vec![set.id], member.sets);
}

#[tokio::test]
async fn joining_a_set_from_the_inverse_side_is_symmetric_too() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let set = common::product(&store, "Trouwen / Partnerschap", catalogue).await;

    let mut new_member = common::new_product("Trouwambtenaar", catalogue);
    new_member.sets = vec![set];
    let member = ProductRepository::create(&store, new_member).await.unwrap();

    let set = ProductRepository::get(&store, set).await.unwrap().unwrap();
    assert_eq!(vec![member.id], set.grouped_products);
}

#[tokio::test]
async fn parenting_registers_the_variation() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let parent = common::product(&store, "Trouwambtenaar", catalogue).await;

    let mut new_variation = common::new_product("Dhr Erik Hendrik", catalogue);
    new_variation.parent = Some(parent);
    let variation = ProductRepository::create(&store, new_variation)
        .await
        .unwrap();

    let parent = ProductRepository::get(&store, parent)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vec![variation.id], parent.variations);
}

#[tokio::test]
async fn reparenting_removes_the_old_variation_entry() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let old_parent = common::product(&store, "Trouwambtenaar", catalogue).await;
    let new_parent = common::product(&store, "Locatie", catalogue).await;

    let mut new_variation = common::new_product("Dhr Erik Hendrik", catalogue);
    new_variation.parent = Some(old_parent);
    let variation = ProductRepository::create(&store, new_variation)
        .await
        .unwrap();

    let mut patch = empty_product_patch();
    patch.parent = Field::Present(Some(new_parent));
    ProductRepository::patch(&store, variation.id, patch)
        .await
        .unwrap()
        .unwrap();

    let old_parent = ProductRepository::get(&store, old_parent)
        .await
        .unwrap()
        .unwrap();
    assert!(old_parent.variations.is_empty());
    let new_parent = ProductRepository::get(&store, new_parent)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vec![variation.id], new_parent.variations);
}

#[tokio::test]
async fn clearing_the_parent_removes_the_variation_entry() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let parent = common::product(&store, "Trouwambtenaar", catalogue).await;

    let mut new_variation = common::new_product("Dhr Erik Hendrik", catalogue);
    new_variation.parent = Some(parent);
    let variation = ProductRepository::create(&store, new_variation)
        .await
        .unwrap();

    let mut patch = empty_product_patch();
    patch.parent = Field::Present(None);
    let patched = ProductRepository::patch(&store, variation.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(None, patched.parent);
    let parent = ProductRepository::get(&store, parent)
        .await
        .unwrap()
        .unwrap();
    assert!(parent.variations.is_empty());
}

#[tokio::test]
async fn a_parent_cycle_is_rejected() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let grandparent = common::product(&store, "Trouwambtenaar", catalogue).await;

    let mut new_child = common::new_product("Dhr Erik Hendrik", catalogue);
    new_child.parent = Some(grandparent);
    let child = ProductRepository::create(&store, new_child).await.unwrap();

    // Trying to hang the grandparent below its own descendant must fail and
    // leave the chain untouched.
    let mut patch = empty_product_patch();
    patch.parent = Field::Present(Some(child.id));
    let err = ProductRepository::patch(&store, grandparent, patch)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ancestor"));

    let grandparent = ProductRepository::get(&store, grandparent)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(None, grandparent.parent);
}

#[tokio::test]
async fn a_product_cannot_join_its_own_set() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;

    let mut patch = empty_product_patch();
    patch.grouped_products = Some(vec![product]);
    let err = ProductRepository::patch(&store, product, patch)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("member of its own set"));

    let mut patch = empty_product_patch();
    patch.sets = Some(vec![product]);
    let err = ProductRepository::patch(&store, product, patch)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("member of its own set"));

    let product = ProductRepository::get(&store, product).await.unwrap().unwrap();
    assert!(product.grouped_products.is_empty());
    assert!(product.sets.is_empty());
}

#[tokio::test]
async fn group_membership_is_symmetric() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let group = GroupRepository::create(
        &store,
        NewGroup {
            name: "Trouwproducten".to_owned(),
            description: None,
            logo: None,
            source_organization: "002220647".to_owned(),
            catalogue,
        },
    )
    .await
    .unwrap();

    let mut new_product = common::new_product("Trouwen / Partnerschap", catalogue);
    new_product.groups = vec![group.id];
    let product = ProductRepository::create(&store, new_product).await.unwrap();

    let group = GroupRepository::get(&store, group.id).await.unwrap().unwrap();
    assert_eq!(vec![product.id], group.products);

    let mut patch = empty_product_patch();
    patch.groups = Some(Vec::new());
    ProductRepository::patch(&store, product.id, patch)
        .await
        .unwrap()
        .unwrap();
    let group = GroupRepository::get(&store, group.id).await.unwrap().unwrap();
    assert!(group.products.is_empty());
}

#[tokio::test]
async fn moving_a_group_reassigns_the_catalogue_links() {
    let store = MemoryStore::new();
    let source = common::catalogue(&store).await;
    let target = common::catalogue(&store).await;
    let group = GroupRepository::create(
        &store,
        NewGroup {
            name: "Ceremonies".to_owned(),
            description: None,
            logo: None,
            source_organization: "002220647".to_owned(),
            catalogue: source,
        },
    )
    .await
    .unwrap();

    let patch = GroupPatch {
        name: None,
        description: Field::Missing,
        logo: Field::Missing,
        source_organization: None,
        catalogue: Some(target),
    };
    let moved = GroupRepository::patch(&store, group.id, patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(target, moved.catalogue);

    let source = CatalogueRepository::get(&store, source).await.unwrap().unwrap();
    assert!(source.groups.is_empty());
    let target = CatalogueRepository::get(&store, target).await.unwrap().unwrap();
    assert_eq!(vec![group.id], target.groups);
}

#[tokio::test]
async fn offer_creation_registers_on_product_and_taxes() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let tax = TaxRepository::create(&store, common::new_tax()).await.unwrap();

    let offer = OfferRepository::create(&store, common::new_offer(product, vec![tax.id]))
        .await
        .unwrap();

    let product = ProductRepository::get(&store, product).await.unwrap().unwrap();
    assert_eq!(vec![offer.id], product.offers);
    let tax = TaxRepository::get(&store, tax.id).await.unwrap().unwrap();
    assert_eq!(vec![offer.id], tax.offers);
}

#[tokio::test]
async fn an_offer_for_an_unknown_product_is_a_reference_error() {
    let store = MemoryStore::new();
    let err = OfferRepository::create(
        &store,
        common::new_offer(pdc_core::id::ProductId::new(), Vec::new()),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("unknown product"));
}

#[tokio::test]
async fn patching_an_offer_cannot_invert_the_availability_window() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let offer = OfferRepository::create(&store, common::new_offer(product, Vec::new()))
        .await
        .unwrap();

    use chrono::TimeZone;
    let patch = pdc_core::model::OfferPatch {
        name: None,
        description: Field::Missing,
        price: None,
        price_currency: None,
        offered_by: None,
        availability_starts: None,
        availability_ends: Some(chrono::Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        tax_percentage: Field::Missing,
        eligible_customer_types: None,
        taxes: None,
    };
    let err = OfferRepository::patch(&store, offer.id, patch)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("availability_starts"));
}

#[tokio::test]
async fn product_prices_do_not_leak_into_existing_offers() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let offer = OfferRepository::create(&store, common::new_offer(product, Vec::new()))
        .await
        .unwrap();

    let mut patch = empty_product_patch();
    patch.price = Some(common::money("999.99"));
    ProductRepository::patch(&store, product, patch)
        .await
        .unwrap()
        .unwrap();

    let offer = OfferRepository::get(&store, offer.id).await.unwrap().unwrap();
    assert_eq!(common::money("627.00"), offer.price);
}

#[tokio::test]
async fn sku_ids_count_up_per_organization() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;

    let first = ProductRepository::create(&store, common::new_product("A", catalogue))
        .await
        .unwrap();
    let second = ProductRepository::create(&store, common::new_product("B", catalogue))
        .await
        .unwrap();
    let mut other_org = common::new_product("C", catalogue);
    other_org.source_organization = "123456789".to_owned();
    let third = ProductRepository::create(&store, other_org).await.unwrap();

    assert_eq!(Some(1), first.sku_id);
    assert_eq!(Some(2), second.sku_id);
    assert_eq!(Some(1), third.sku_id);
}
