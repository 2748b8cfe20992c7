use pdc_core::model::NewGroup;
use pdc_core::repository::{
    CatalogueRepository, CustomerTypeRepository, GroupRepository, OfferRepository,
    ProductRepository, TaxRepository,
};
use pdc_repository::MemoryStore;

mod common;

#[tokio::test]
async fn deleting_a_catalogue_takes_its_groups_and_products_with_it() {
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
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let offer = OfferRepository::create(&store, common::new_offer(product, Vec::new()))
        .await
        .unwrap();

    assert_eq!(
        Some(()),
        CatalogueRepository::delete(&store, catalogue).await.unwrap()
    );

    assert!(GroupRepository::get(&store, group.id).await.unwrap().is_none());
    assert!(ProductRepository::get(&store, product).await.unwrap().is_none());
    assert!(OfferRepository::get(&store, offer.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_a_catalogue_unlinks_its_groups_from_outside_products() {
    let store = MemoryStore::new();
    let doomed = common::catalogue(&store).await;
    let surviving = common::catalogue(&store).await;
    let group = GroupRepository::create(
        &store,
        NewGroup {
            name: "Trouwproducten".to_owned(),
            description: None,
            logo: None,
            source_organization: "002220647".to_owned(),
            catalogue: doomed,
        },
    )
    .await
    .unwrap();
    // The product lives in another catalogue, so it outlives the cascade.
    let mut new_product = common::new_product("Trouwen / Partnerschap", surviving);
    new_product.groups = vec![group.id];
    let product = ProductRepository::create(&store, new_product).await.unwrap();

    CatalogueRepository::delete(&store, doomed).await.unwrap().unwrap();

    let product = ProductRepository::get(&store, product.id)
        .await
        .unwrap()
        .unwrap();
    assert!(product.groups.is_empty());
}

#[tokio::test]
async fn deleting_a_product_cascades_to_its_offers_only() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let tax = TaxRepository::create(&store, common::new_tax()).await.unwrap();
    let offer = OfferRepository::create(&store, common::new_offer(product, vec![tax.id]))
        .await
        .unwrap();

    ProductRepository::delete(&store, product).await.unwrap().unwrap();

    assert!(OfferRepository::get(&store, offer.id).await.unwrap().is_none());
    // the tax survives, with the dangling offer link cleaned up
    let tax = TaxRepository::get(&store, tax.id).await.unwrap().unwrap();
    assert!(tax.offers.is_empty());
    let catalogue = CatalogueRepository::get(&store, catalogue).await.unwrap().unwrap();
    assert!(catalogue.products.is_empty());
}

#[tokio::test]
async fn deleting_a_parent_orphans_its_variations_gracefully() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let parent = common::product(&store, "Trouwambtenaar", catalogue).await;
    let mut new_variation = common::new_product("Dhr Erik Hendrik", catalogue);
    new_variation.parent = Some(parent);
    let variation = ProductRepository::create(&store, new_variation)
        .await
        .unwrap();

    ProductRepository::delete(&store, parent).await.unwrap().unwrap();

    let variation = ProductRepository::get(&store, variation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(None, variation.parent);
}

#[tokio::test]
async fn deleting_a_set_member_updates_the_owning_set() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let member = common::product(&store, "Trouwambtenaar", catalogue).await;
    let mut new_set = common::new_product("Trouwen / Partnerschap", catalogue);
    new_set.grouped_products = vec![member];
    let set = ProductRepository::create(&store, new_set).await.unwrap();

    ProductRepository::delete(&store, member).await.unwrap().unwrap();

    let set = ProductRepository::get(&store, set.id).await.unwrap().unwrap();
    assert!(set.grouped_products.is_empty());
}

#[tokio::test]
async fn deleting_a_group_leaves_its_products_alone() {
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

    GroupRepository::delete(&store, group.id).await.unwrap().unwrap();

    let product = ProductRepository::get(&store, product.id)
        .await
        .unwrap()
        .unwrap();
    assert!(product.groups.is_empty());
    let catalogue = CatalogueRepository::get(&store, catalogue).await.unwrap().unwrap();
    assert!(catalogue.groups.is_empty());
    assert_eq!(vec![product.id], catalogue.products);
}

#[tokio::test]
async fn deleting_a_tax_or_customer_type_unlinks_its_offers() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;
    let tax = TaxRepository::create(&store, common::new_tax()).await.unwrap();
    let customer_type = CustomerTypeRepository::create(
        &store,
        pdc_core::model::NewCustomerType {
            name: "Inwoner".to_owned(),
            description: "Inwoners van de gemeente".to_owned(),
        },
    )
    .await
    .unwrap();

    let mut new_offer = common::new_offer(product, vec![tax.id]);
    new_offer.eligible_customer_types = vec![customer_type.id];
    let offer = OfferRepository::create(&store, new_offer).await.unwrap();

    TaxRepository::delete(&store, tax.id).await.unwrap().unwrap();
    CustomerTypeRepository::delete(&store, customer_type.id)
        .await
        .unwrap()
        .unwrap();

    let offer = OfferRepository::get(&store, offer.id).await.unwrap().unwrap();
    assert!(offer.taxes.is_empty());
    assert!(offer.eligible_customer_types.is_empty());
}

#[tokio::test]
async fn deleting_something_twice_reports_not_found() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    let product = common::product(&store, "Trouwen / Partnerschap", catalogue).await;

    assert_eq!(
        Some(()),
        ProductRepository::delete(&store, product).await.unwrap()
    );
    assert_eq!(None, ProductRepository::delete(&store, product).await.unwrap());
}
