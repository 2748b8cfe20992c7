use pdc_core::list::{OrgCriteria, Pagination, ProductCriteria, ProductFilter};
use pdc_core::product_type::ProductType;
use pdc_core::repository::{CatalogueRepository, GroupRepository, ProductRepository};
use pdc_repository::{MemoryStore, seed::seed};

mod common;

#[tokio::test]
async fn seeding_builds_the_marriage_catalogue() {
    let store = MemoryStore::new();
    assert!(seed(&store).await.unwrap());

    let catalogues = CatalogueRepository::list(
        &store,
        OrgCriteria {
            pagination: Pagination::default(),
            source_organization: Some("002220647".to_owned()),
        },
    )
    .await
    .unwrap();
    assert_eq!(1, catalogues.len());
    let utrecht = &catalogues[0];
    assert_eq!("Gemeente Utrecht", utrecht.name);
    assert_eq!(4, utrecht.groups.len());

    let products = ProductRepository::list(&store, ProductCriteria::default())
        .await
        .unwrap();
    let trouwen = products
        .iter()
        .find(|product| product.name == "Trouwen / Partnerschap")
        .unwrap();
    assert_eq!(ProductType::Set, trouwen.product_type);
    assert_eq!("627.00", trouwen.price.to_string());

    // both variable products are members of all three wedding sets
    let trouwambtenaar = products
        .iter()
        .find(|product| product.name == "Trouwambtenaar")
        .unwrap();
    assert_eq!(3, trouwambtenaar.sets.len());
    assert!(trouwen.grouped_products.contains(&trouwambtenaar.id));
    assert_eq!(5, trouwambtenaar.variations.len());
}

#[tokio::test]
async fn seeding_a_non_empty_store_is_a_no_op() {
    let store = MemoryStore::new();
    let catalogue = common::catalogue(&store).await;
    common::product(&store, "Bestaand product", catalogue).await;

    assert!(!seed(&store).await.unwrap());

    let products = ProductRepository::list(&store, ProductCriteria::default())
        .await
        .unwrap();
    assert_eq!(1, products.len());
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate() {
    let store = MemoryStore::new();
    assert!(seed(&store).await.unwrap());
    assert!(!seed(&store).await.unwrap());

    let groups = GroupRepository::list(&store, Pagination::default())
        .await
        .unwrap();
    assert_eq!(6, groups.len());
}

#[tokio::test]
async fn products_can_be_filtered_by_group_and_sorted_by_type() {
    let store = MemoryStore::new();
    seed(&store).await.unwrap();

    let groups = GroupRepository::list(&store, Pagination::default())
        .await
        .unwrap();
    let locaties = groups
        .iter()
        .find(|group| group.name == "Trouw Locaties")
        .unwrap();

    let products = ProductRepository::list(
        &store,
        ProductCriteria {
            pagination: Pagination::default(),
            filter: ProductFilter {
                group: Some(locaties.id),
                source_organization: None,
                sort: None,
            },
        },
    )
    .await
    .unwrap();
    assert_eq!(4, products.len());
    assert!(products.iter().all(|product| product.groups.contains(&locaties.id)));

    let sorted = ProductRepository::list(
        &store,
        ProductCriteria {
            pagination: Pagination::default(),
            filter: ProductFilter {
                group: None,
                source_organization: Some("002220647".to_owned()),
                sort: Some(pdc_core::list::ProductSort::Type),
            },
        },
    )
    .await
    .unwrap();
    let types: Vec<_> = sorted.iter().map(|product| product.product_type.as_str()).collect();
    let mut expected = types.clone();
    expected.sort_unstable();
    assert_eq!(expected, types);
}
