//! Loads the sample municipal marriage catalogue: three municipalities as
//! suppliers, their catalogues, and the Utrecht wedding products wired
//! through groups, sets and parent/variation links.

use pdc_core::error::StoreResult;
use pdc_core::id::{CatalogueId, GroupId, ProductId};
use pdc_core::model::{NewCatalogue, NewGroup, NewProduct, NewSupplier};
use pdc_core::money::Money;
use pdc_core::product_type::ProductType;
use pdc_core::repository::{
    CatalogueRepository, GroupRepository, ProductRepository, SupplierRepository,
};
use tracing::info;

use crate::store::MemoryStore;

/// Populates an empty store with the sample data. A store that already
/// holds anything is left untouched, so seeding is idempotent.
pub async fn seed(store: &MemoryStore) -> StoreResult<bool> {
    if !store.inner.read().await.is_empty() {
        info!("store is not empty, skipping seed");
        return Ok(false);
    }

    supplier(store, "Gemeente 's-Hertogenbosch", "17278704", "001709124").await?;
    supplier(store, "Gemeente Eindhoven", "17272738", "001902763").await?;
    supplier(store, "Gemeente Utrecht", "30280353", "002220647").await?;

    catalogue(store, "Vereniging Nederlandse Gemeenten", "00000000").await?;
    let denbosch = catalogue(store, "Gemeente 's-Hertogenbosch", "001709124").await?;
    let eindhoven = catalogue(store, "Gemeente Eindhoven", "001902763").await?;
    let utrecht = catalogue(store, "Gemeente Utrecht", "002220647").await?;

    group(
        store,
        denbosch,
        "001709124",
        "Burgerzaken",
        "Producten en diensten binnen burgerzaken",
    )
    .await?;
    group(
        store,
        eindhoven,
        "001902763",
        "Burgerzaken",
        "Producten en diensten binnen burgerzaken",
    )
    .await?;
    let trouwproducten = group(
        store,
        utrecht,
        "002220647",
        "Trouwproducten",
        "Producten en diensten binnen het trouw proces",
    )
    .await?;
    let trouw_ambtenaren = group(
        store,
        utrecht,
        "002220647",
        "Trouw Ambtenaren",
        "Door wie wilt u worden getrouwd?",
    )
    .await?;
    let trouw_locaties = group(
        store,
        utrecht,
        "002220647",
        "Trouw Locaties",
        "Waar wilt u trouwen?",
    )
    .await?;
    let ceremonies = group(
        store,
        utrecht,
        "002220647",
        "Ceremonies",
        "Verschillende ceremonies voor uw huwelijk / partnerschap",
    )
    .await?;

    let trouwen = ProductRepository::create(
        store,
        NewProduct {
            name: "Trouwen / Partnerschap".to_owned(),
            description: Some("Trouwen".to_owned()),
            product_type: ProductType::Set,
            price: money("627.00"),
            groups: vec![trouwproducten],
            ..base(utrecht, "002220647")
        },
    )
    .await?
    .id;
    let eenvoudig = ProductRepository::create(
        store,
        NewProduct {
            name: "Eenvoudig trouwen".to_owned(),
            description: Some("Eenvoudig trouwen".to_owned()),
            product_type: ProductType::Set,
            price: money("163.00"),
            groups: vec![trouwproducten, ceremonies],
            ..base(utrecht, "002220647")
        },
    )
    .await?
    .id;
    let gratis = ProductRepository::create(
        store,
        NewProduct {
            name: "Gratis Trouwen".to_owned(),
            description: Some("Gratis huwelijk".to_owned()),
            product_type: ProductType::Set,
            groups: vec![trouwproducten, ceremonies],
            ..base(utrecht, "002220647")
        },
    )
    .await?
    .id;

    let trouwambtenaar = ProductRepository::create(
        store,
        NewProduct {
            name: "Trouwambtenaar".to_owned(),
            description: Some(
                "Een trouwambtenaar heet officieel een buitengewoon ambtenaar van de \
                 burgerlijke stand (babs). U kunt een voorkeur aangeven voor een van hen."
                    .to_owned(),
            ),
            product_type: ProductType::Variable,
            groups: vec![trouwproducten, ceremonies],
            sets: vec![trouwen, eenvoudig, gratis],
            ..base(utrecht, "002220647")
        },
    )
    .await?
    .id;

    officiant(
        store,
        utrecht,
        trouwproducten,
        trouw_ambtenaren,
        trouwambtenaar,
        "Dhr Erik Hendrik",
        "Als Buitengewoon Ambtenaar van de Burgerlijke Stand geef ik, in overleg met het \
         bruidspaar, invulling aan de huwelijksceremonie.",
        "https://utrecht.trouwplanner.online/images/content/ambtenaar/erik.jpg",
        ProductType::Person,
        "0.00",
    )
    .await?;
    officiant(
        store,
        utrecht,
        trouwproducten,
        trouw_ambtenaren,
        trouwambtenaar,
        "Mvr Ike van den Pol",
        "Elkaar het Ja-woord geven, de officiële ceremonie. Een persoonlijke ceremonie, \
         passend bij jullie relatie.",
        "https://utrecht.trouwplanner.online/images/content/ambtenaar/ike.jpg",
        ProductType::Person,
        "0.00",
    )
    .await?;
    officiant(
        store,
        utrecht,
        trouwproducten,
        trouw_ambtenaren,
        trouwambtenaar,
        "Dhr. Rene Gulje",
        "Ik ben Rene Gulje, in 1949 in Amsterdam geboren. Ik studeerde Nederlands aan de \
         UVA en journalistiek aan de HU.",
        "https://utrecht.trouwplanner.online/images/content/ambtenaar/rene.jpg",
        ProductType::Person,
        "0.00",
    )
    .await?;
    officiant(
        store,
        utrecht,
        trouwproducten,
        trouw_ambtenaren,
        trouwambtenaar,
        "Toegewezen Trouwambtenaar",
        "Uw trouwambtenaar wordt toegewezen, over enkele dagen krijgt u bericht van uw \
         toegewezen trouwambtenaar!",
        "https://utrecht.trouwplanner.online/images/content/elements/Trouwambtenaren.png",
        ProductType::Simple,
        "0.00",
    )
    .await?;
    officiant(
        store,
        utrecht,
        trouwproducten,
        trouw_ambtenaren,
        trouwambtenaar,
        "Zelfgekozen BABS",
        "U draagt zelf een trouwambtenaar voor en laat deze voor een dag beëdigen",
        "https://utrecht.trouwplanner.online/images/content/elements/Trouwambtenaren.png",
        ProductType::Simple,
        "150.00",
    )
    .await?;

    let locatie = ProductRepository::create(
        store,
        NewProduct {
            name: "Locatie".to_owned(),
            description: Some(
                "Een trouwlocatie; in Utrecht is er voor elk wat wils. De gemeente Utrecht \
                 heeft een aantal eigen trouwlocaties; het Stadhuis, het Wijkservicecentrum \
                 in Vleuten en het Stadskantoor."
                    .to_owned(),
            ),
            product_type: ProductType::Variable,
            groups: vec![trouwproducten],
            sets: vec![trouwen, eenvoudig, gratis],
            ..base(utrecht, "002220647")
        },
    )
    .await?
    .id;

    location(
        store,
        utrecht,
        trouwproducten,
        trouw_locaties,
        locatie,
        "Stadskantoor",
        "Deze locatie is speciaal voor eenvoudige en gratis huwelijken. De zaal ligt op de \
         6e etage van het Stadskantoor.",
        "https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/Trouwzaal-Stadskantoor-Utrecht.jpg",
    )
    .await?;
    location(
        store,
        utrecht,
        trouwproducten,
        trouw_locaties,
        locatie,
        "Stadhuis kleine zaal",
        "Deze uiterst sfeervolle trouwzaal maakt de dag compleet",
        "https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/kleine-trouwzaal-stadhuis-utrecht.jpg",
    )
    .await?;
    location(
        store,
        utrecht,
        trouwproducten,
        trouw_locaties,
        locatie,
        "Stadhuis grote zaal",
        "Deze uiterst sfeervolle trouwzaal is perfect voor ieder koppel",
        "https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/grote-trouwzaal-stadhuis-utrecht.jpg",
    )
    .await?;
    location(
        store,
        utrecht,
        trouwproducten,
        trouw_locaties,
        locatie,
        "Vrije locatie",
        "Vrije locatie",
        "https://www.utrecht.nl/fileadmin/uploads/documenten/9.digitaalloket/Burgerzaken/grote-trouwzaal-stadhuis-utrecht.jpg",
    )
    .await?;

    ProductRepository::create(
        store,
        NewProduct {
            name: "Trouwboekje".to_owned(),
            description: Some("Een mooi in leer gebonden herinnering aan uw huwelijk".to_owned()),
            product_type: ProductType::Variable,
            price: money("30.20"),
            groups: vec![trouwproducten],
            ..base(utrecht, "002220647")
        },
    )
    .await?;

    info!("seeded the sample marriage catalogue");
    Ok(true)
}

fn money(raw: &str) -> Money {
    raw.parse().unwrap_or_else(|_| Money::zero())
}

fn base(catalogue: CatalogueId, source_organization: &str) -> NewProduct {
    NewProduct {
        sku: None,
        name: String::new(),
        description: None,
        logo: None,
        movie: None,
        source_organization: source_organization.to_owned(),
        product_type: ProductType::Simple,
        price: Money::zero(),
        price_currency: "EUR".to_owned(),
        tax_percentage: 0,
        requires_appointment: false,
        calendar: None,
        documents: Vec::new(),
        images: Vec::new(),
        external_docs: Vec::new(),
        catalogue,
        groups: Vec::new(),
        parent: None,
        grouped_products: Vec::new(),
        sets: Vec::new(),
    }
}

async fn supplier(store: &MemoryStore, name: &str, kvk: &str, org: &str) -> StoreResult<()> {
    SupplierRepository::create(
        store,
        NewSupplier {
            name: name.to_owned(),
            kvk: kvk.to_owned(),
            source_organization: org.to_owned(),
            logo: None,
        },
    )
    .await?;
    Ok(())
}

async fn catalogue(store: &MemoryStore, name: &str, org: &str) -> StoreResult<CatalogueId> {
    let catalogue = CatalogueRepository::create(
        store,
        NewCatalogue {
            name: name.to_owned(),
            description: None,
            logo: None,
            source_organization: org.to_owned(),
        },
    )
    .await?;
    Ok(catalogue.id)
}

async fn group(
    store: &MemoryStore,
    catalogue: CatalogueId,
    org: &str,
    name: &str,
    description: &str,
) -> StoreResult<GroupId> {
    let group = GroupRepository::create(
        store,
        NewGroup {
            name: name.to_owned(),
            description: Some(description.to_owned()),
            logo: None,
            source_organization: org.to_owned(),
            catalogue,
        },
    )
    .await?;
    Ok(group.id)
}

#[allow(clippy::too_many_arguments)]
async fn officiant(
    store: &MemoryStore,
    catalogue: CatalogueId,
    trouwproducten: GroupId,
    trouw_ambtenaren: GroupId,
    parent: ProductId,
    name: &str,
    description: &str,
    logo: &str,
    product_type: ProductType,
    price: &str,
) -> StoreResult<()> {
    ProductRepository::create(
        store,
        NewProduct {
            name: name.to_owned(),
            description: Some(description.to_owned()),
            logo: Some(logo.to_owned()),
            product_type,
            price: money(price),
            groups: vec![trouwproducten, trouw_ambtenaren],
            parent: Some(parent),
            ..base(catalogue, "123456789")
        },
    )
    .await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn location(
    store: &MemoryStore,
    catalogue: CatalogueId,
    trouwproducten: GroupId,
    trouw_locaties: GroupId,
    parent: ProductId,
    name: &str,
    description: &str,
    logo: &str,
) -> StoreResult<()> {
    ProductRepository::create(
        store,
        NewProduct {
            name: name.to_owned(),
            description: Some(description.to_owned()),
            logo: Some(logo.to_owned()),
            groups: vec![trouwproducten, trouw_locaties],
            parent: Some(parent),
            ..base(catalogue, "123456789")
        },
    )
    .await?;
    Ok(())
}
