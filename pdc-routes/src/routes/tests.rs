use axum::http::StatusCode;
use axum_test::TestServer;
use pdc_repository::MemoryStore;
use pdc_repository::seed::seed;
use rstest::rstest;
use serde_json::{Value, json};

use crate::routes::build;
use crate::state::AppState;

const UNKNOWN_ID: &str = "01890a5d-ac96-774b-bcce-b302099a8057";

fn server() -> TestServer {
    TestServer::new(build(AppState::new_without_metrics(MemoryStore::new()))).unwrap()
}

async fn seeded_server() -> TestServer {
    let store = MemoryStore::new();
    seed(&store).await.unwrap();
    TestServer::new(build(AppState::new_without_metrics(store))).unwrap()
}

async fn create_catalogue(server: &TestServer) -> Value {
    let response = server
        .post("/catalogues")
        .json(&json!({
            "name": "Gemeente Utrecht",
            "source_organization": "002220647",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

async fn create_product(server: &TestServer, catalogue: &Value, name: &str) -> Value {
    let response = server
        .post("/products")
        .json(&json!({
            "name": name,
            "source_organization": "002220647",
            "type": "simple",
            "price": "627.00",
            "tax_percentage": 21,
            "requires_appointment": false,
            "catalogue": catalogue["id"],
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn seeded_suppliers_are_listed() {
    let server = seeded_server().await;

    let response = server.get("/suppliers").await;

    response.assert_status_ok();
    let suppliers = response.json::<Vec<Value>>();
    assert_eq!(3, suppliers.len());
}

#[tokio::test]
async fn suppliers_can_be_filtered_by_organization() {
    let server = seeded_server().await;

    let response = server
        .get("/suppliers")
        .add_query_param("source_organization", "002220647")
        .await;

    response.assert_status_ok();
    let suppliers = response.json::<Vec<Value>>();
    assert_eq!(1, suppliers.len());
    assert_eq!("Gemeente Utrecht", suppliers[0]["name"]);
}

#[tokio::test]
async fn pagination_limits_the_page() {
    let server = seeded_server().await;

    let response = server.get("/suppliers?page=2&page_size=2").await;

    response.assert_status_ok();
    let suppliers = response.json::<Vec<Value>>();
    assert_eq!(1, suppliers.len());
}

#[tokio::test]
async fn listing_nothing_yields_an_empty_array() {
    let server = server();

    let response = server.get("/products").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn created_supplier_can_be_fetched() {
    let server = server();

    let created = server
        .post("/suppliers")
        .json(&json!({
            "name": "Gemeente Utrecht",
            "kvk": "30280353",
            "source_organization": "002220647",
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let supplier = created.json::<Value>();

    let fetched = server
        .get(&format!("/suppliers/{}", supplier["id"].as_str().unwrap()))
        .await;
    fetched.assert_status_ok();
    assert_eq!(supplier, fetched.json::<Value>());
}

#[tokio::test]
async fn invalid_supplier_reports_every_violation() {
    let server = server();

    let response = server
        .post("/suppliers")
        .json(&json!({
            "name": "",
            "kvk": "30280353",
            "source_organization": "123",
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(2, violations.len());
    assert_eq!("name", violations[0]["field"]);
    assert_eq!("required", violations[0]["constraint"]);
    assert_eq!("source_organization", violations[1]["field"]);
    assert_eq!("length_range", violations[1]["constraint"]);
}

#[tokio::test]
async fn group_without_a_catalogue_is_a_collected_violation() {
    let server = server();

    let response = server
        .post("/groups")
        .json(&json!({
            "name": "",
            "source_organization": "002220647",
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(2, violations.len());
    assert_eq!("name", violations[0]["field"]);
    assert_eq!("required", violations[0]["constraint"]);
    assert_eq!("catalogue", violations[1]["field"]);
    assert_eq!("required", violations[1]["constraint"]);
}

#[rstest]
#[case::supplier("/suppliers", "supplier")]
#[case::catalogue("/catalogues", "catalogue")]
#[case::group("/groups", "group")]
#[case::product("/products", "product")]
#[case::offer("/offers", "offer")]
#[case::tax("/taxes", "tax")]
#[case::customer_type("/customer_types", "customer type")]
#[tokio::test]
async fn fetching_an_unknown_id_is_not_found(#[case] root: &str, #[case] entity: &str) {
    let server = server();

    let response = server.get(&format!("{root}/{UNKNOWN_ID}")).await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(
        format!("the requested {entity} does not exist"),
        body["message"]
    );
}

#[tokio::test]
async fn product_price_is_returned_as_entered() {
    let server = server();
    let catalogue = create_catalogue(&server).await;

    let product = create_product(&server, &catalogue, "Trouwen / Partnerschap").await;

    assert_eq!("627.00", product["price"]);
    assert_eq!("EUR", product["price_currency"]);
    assert_eq!(1, product["sku_id"]);
    assert_eq!("simple", product["type"]);
}

#[tokio::test]
async fn unknown_product_type_is_a_choice_violation() {
    let server = server();
    let catalogue = create_catalogue(&server).await;

    let response = server
        .post("/products")
        .json(&json!({
            "name": "Trouwboekje",
            "source_organization": "002220647",
            "type": "bundle",
            "price": "30.20",
            "tax_percentage": 21,
            "requires_appointment": false,
            "catalogue": catalogue["id"],
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let violations = response.json::<Value>()["violations"].clone();
    assert_eq!("type", violations[0]["field"]);
    assert_eq!("choice", violations[0]["constraint"]);
}

#[tokio::test]
async fn product_with_unknown_catalogue_is_rejected() {
    let server = server();

    let response = server
        .post("/products")
        .json(&json!({
            "name": "Trouwboekje",
            "source_organization": "002220647",
            "type": "simple",
            "price": "30.20",
            "tax_percentage": 21,
            "requires_appointment": false,
            "catalogue": UNKNOWN_ID,
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!("catalogue refers to an unknown catalogue", body["message"]);
}

#[tokio::test]
async fn parent_cycle_is_a_conflict() {
    let server = server();
    let catalogue = create_catalogue(&server).await;
    let parent = create_product(&server, &catalogue, "Locatie").await;

    let child = server
        .post("/products")
        .json(&json!({
            "name": "Stadskantoor",
            "source_organization": "002220647",
            "type": "simple",
            "price": "0.00",
            "tax_percentage": 21,
            "requires_appointment": false,
            "catalogue": catalogue["id"],
            "parent": parent["id"],
        }))
        .await;
    child.assert_status(StatusCode::CREATED);

    let response = server
        .patch(&format!("/products/{}", parent["id"].as_str().unwrap()))
        .json(&json!({ "parent": child.json::<Value>()["id"] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert!(body["message"].as_str().unwrap().contains("ancestor"));
}

#[tokio::test]
async fn deleted_product_is_gone() {
    let server = server();
    let catalogue = create_catalogue(&server).await;
    let product = create_product(&server, &catalogue, "Trouwboekje").await;
    let path = format!("/products/{}", product["id"].as_str().unwrap());

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

    server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn patching_description_to_null_clears_it() {
    let server = server();
    let catalogue = create_catalogue(&server).await;
    let path = format!("/catalogues/{}", catalogue["id"].as_str().unwrap());

    let described = server
        .patch(&path)
        .json(&json!({ "description": "Producten van de gemeente" }))
        .await;
    described.assert_status_ok();
    assert_eq!(
        "Producten van de gemeente",
        described.json::<Value>()["description"]
    );

    let cleared = server.patch(&path).json(&json!({ "description": null })).await;
    cleared.assert_status_ok();
    assert_eq!(Value::Null, cleared.json::<Value>()["description"]);
}

#[tokio::test]
async fn offer_with_inverted_window_is_a_violation() {
    let server = server();
    let catalogue = create_catalogue(&server).await;
    let product = create_product(&server, &catalogue, "Trouwen / Partnerschap").await;

    let response = server
        .post("/offers")
        .json(&json!({
            "name": "Trouwen 2024",
            "price": "627.00",
            "offered_by": "https://www.utrecht.nl",
            "availability_starts": "2024-12-31T00:00:00Z",
            "availability_ends": "2024-01-01T00:00:00Z",
            "product": product["id"],
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let violations = response.json::<Value>()["violations"].clone();
    assert_eq!("availability_starts", violations[0]["field"]);
    assert_eq!("date_order", violations[0]["constraint"]);
}

#[tokio::test]
async fn offer_patch_cannot_invert_the_window() {
    let server = server();
    let catalogue = create_catalogue(&server).await;
    let product = create_product(&server, &catalogue, "Trouwen / Partnerschap").await;

    let created = server
        .post("/offers")
        .json(&json!({
            "name": "Trouwen 2024",
            "price": "627.00",
            "offered_by": "https://www.utrecht.nl",
            "availability_starts": "2024-01-01T00:00:00Z",
            "availability_ends": "2024-12-31T00:00:00Z",
            "product": product["id"],
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let offer = created.json::<Value>();

    let response = server
        .patch(&format!("/offers/{}", offer["id"].as_str().unwrap()))
        .json(&json!({ "availability_ends": "2023-06-01T00:00:00Z" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("availability_starts")
    );
}

#[tokio::test]
async fn products_can_be_filtered_by_group() {
    let server = seeded_server().await;
    let groups = server.get("/groups").await.json::<Vec<Value>>();
    let locaties = groups
        .iter()
        .find(|g| g["name"] == "Trouw Locaties")
        .unwrap();

    let response = server
        .get("/products")
        .add_query_param("group", locaties["id"].as_str().unwrap())
        .await;

    response.assert_status_ok();
    let products = response.json::<Vec<Value>>();
    assert_eq!(4, products.len());
    assert!(products.iter().all(|p| {
        p["groups"]
            .as_array()
            .unwrap()
            .contains(&locaties["id"])
    }));
}

#[tokio::test]
async fn products_can_be_filtered_by_organization_and_sorted_by_type() {
    let server = seeded_server().await;

    let response = server
        .get("/products?source_organization=002220647&sort=type")
        .await;

    response.assert_status_ok();
    let products = response.json::<Vec<Value>>();
    assert_eq!(6, products.len());
    assert!(
        products
            .iter()
            .all(|p| p["source_organization"] == "002220647")
    );
    let types: Vec<&str> = products
        .iter()
        .map(|p| p["type"].as_str().unwrap())
        .collect();
    let mut sorted = types.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, types);
}

#[tokio::test]
async fn disabled_metrics_endpoint_answers_service_unavailable() {
    let server = server();

    let response = server.get("/metrics").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
