use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use pdc_core::Engine;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::metrics;
use crate::state::AppState;

mod catalogues;
mod customer_types;
mod groups;
mod offers;
mod products;
mod responses;
mod suppliers;
mod taxes;

#[cfg(test)]
mod tests;

const SUPPLIER_ROOT_PATH: &str = "/suppliers";
const CATALOGUE_ROOT_PATH: &str = "/catalogues";
const GROUP_ROOT_PATH: &str = "/groups";
const PRODUCT_ROOT_PATH: &str = "/products";
const OFFER_ROOT_PATH: &str = "/offers";
const TAX_ROOT_PATH: &str = "/taxes";
const CUSTOMER_TYPE_ROOT_PATH: &str = "/customer_types";

#[derive(OpenApi)]
#[openapi(
    nest(
        (path = SUPPLIER_ROOT_PATH, api = suppliers::Docs),
        (path = CATALOGUE_ROOT_PATH, api = catalogues::Docs),
        (path = GROUP_ROOT_PATH, api = groups::Docs),
        (path = PRODUCT_ROOT_PATH, api = products::Docs),
        (path = OFFER_ROOT_PATH, api = offers::Docs),
        (path = TAX_ROOT_PATH, api = taxes::Docs),
        (path = CUSTOMER_TYPE_ROOT_PATH, api = customer_types::Docs),
    )
)]
struct ApiDoc;

pub fn build<E: Engine>(app_state: AppState<E>) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes(app_state))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

fn routes<S, E: Engine>(app_state: AppState<E>) -> OpenApiRouter<S> {
    let main_router = OpenApiRouter::new()
        .nest(SUPPLIER_ROOT_PATH, suppliers::router::<E>())
        .nest(CATALOGUE_ROOT_PATH, catalogues::router::<E>())
        .nest(GROUP_ROOT_PATH, groups::router::<E>())
        .nest(PRODUCT_ROOT_PATH, products::router::<E>())
        .nest(OFFER_ROOT_PATH, offers::router::<E>())
        .nest(TAX_ROOT_PATH, taxes::router::<E>())
        .nest(CUSTOMER_TYPE_ROOT_PATH, customer_types::router::<E>());

    let router = if app_state.metrics_enabled {
        info!("metrics enabled, setting up metrics handler");
        let metrics_recorder = metrics::setup_recorder();
        main_router
            .route("/metrics", get(|| async move { metrics_recorder.render() }))
            .route_layer(middleware::from_fn(metrics::track_http))
    } else {
        info!("metrics not enabled, setting up service unavailable metrics handler");
        main_router.route(
            "/metrics",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Metrics endpoint is disabled. Metrics must be enabled and the service restarted",
                )
            }),
        )
    };

    router.with_state(app_state)
}
