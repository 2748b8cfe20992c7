use axum::Router;
use dotenv::dotenv;
use error_stack::ResultExt;
use error_stack::fmt::ColorMode;
use pdc_repository::MemoryStore;
use pdc_routes::state::AppState;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app::{AppError, AppProperties, AppResult};

mod app;

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() {
    match try_main().await {
        Ok(_) => info!("catalogue service shutting down"),
        Err(e) => {
            error!("catalogue service exited with error: {e:?}");
        }
    }
}

fn init_logging() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("PDC_LOG"))
        .init();
}

async fn try_main() -> AppResult<()> {
    init_logging();

    if let Err(e) = dotenv() {
        warn!("failed to load .env file: {e}");
    }

    let store = MemoryStore::new();
    if seed_enabled() {
        if pdc_repository::seed::seed(&store)
            .await
            .change_context(AppError)?
        {
            info!("loaded the sample marriage catalogue");
        }
    } else {
        info!("seeding disabled, starting with an empty store");
    }

    app::run(build_routes(store), AppProperties { port: port() }).await
}

fn build_routes(store: MemoryStore) -> Router {
    debug!("building routes..");
    pdc_routes::routes::build(AppState::new_with_metrics(store))
}

/// Seeding is on unless PDC_SEED is explicitly set to "false".
fn seed_enabled() -> bool {
    std::env::var("PDC_SEED").ok().is_none_or(|v| v != "false")
}

fn port() -> u16 {
    std::env::var("PDC_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
