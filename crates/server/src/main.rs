use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use server_api::ApiContext;
use shared::protocol::{
    EXPERIENCES_ROUTE, HEALTH_ROUTE, NEWS_ITEMS_ROUTE, PROJECTS_ROUTE, PROJECT_CARDS_ROUTE,
    SKILLS_ROUTE, THEMES_ROUTE,
};
use storage::MemStorage;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, CONFIG_FILE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, config_error) = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    if let Some(error) = config_error {
        warn!(file = CONFIG_FILE, error = %format!("{error:#}"), "ignoring unreadable config file");
    }

    if let Some(dir) = &settings.static_dir {
        if !dir.join("index.html").is_file() {
            warn!(static_dir = %dir.display(), "static dir has no index.html; client routes will 404");
        }
    }

    let state = AppState {
        api: ApiContext::new(MemStorage::seeded()),
        static_dir: settings.static_dir.clone(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.static_dir.clone();
    let router = Router::new()
        .route(HEALTH_ROUTE, get(api::healthz))
        .route(EXPERIENCES_ROUTE, get(api::experiences))
        .route(SKILLS_ROUTE, get(api::skills))
        .route(PROJECT_CARDS_ROUTE, get(api::project_cards))
        .route(NEWS_ITEMS_ROUTE, get(api::news_items))
        .route(PROJECTS_ROUTE, get(api::projects))
        .route(THEMES_ROUTE, get(api::themes))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
