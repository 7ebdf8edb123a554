use crate::catalog::PageNumber;
use crate::config::Config;
use crate::error::AppError;
use crate::navigation::POPULAR_PATH;
use crate::render;
use crate::tmdb::{CatalogApi, TmdbClient};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub image_base: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PopularQuery {
    pub page: Option<String>,
}

impl PopularQuery {
    /// Absent means the first page; anything else goes through the integer parser as-is.
    pub fn page_number(&self) -> Result<PageNumber, AppError> {
        match self.page.as_deref() {
            None => Ok(PageNumber::default()),
            Some(raw) => raw.parse().map_err(|source| AppError::InvalidPage {
                raw: raw.to_string(),
                source,
            }),
        }
    }
}

pub async fn run_server(config: Config) -> Result<()> {
    let catalog: Arc<dyn CatalogApi> =
        Arc::new(TmdbClient::new(&config).context("Failed to build TMDB client")?);
    info!("Using TMDB API at {}", config.tmdb_api_base);

    let state = AppState {
        catalog,
        image_base: config.image_base.clone(),
    };
    let app = build_router(state);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(POPULAR_PATH, get(popular))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn index() -> Redirect {
    Redirect::to(POPULAR_PATH)
}

async fn popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Html<String>, AppError> {
    let page = query.page_number()?;
    let movies = state.catalog.fetch_popular(page).await?;
    info!(
        "Rendering page {} with {} movies",
        page,
        movies.results.len()
    );
    Ok(Html(
        render::popular_page(&movies, &state.image_base).into_string(),
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
