use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use bill_ingest::config::ScrapeConfig;
use bill_ingest::errors::ScrapeError;
use bill_ingest::runtime::cache::CachedPageSource;
use bill_ingest::runtime::fetcher::HttpFetcher;
use bill_ingest::runtime::orchestrator::{scrape_range, ScrapeReport};
use bill_ingest::runtime::store::JsonFileSink;
use serde_json::json;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

struct AppState {
    client: reqwest::Client,
    active_jobs: AtomicUsize,
    total_jobs_started: AtomicUsize,
}

async fn run_job(
    client: reqwest::Client,
    config: &ScrapeConfig,
) -> Result<ScrapeReport, ScrapeError> {
    let pages = CachedPageSource::new(
        Arc::new(HttpFetcher::new(client)),
        config.cache_dir.clone(),
        config.use_cache,
    );
    let sink = JsonFileSink::new(config.output_dir.clone());
    scrape_range(config, &pages, &sink).await
}

async fn handle_scrape(
    State(state): State<Arc<AppState>>,
    Json(config): Json<ScrapeConfig>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Err(err) = config.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "rejected", "error": err.to_string() })),
        );
    }

    state.active_jobs.fetch_add(1, Ordering::SeqCst);
    state.total_jobs_started.fetch_add(1, Ordering::SeqCst);

    let state_for_task = state.clone();
    let handle = tokio::spawn({
        let client = state.client.clone();
        async move {
            match run_job(client, &config).await {
                Ok(report) => tracing::info!(
                    "[Scraper] Job finished: {} completed, {} reserved, {} failed",
                    report.completed,
                    report.reserved,
                    report.failed.len()
                ),
                Err(err) => tracing::error!("[Scraper] Job failed: {}", err),
            }
        }
    });

    tokio::spawn(async move {
        if let Err(err) = handle.await {
            tracing::error!("[Scraper] Job panicked or was cancelled: {}", err);
        }
        state_for_task.active_jobs.fetch_sub(1, Ordering::SeqCst);
    });

    (StatusCode::OK, Json(json!({ "status": "accepted" })))
}

async fn handle_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "activeJobs": state.active_jobs.load(Ordering::SeqCst),
        "totalJobs": state.total_jobs_started.load(Ordering::SeqCst),
    }))
}

async fn handle_health() -> &'static str {
    "ok"
}

async fn serve(client: reqwest::Client) -> Result<(), DynError> {
    let state = Arc::new(AppState {
        client,
        active_jobs: AtomicUsize::new(0),
        total_jobs_started: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/scrape", post(handle_scrape))
        .route("/status", get(handle_status))
        .fallback(handle_health)
        .with_state(state);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("[Scraper] Listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt::init();

    let client = reqwest::Client::new();
    match std::env::args().nth(1) {
        Some(config_path) => {
            let config = ScrapeConfig::load_from_file(&config_path)?;
            let report = run_job(client, &config).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        None => serve(client).await,
    }
}
