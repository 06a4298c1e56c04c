use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use dashboard_api::{dashboard_meta, pie_figure, scatter_figure, ApiContext};
use dataset::Dataset;
use serde::Deserialize;
use shared::{
    domain::{PayloadRange, SiteSelection, ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN},
    error::{ApiError, ErrorCode},
    protocol::{DashboardMeta, PieFigure, ScatterFigure},
};
use tracing::{error, info};

mod config;

use config::{load_settings, prepare_dataset_path};

const INDEX_HTML: &str = include_str!("../static/index.html");
const APP_JS: &str = include_str!("../static/app.js");

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[derive(Debug, Deserialize)]
struct PieQuery {
    site: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScatterQuery {
    site: Option<String>,
    low: Option<f64>,
    high: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let dataset_path = prepare_dataset_path(&settings.dataset_path)?;
    let dataset = Dataset::from_csv_path(&dataset_path).map_err(|err| {
        error!(
            path = %dataset_path.display(),
            %err,
            "failed to load launch CSV; the dashboard cannot start without its dataset"
        );
        err
    })?;
    info!(
        path = %dataset_path.display(),
        records = dataset.len(),
        sites = dataset.sites().len(),
        "launch dataset loaded"
    );

    let state = AppState {
        api: ApiContext::new(dataset),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "dashboard listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/app.js", get(app_js))
        .route("/healthz", get(healthz))
        .route("/api/meta", get(get_meta))
        .route("/api/pie-chart", get(get_pie_chart))
        .route("/api/scatter-chart", get(get_scatter_chart))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_meta(State(state): State<Arc<AppState>>) -> Json<DashboardMeta> {
    Json(dashboard_meta(&state.api))
}

async fn get_pie_chart(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PieQuery>,
) -> Json<PieFigure> {
    let selection = site_selection(q.site.as_deref());
    Json(pie_figure(&state.api, &selection))
}

async fn get_scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ScatterQuery>,
) -> Result<Json<ScatterFigure>, (StatusCode, Json<ApiError>)> {
    let selection = site_selection(q.site.as_deref());
    let range = PayloadRange::new(
        q.low.unwrap_or(PAYLOAD_SLIDER_MIN),
        q.high.unwrap_or(PAYLOAD_SLIDER_MAX),
    );
    let figure = scatter_figure(&state.api, &selection, &range).map_err(|e| {
        let status = match e.code {
            ErrorCode::Validation => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(e))
    })?;
    Ok(Json(figure))
}

fn site_selection(site: Option<&str>) -> SiteSelection {
    SiteSelection::from_param(site.unwrap_or(ALL_SITES))
}
