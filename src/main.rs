use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use co2_predictor::config::ServiceConfig;
use co2_predictor::form::FormService;
use co2_predictor::model::{LinearModel, Predictor};
use co2_predictor::page::INDEX_HTML;
use co2_predictor::types::{FeatureRecord, PredictionOut};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    form: Arc<FormService>,
}

// ---------- Handlers ----------

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn predict(
    State(state): State<AppState>,
    Json(record): Json<FeatureRecord>,
) -> Result<Json<PredictionOut>, (StatusCode, Json<serde_json::Value>)> {
    // Debug signal so we can confirm what the form actually sent
    if std::env::var("LOG_PRED").ok().as_deref() == Some("1") {
        let named = record.named();
        let sample: Vec<String> = named
            .iter()
            .map(|(name, value)| format!("{}={:.3}", name, value))
            .collect();
        tracing::info!("recv [{}]", sample.join(", "));
    }

    state.form.on_submit(&record).map(Json).map_err(|e| {
        tracing::warn!("prediction failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ServiceConfig::from_env();

    let (mdl, feat_list) = LinearModel::load(&cfg.model_path)?;
    // Warmup forward with a zero row to fail fast on a bad artifact
    let _ = mdl.predict(&[vec![0.0; mdl.in_dim()]])?;
    tracing::info!("warmup forward ok");
    tracing::info!(
        "loaded model from {}; feat_list[{}]: {:?}",
        cfg.model_path.display(),
        feat_list.len(),
        &feat_list
    );

    let state = AppState {
        form: Arc::new(FormService::new(Arc::new(mdl), Arc::new(feat_list))),
    };

    let app = axum::Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
