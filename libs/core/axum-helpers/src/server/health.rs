use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

/// Liveness payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A named dependency probe. `Err` carries the reason it is unreachable.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Run `checks` concurrently and report each one.
///
/// 200 `{"status": "ready", "<name>": "connected", ...}` when every check
/// passes, otherwise 503 with `"not ready"` and the failing checks marked
/// `"disconnected"`.
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> Response {
    let (names, probes): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(probes).await;

    let mut body = Map::new();
    let mut ready = true;

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(reason) => {
                tracing::error!(check = name, reason = %reason, "Readiness check failed");
                ready = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if ready { "ready" } else { "not ready" }),
    );

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(Value::Object(body))).into_response()
}

async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// `GET /health`; always 200 while the process serves requests.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
