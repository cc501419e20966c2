//! Root greeting and readiness probe

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

async fn greeting() -> &'static str {
    "Hello from Shop API"
}

/// 503 until MongoDB answers a ping
async fn ready(State(state): State<AppState>) -> Response {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        database::mongodb::ping(&state.db)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}

/// `GET /` and `GET /ready`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/ready", get(ready))
        .with_state(state)
}
