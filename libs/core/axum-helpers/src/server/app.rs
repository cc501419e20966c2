use super::shutdown::{ShutdownCoordinator, shutdown_signal};
use crate::errors::handlers::not_found;
use crate::http::{create_permissive_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wrap `apis` with API documentation and the cross-cutting layers.
///
/// - `apis` is nested under `/api`; its state must already be applied
/// - `root` is merged at the top level, e.g. [`health_router`](super::health_router)
/// - OpenAPI JSON at `/api-docs/openapi.json`, viewers at `/swagger-ui`,
///   `/redoc`, `/rapidoc` and `/scalar`
/// - JSON 404 for unmatched routes
///
/// Every route, `root` included, gets request tracing, security headers,
/// open CORS and response compression.
pub fn create_router<T>(apis: Router, root: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_permissive_cors_layer())
        .layer(CompressionLayer::new())
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup` within `shutdown_timeout`.
///
/// In-flight requests are drained before the server future returns. `cleanup`
/// also runs when the server stops on an error.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let signal_task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            coordinator.shutdown();
        })
    };

    let cleanup_task = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator.wait().await;
            info!("Running cleanup (timeout: {:?})", shutdown_timeout);
            match tokio::time::timeout(shutdown_timeout, cleanup).await {
                Ok(()) => info!("Cleanup completed"),
                Err(_) => warn!("Cleanup exceeded {:?}, continuing shutdown", shutdown_timeout),
            }
        })
    };

    let graceful = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait().await }
    };

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(graceful)
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    coordinator.shutdown();
    signal_task.abort();
    cleanup_task.await.ok();

    info!("Server stopped");
    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn app() -> Router {
        create_router::<EmptyDoc>(
            Router::new().route("/ping", get(|| async { "pong" })),
            Router::new().route("/live", get(|| async { "ok" })),
        )
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let response = app()
            .oneshot(Request::builder().uri("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"pong");
    }

    #[tokio::test]
    async fn test_root_routes_get_layers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/live")
                    .header("origin", "https://storefront.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "No route for GET /nope");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
