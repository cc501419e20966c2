use tower_http::cors::CorsLayer;

/// Any origin, method and header. Credentials are not allowed.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, header},
        routing::get,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_any_origin_is_allowed() {
        let app = Router::new()
            .route("/api/products", get(|| async { "[]" }))
            .layer(create_permissive_cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/products")
                    .header(header::ORIGIN, "https://storefront.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
