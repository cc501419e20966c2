//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop services.
//!
//! - **[`server`]**: router assembly with API docs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: `AppError` and the JSON error body every route returns
//!
//! ```ignore
//! use axum_helpers::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes, health_router(app_info!()));
//! create_production_app(app, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_permissive_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};
