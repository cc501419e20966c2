//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Shop API documentation with the user-scoped wishlist routes
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Products, categories and wishlists",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/categories", api = domain_products::CategoriesApiDoc),
        (path = "/api/wishlist", api = domain_wishlists::ApiDoc)
    )
)]
pub struct ApiDoc;

/// Shop API documentation with the legacy wishlist routes
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Products, categories and wishlists (legacy wishlist routes)",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/categories", api = domain_products::CategoriesApiDoc),
        (path = "/api/wishlist", api = domain_wishlists::LegacyApiDoc)
    )
)]
pub struct LegacyApiDoc;
