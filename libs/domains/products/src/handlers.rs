//! HTTP handlers for the Products and Categories APIs

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    DatabaseErrorResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CategoryData, CategoryList, CategoryListResponse, CategoryProducts, CategoryResponse,
    CreateProduct, DeliveryInfo, Product, ProductCreatedResponse, ProductList,
    ProductListResponse, ProductQuery, ProductResponse,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product),
    components(
        schemas(
            Product,
            CreateProduct,
            DeliveryInfo,
            ProductList,
            ProductListResponse,
            ProductResponse,
            ProductCreatedResponse
        ),
        responses(InternalServerErrorResponse, DatabaseErrorResponse, NotFoundResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, get_category),
    components(
        schemas(CategoryList, CategoryListResponse, CategoryProducts, CategoryData, CategoryResponse),
        responses(DatabaseErrorResponse, NotFoundResponse)
    ),
    tags(
        (name = "Categories", description = "Products grouped by category")
    )
)]
pub struct CategoriesApiDoc;

/// Router for `/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{product_id}", get(get_product))
        .with_state(shared_service)
}

/// Router for `/categories`
pub fn categories_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories))
        .route("/{category_name}", get(get_category))
        .with_state(shared_service)
}

/// List products, optionally filtered by name
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "List of products", body = ProductListResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let products = service.list_products(query.search).await?;
    Ok(Json(ProductListResponse {
        data: ProductList { products },
    }))
}

/// Create a new product
///
/// Malformed bodies and missing fields are reported as 500.
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductCreatedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> ProductResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| ProductError::Validation(rejection.body_text()))?;

    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "Product created successfully".to_string(),
            data: product,
        }),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "Products",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(product_id): Path<String>,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_product(&product_id).await?;
    Ok(Json(ProductResponse { data: product }))
}

/// List distinct categories in ascending order
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<CategoryListResponse>> {
    let categories = service.list_categories().await?;
    Ok(Json(CategoryListResponse {
        data: CategoryList { categories },
    }))
}

/// Products in a single category
#[utoipa::path(
    get,
    path = "/{category_name}",
    tag = "Categories",
    params(
        ("category_name" = String, Path, description = "Exact category name")
    ),
    responses(
        (status = 200, description = "Category with its products", body = CategoryResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category_name): Path<String>,
) -> ProductResult<Json<CategoryResponse>> {
    let category = service.products_in_category(&category_name).await?;
    Ok(Json(CategoryResponse {
        data: CategoryData { category },
    }))
}
