//! HTTP handlers for the Wishlist API
//!
//! Two alternative route sets exist. The user-scoped set addresses a
//! wishlist through its owner; the legacy set works on whole wishlist
//! documents. An application mounts exactly one of them.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use axum_helpers::errors::responses::{
    DatabaseErrorResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{WishlistError, WishlistResult};
use crate::models::{
    AddToWishlist, CreateWishlist, MessageResponse, Wishlist, WishlistList, WishlistListResponse,
    WishlistProductsResponse, WishlistResponse,
};
use crate::repository::WishlistRepository;
use crate::service::WishlistService;

/// OpenAPI documentation for the user-scoped Wishlist API
#[derive(OpenApi)]
#[openapi(
    paths(get_user_wishlist, add_to_wishlist, remove_from_wishlist),
    components(
        schemas(Wishlist, AddToWishlist, WishlistProductsResponse, WishlistResponse, MessageResponse),
        responses(InternalServerErrorResponse, DatabaseErrorResponse, NotFoundResponse)
    ),
    tags(
        (name = "Wishlist", description = "Per-user wishlists")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the legacy Wishlist API
#[derive(OpenApi)]
#[openapi(
    paths(list_wishlists, create_wishlist, delete_wishlist),
    components(
        schemas(Wishlist, CreateWishlist, WishlistList, WishlistListResponse, WishlistResponse, MessageResponse),
        responses(InternalServerErrorResponse, DatabaseErrorResponse, NotFoundResponse)
    ),
    tags(
        (name = "Wishlist", description = "Wishlist documents")
    )
)]
pub struct LegacyApiDoc;

/// User-scoped router for `/wishlist`
pub fn router<R: WishlistRepository + 'static>(service: WishlistService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/{user_id}", get(get_user_wishlist).post(add_to_wishlist))
        .route("/{user_id}/{product_id}", delete(remove_from_wishlist))
        .with_state(shared_service)
}

/// Legacy router for `/wishlist`
pub fn legacy_router<R: WishlistRepository + 'static>(service: WishlistService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_wishlists).post(create_wishlist))
        .route("/{id}", delete(delete_wishlist))
        .with_state(shared_service)
}

/// Product ids on a user's wishlist
#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "Wishlist",
    params(
        ("user_id" = String, Path, description = "Owner of the wishlist")
    ),
    responses(
        (status = 200, description = "Product ids, empty when the user has no wishlist", body = WishlistProductsResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn get_user_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    Path(user_id): Path<String>,
) -> WishlistResult<Json<WishlistProductsResponse>> {
    let products = service.products_for_user(&user_id).await?;
    Ok(Json(WishlistProductsResponse { data: products }))
}

/// Add a product to a user's wishlist
#[utoipa::path(
    post,
    path = "/{user_id}",
    tag = "Wishlist",
    params(
        ("user_id" = String, Path, description = "Owner of the wishlist")
    ),
    request_body = AddToWishlist,
    responses(
        (status = 201, description = "Product added to wishlist", body = WishlistResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_to_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    Path(user_id): Path<String>,
    payload: Result<Json<AddToWishlist>, JsonRejection>,
) -> WishlistResult<impl IntoResponse> {
    let Json(input) =
        payload.map_err(|rejection| WishlistError::Validation(rejection.body_text()))?;

    let wishlist = service.add_product(&user_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(WishlistResponse {
            message: "Product added to wishlist".to_string(),
            data: wishlist,
        }),
    ))
}

/// Remove a product from a user's wishlist
#[utoipa::path(
    delete,
    path = "/{user_id}/{product_id}",
    tag = "Wishlist",
    params(
        ("user_id" = String, Path, description = "Owner of the wishlist"),
        ("product_id" = String, Path, description = "Product to remove")
    ),
    responses(
        (status = 200, description = "Product removed from wishlist", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn remove_from_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> WishlistResult<Json<MessageResponse>> {
    service.remove_product(&user_id, &product_id).await?;
    Ok(Json(MessageResponse {
        message: "Product removed from wishlist".to_string(),
    }))
}

/// List every wishlist
#[utoipa::path(
    get,
    path = "",
    tag = "Wishlist",
    responses(
        (status = 200, description = "All wishlists", body = WishlistListResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn list_wishlists<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
) -> WishlistResult<Json<WishlistListResponse>> {
    let wishlists = service.list_wishlists().await?;
    Ok(Json(WishlistListResponse {
        data: WishlistList { wishlists },
    }))
}

/// Create a wishlist document
#[utoipa::path(
    post,
    path = "",
    tag = "Wishlist",
    request_body = CreateWishlist,
    responses(
        (status = 201, description = "Wishlist created successfully", body = WishlistResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    payload: Result<Json<CreateWishlist>, JsonRejection>,
) -> WishlistResult<impl IntoResponse> {
    let Json(input) =
        payload.map_err(|rejection| WishlistError::Validation(rejection.body_text()))?;

    let wishlist = service.create_wishlist(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(WishlistResponse {
            message: "Wishlist created successfully".to_string(),
            data: wishlist,
        }),
    ))
}

/// Delete a wishlist by its id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Wishlist",
    params(
        ("id" = String, Path, description = "Wishlist ID")
    ),
    responses(
        (status = 200, description = "Wishlist deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DatabaseErrorResponse)
    )
)]
async fn delete_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    Path(id): Path<String>,
) -> WishlistResult<Json<MessageResponse>> {
    service.delete_wishlist(&id).await?;
    Ok(Json(MessageResponse {
        message: "Wishlist deleted successfully".to_string(),
    }))
}
