use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn default_true() -> bool {
    true
}

/// Delivery and payment terms shown on the product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    #[serde(default = "default_true")]
    pub pay_on_delivery: bool,
    #[serde(default = "default_true")]
    pub free_delivery: bool,
    #[serde(default = "default_true")]
    pub secure_payment: bool,
}

impl Default for DeliveryInfo {
    fn default() -> Self {
        Self {
            return_policy: None,
            pay_on_delivery: true,
            free_delivery: true,
            secure_payment: true,
        }
    }
}

/// Product entity - stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// Description paragraphs in display order
    #[serde(default)]
    pub description: Vec<String>,
    pub price: f64,
    /// Price before discount
    pub original_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: f64,
    pub category: String,
    /// Available sizes, no repeats
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Image URLs in display order
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub delivery_info: DeliveryInfo,
    #[serde(default)]
    pub related_products: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product from validated input with a fresh id and timestamps
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            original_price: input.original_price,
            discount_percent: input.discount_percent,
            rating: input.rating,
            reviews_count: input.reviews_count,
            category: input.category,
            sizes: dedup_preserving_order(input.sizes),
            images: input.images,
            features: input.features,
            delivery_info: input.delivery_info,
            related_products: input.related_products,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: f64,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub delivery_info: DeliveryInfo,
    #[serde(default)]
    pub related_products: Vec<Uuid>,
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
}

/// Repository-level selection; empty matches every product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Already trimmed and non-empty
    pub name_contains: Option<String>,
    /// Exact category match
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            name_contains: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = &self.name_contains {
            if !product.name_contains(term) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        true
    }
}

/// A category and the products filed under it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryProducts {
    pub name: String,
    pub products: Vec<Product>,
}

// Response envelopes

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: ProductList,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub data: Product,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub data: CategoryList,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryData {
    pub category: CategoryProducts,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub data: CategoryData,
}
