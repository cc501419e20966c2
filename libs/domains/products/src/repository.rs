use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product built from validated input
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Products matching `filter`, in storage order
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Distinct category values, unordered
    async fn distinct_categories(&self) -> ProductResult<Vec<String>>;
}

/// In-memory implementation for development and tests
///
/// Keeps insertion order, mirroring a collection scan.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.write().await.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let products = self.products.read().await;
        let mut categories: Vec<String> = Vec::new();
        for product in products.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: vec![],
            price: 10.0,
            original_price: 12.0,
            discount_percent: None,
            rating: 0.0,
            reviews_count: 0.0,
            category: category.to_string(),
            sizes: vec![],
            images: vec![],
            features: vec![],
            delivery_info: Default::default(),
            related_products: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Shirt", "Apparel")).await.unwrap();
        let fetched = repo.get_by_id(product.id).await.unwrap();

        assert_eq!(fetched, Some(product));
        assert_eq!(repo.get_by_id(Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_and_filters() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Red Shirt", "Apparel")).await.unwrap();
        repo.create(input("Sneakers", "Footwear")).await.unwrap();
        repo.create(input("Blue shirt", "Apparel")).await.unwrap();

        let all = repo.list(ProductFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Red Shirt", "Sneakers", "Blue shirt"]);

        let shirts = repo.list(ProductFilter::search("SHIRT")).await.unwrap();
        assert_eq!(shirts.len(), 2);

        let footwear = repo.list(ProductFilter::category("Footwear")).await.unwrap();
        assert_eq!(footwear.len(), 1);
        assert_eq!(footwear[0].name, "Sneakers");
    }

    #[tokio::test]
    async fn test_distinct_categories() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("A", "Toys")).await.unwrap();
        repo.create(input("B", "Apparel")).await.unwrap();
        repo.create(input("C", "Toys")).await.unwrap();

        let categories = repo.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["Toys", "Apparel"]);
    }
}
