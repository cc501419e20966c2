//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CategoryProducts, CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Product and category operations over a ProductRepository
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, or those whose name contains `search` ignoring case.
    ///
    /// A term that is empty after trimming lists everything.
    #[instrument(skip(self))]
    pub async fn list_products(&self, search: Option<String>) -> ProductResult<Vec<Product>> {
        let filter = match search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => ProductFilter::search(term),
            _ => ProductFilter::default(),
        };
        self.repository.list(filter).await
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Look up a product. Ids that are not valid UUIDs cannot exist and are reported as not found.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let uuid = Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))?;

        self.repository
            .get_by_id(uuid)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Distinct categories, sorted ascending
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        let mut categories = self.repository.distinct_categories().await?;
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Products whose category equals `name` exactly.
    ///
    /// A category with no products is indistinguishable from an unknown one
    /// and both yield `CategoryNotFound`.
    #[instrument(skip(self))]
    pub async fn products_in_category(&self, name: &str) -> ProductResult<CategoryProducts> {
        let products = self.repository.list(ProductFilter::category(name)).await?;

        if products.is_empty() {
            return Err(ProductError::CategoryNotFound(name.to_string()));
        }

        Ok(CategoryProducts {
            name: name.to_string(),
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn shirt_input() -> CreateProduct {
        CreateProduct {
            name: "Shirt".to_string(),
            description: vec![],
            price: 10.0,
            original_price: 15.0,
            discount_percent: None,
            rating: 0.0,
            reviews_count: 0.0,
            category: "Apparel".to_string(),
            sizes: vec![],
            images: vec![],
            features: vec![],
            delivery_info: Default::default(),
            related_products: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_products_trims_search_term() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::search("shirt")))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        service
            .list_products(Some("  shirt  ".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_products_blank_search_lists_all() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::default()))
            .times(2)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        service.list_products(Some("   ".to_string())).await.unwrap();
        service.list_products(None).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input_before_storage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let mut input = shirt_input();
        input.category = " ".to_string();

        let service = ProductService::new(mock_repo);
        let result = service.create_product(input).await;

        assert!(matches!(result, Err(ProductError::InvalidFields(_))));
    }

    #[tokio::test]
    async fn test_create_product_persists_valid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(shirt_input()).await.unwrap();

        assert_eq!(product.category, "Apparel");
    }

    #[tokio::test]
    async fn test_get_product_malformed_id_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();

        let service = ProductService::new(mock_repo);
        let result = service.get_product("not-a-uuid").await;

        assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "not-a-uuid"));
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(&id.to_string()).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_categories_sorted_and_unique() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_distinct_categories().returning(|| {
            Ok(vec![
                "Toys".to_string(),
                "Apparel".to_string(),
                "Footwear".to_string(),
                "Apparel".to_string(),
            ])
        });

        let service = ProductService::new(mock_repo);
        let categories = service.list_categories().await.unwrap();

        assert_eq!(categories, vec!["Apparel", "Footwear", "Toys"]);
    }

    #[tokio::test]
    async fn test_empty_category_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::category("Garden")))
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let result = service.products_in_category("Garden").await;

        assert!(matches!(result, Err(ProductError::CategoryNotFound(name)) if name == "Garden"));
    }

    #[tokio::test]
    async fn test_products_in_category() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::category("Apparel")))
            .returning(|_| Ok(vec![Product::new(shirt_input())]));

        let service = ProductService::new(mock_repo);
        let category = service.products_in_category("Apparel").await.unwrap();

        assert_eq!(category.name, "Apparel");
        assert_eq!(category.products.len(), 1);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_distinct_categories()
            .returning(|| Err(ProductError::Database("connection refused".into())));

        let service = ProductService::new(mock_repo);
        let result = service.list_categories().await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
