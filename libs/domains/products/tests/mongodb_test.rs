//! MongoDB repository tests for the Products domain
//!
//! Each test starts its own MongoDB container, so they need Docker:
//!
//! ```text
//! cargo test -p domain_products --test mongodb_test -- --ignored
//! ```

use domain_products::*;
use test_utils::{assertions, TestDataBuilder, TestMongo};

fn input(name: &str, category: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: vec!["Soft cotton".to_string()],
        price: 10.0,
        original_price: 15.0,
        discount_percent: Some(33.0),
        rating: 4.5,
        reviews_count: 12.0,
        category: category.to_string(),
        sizes: vec!["S".to_string(), "M".to_string()],
        images: vec![],
        features: vec![],
        delivery_info: DeliveryInfo::default(),
        related_products: vec![],
    }
}

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoProductRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoProductRepository::new(&mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();
    repo
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_then_get_by_id() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "products_create_get").await;

    let created = repo.create(input("Shirt", "Apparel")).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.sizes, created.sizes);
    assert_eq!(fetched.discount_percent, Some(33.0));
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_by_id_missing() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "products_missing").await;

    let found = repo.get_by_id(uuid::Uuid::now_v7()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_search_is_literal_and_case_insensitive() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "products_search").await;

    repo.create(input("Blue Shirt", "Apparel")).await.unwrap();
    repo.create(input("Shirt (XL)", "Apparel")).await.unwrap();
    repo.create(input("Running Shoe", "Footwear")).await.unwrap();

    let shirts = repo.list(ProductFilter::search("SHIRT")).await.unwrap();
    assert_eq!(shirts.len(), 2);

    let literal = repo.list(ProductFilter::search("(xl)")).await.unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].name, "Shirt (XL)");

    let all = repo.list(ProductFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_distinct_categories_through_service() {
    let mongo = TestMongo::new().await;
    let service = ProductService::new(repository(&mongo, "products_categories").await);

    service.create_product(input("Shoe", "Footwear")).await.unwrap();
    service.create_product(input("Shirt", "Apparel")).await.unwrap();
    service.create_product(input("Hat", "Apparel")).await.unwrap();

    let categories = service.list_categories().await.unwrap();
    assert_eq!(categories, vec!["Apparel", "Footwear"]);
    assertions::assert_sorted(&categories, "categories");

    let apparel = service.products_in_category("Apparel").await.unwrap();
    assert_eq!(apparel.products.len(), 2);

    let garden = service.products_in_category("Garden").await;
    assert!(matches!(garden, Err(ProductError::CategoryNotFound(_))));
}
