//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::uuid_bson;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the indexes used by category lookups and listing
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Translate a ProductFilter into a query document.
    ///
    /// The search term is matched literally, case-insensitively, anywhere in the name.
    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(term) = &filter.name_contains {
            doc.insert(
                "name",
                doc! { "$regex": regex::escape(term), "$options": "i" },
            );
        }

        if let Some(category) = &filter.category {
            doc.insert("category", category);
        }

        doc
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": uuid_bson(id) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let query = Self::build_filter(&filter);
        let cursor = self.collection.find(query).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryInfo;
    use mongodb::bson::{from_slice, to_raw_document_buf};

    fn stored(product: &Product) -> Document {
        let raw = to_raw_document_buf(product).unwrap();
        Document::try_from(&*raw).unwrap()
    }

    fn shirt() -> Product {
        Product::new(CreateProduct {
            name: "Shirt".to_string(),
            description: vec![],
            price: 10.0,
            original_price: 15.0,
            discount_percent: None,
            rating: 4.5,
            reviews_count: 3.0,
            category: "Apparel".to_string(),
            sizes: vec![],
            images: vec![],
            features: vec![],
            delivery_info: DeliveryInfo::default(),
            related_products: vec![Uuid::now_v7()],
        })
    }

    #[test]
    fn test_id_filter_matches_stored_id() {
        let product = shirt();
        let filter = MongoProductRepository::id_filter(product.id);

        assert_eq!(filter.get("_id"), stored(&product).get("_id"));
    }

    #[test]
    fn test_stored_product_reads_back() {
        let product = shirt();
        let raw = to_raw_document_buf(&product).unwrap();

        let back: Product = from_slice(raw.as_bytes()).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_build_filter_empty() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_escapes_search_term() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::search("t-shirt (xl)"));
        let name = doc.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), r"t\-shirt \(xl\)");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_build_filter_with_category() {
        let doc = MongoProductRepository::build_filter(&ProductFilter::category("Apparel"));
        assert_eq!(doc.get_str("category").unwrap(), "Apparel");
        assert!(!doc.contains_key("name"));
    }
}
