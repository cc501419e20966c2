//! MongoDB implementation of WishlistRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::mongodb::{is_duplicate_key_error, uuid_bson};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{WishlistError, WishlistResult};
use crate::models::{CreateWishlist, Wishlist};
use crate::repository::WishlistRepository;

pub const COLLECTION: &str = "wishlists";

/// Upserts racing on the same new user lose with a duplicate key at most
/// once each; the retry then matches the winner's document.
const MAX_UPSERT_ATTEMPTS: u32 = 3;

/// MongoDB implementation of the WishlistRepository
pub struct MongoWishlistRepository {
    collection: Collection<Wishlist>,
}

impl MongoWishlistRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Wishlist>(collection_name);
        Self { collection }
    }

    /// Create the unique `user` index that backs one-wishlist-per-user
    pub async fn init_indexes(&self) -> WishlistResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(
                IndexOptions::builder()
                    .name("idx_user_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Wishlist indexes created successfully");
        Ok(())
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": uuid_bson(id) }
    }

    /// `$addToSet` keeps products unique; `$setOnInsert` only applies when the
    /// upsert creates the document, with `new_id` as its id.
    fn add_product_update(
        product_id: &str,
        new_id: Uuid,
        now: DateTime<Utc>,
    ) -> WishlistResult<Document> {
        let now = to_bson(&now)?;
        Ok(doc! {
            "$addToSet": { "products": product_id },
            "$setOnInsert": { "_id": uuid_bson(new_id), "createdAt": now.clone() },
            "$set": { "updatedAt": now },
        })
    }
}

#[async_trait]
impl WishlistRepository for MongoWishlistRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user: &str) -> WishlistResult<Option<Wishlist>> {
        let wishlist = self.collection.find_one(doc! { "user": user }).await?;
        Ok(wishlist)
    }

    /// Find-or-create in one round trip
    #[instrument(skip(self))]
    async fn add_product(&self, user: &str, product_id: &str) -> WishlistResult<Wishlist> {
        let update = Self::add_product_update(product_id, Uuid::now_v7(), Utc::now())?;

        let mut attempt = 0;
        loop {
            attempt += 1;

            let result = self
                .collection
                .find_one_and_update(doc! { "user": user }, update.clone())
                .upsert(true)
                .return_document(ReturnDocument::After)
                .await;

            match result {
                Ok(Some(wishlist)) => return Ok(wishlist),
                Ok(None) => {
                    return Err(WishlistError::Database(format!(
                        "upsert returned no wishlist for user {}",
                        user
                    )))
                }
                Err(err) if is_duplicate_key_error(&err) && attempt < MAX_UPSERT_ATTEMPTS => {
                    tracing::debug!(attempt, "Concurrent wishlist creation, retrying upsert");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove_product(
        &self,
        user: &str,
        product_id: &str,
    ) -> WishlistResult<Option<Wishlist>> {
        let update = doc! {
            "$pull": { "products": product_id },
            "$set": { "updatedAt": to_bson(&Utc::now())? },
        };

        let wishlist = self
            .collection
            .find_one_and_update(doc! { "user": user }, update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(wishlist)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> WishlistResult<Vec<Wishlist>> {
        let cursor = self.collection.find(doc! {}).await?;
        let wishlists: Vec<Wishlist> = cursor.try_collect().await?;
        Ok(wishlists)
    }

    #[instrument(skip(self, input), fields(user = %input.user))]
    async fn create(&self, input: CreateWishlist) -> WishlistResult<Wishlist> {
        let wishlist = Wishlist::new(input.user, input.products);

        match self.collection.insert_one(&wishlist).await {
            Ok(_) => {
                tracing::info!(wishlist_id = %wishlist.id, "Wishlist created successfully");
                Ok(wishlist)
            }
            Err(err) if is_duplicate_key_error(&err) => {
                Err(WishlistError::AlreadyExists(wishlist.user))
            }
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> WishlistResult<bool> {
        let result = self
            .collection
            .delete_one(Self::id_filter(id))
            .await?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{from_slice, to_raw_document_buf};

    fn stored(wishlist: &Wishlist) -> Document {
        let raw = to_raw_document_buf(wishlist).unwrap();
        Document::try_from(&*raw).unwrap()
    }

    #[test]
    fn test_id_filter_matches_stored_id() {
        let wishlist = Wishlist::new("u1", vec!["p1".into()]);
        let filter = MongoWishlistRepository::id_filter(wishlist.id);

        assert_eq!(filter.get("_id"), stored(&wishlist).get("_id"));
    }

    #[test]
    fn test_upsert_sets_id_and_timestamps_as_stored() {
        let wishlist = Wishlist::new("u1", vec![]);
        let update =
            MongoWishlistRepository::add_product_update("p1", wishlist.id, wishlist.created_at)
                .unwrap();
        let on_insert = update.get_document("$setOnInsert").unwrap();
        let expected = stored(&wishlist);

        assert_eq!(on_insert.get("_id"), expected.get("_id"));
        assert_eq!(on_insert.get("createdAt"), expected.get("createdAt"));
        assert_eq!(
            update.get_document("$set").unwrap().get("updatedAt"),
            expected.get("updatedAt")
        );
        assert_eq!(update.get_document("$addToSet").unwrap().get_str("products").unwrap(), "p1");
    }

    #[test]
    fn test_upserted_document_reads_back_as_wishlist() {
        let id = Uuid::now_v7();
        let update = MongoWishlistRepository::add_product_update("p1", id, Utc::now()).unwrap();

        let mut created = doc! { "user": "u1", "products": ["p1"] };
        for operator in ["$setOnInsert", "$set"] {
            for (key, value) in update.get_document(operator).unwrap() {
                created.insert(key.clone(), value.clone());
            }
        }
        let mut bytes = Vec::new();
        created.to_writer(&mut bytes).unwrap();

        let wishlist: Wishlist = from_slice(&bytes).unwrap();
        assert_eq!(wishlist.id, id);
        assert_eq!(wishlist.user, "u1");
        assert_eq!(wishlist.products, vec!["p1"]);
        assert_eq!(wishlist.created_at, wishlist.updated_at);
    }
}
