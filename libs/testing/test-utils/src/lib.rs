//! Shared test utilities for the domain crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo", default)
//! - `TestDataBuilder`: deterministic identifiers and names
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.database(&builder.database_name());
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Deterministic test data derived from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's name so each test gets its own stable values.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let a = TestDataBuilder::from_test_name("test_add_to_wishlist");
    /// let b = TestDataBuilder::from_test_name("test_add_to_wishlist");
    /// assert_eq!(a.user_id(), b.user_id());
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Opaque user identifier, e.g. `user-1234-0`.
    pub fn user_id(&self) -> String {
        self.indexed_user_id(0)
    }

    pub fn indexed_user_id(&self, index: u32) -> String {
        format!("user-{}-{}", self.seed, index)
    }

    /// Opaque product identifier for wishlist entries.
    pub fn product_id(&self, index: u32) -> String {
        format!("product-{}-{}", self.seed, index)
    }

    /// `test-<prefix>-<seed>-<suffix>`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Database name unique to this builder's seed.
    pub fn database_name(&self) -> String {
        format!("shop_test_{}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert `items` has no repeated element.
    pub fn assert_unique<T: PartialEq + std::fmt::Debug>(items: &[T], context: &str) {
        for (i, item) in items.iter().enumerate() {
            assert!(
                !items[i + 1..].contains(item),
                "{}: {:?} appears more than once in {:?}",
                context,
                item,
                items
            );
        }
    }

    /// Assert `items` are sorted ascending.
    pub fn assert_sorted<T: PartialOrd + std::fmt::Debug>(items: &[T], context: &str) {
        assert!(
            items.windows(2).all(|pair| pair[0] <= pair[1]),
            "{}: {:?} is not sorted",
            context,
            items
        );
    }
}
