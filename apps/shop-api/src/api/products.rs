//! Products and categories routes

use domain_products::{MongoProductRepository, ProductService};

use crate::state::AppState;

pub fn service(state: &AppState) -> ProductService<MongoProductRepository> {
    ProductService::new(MongoProductRepository::new(&state.db))
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
