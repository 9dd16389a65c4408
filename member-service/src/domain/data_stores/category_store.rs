use thiserror::Error;

use crate::domain::{Category, CategoryFields};

#[derive(Error, Debug, PartialEq)]
pub enum CategoryStoreError {
    #[error("category not found")]
    NotFound,
    #[error("unexpected category store error: {0}")]
    Unexpected(String),
}

#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn insert(&mut self, fields: CategoryFields) -> Result<Category, CategoryStoreError>;
    /// Any status.
    async fn get_by_id(&self, category_id: i64) -> Result<Category, CategoryStoreError>;
    async fn get_active_by_id(&self, category_id: i64) -> Result<Category, CategoryStoreError>;
    /// Active categories ordered by level, then order.
    async fn find_all_active(&self) -> Result<Vec<Category>, CategoryStoreError>;
    async fn find_by_name_containing(&self, name: &str)
        -> Result<Vec<Category>, CategoryStoreError>;
    async fn save(&mut self, category: Category) -> Result<Category, CategoryStoreError>;
}
