use chrono::Utc;
use std::collections::BTreeMap;

use crate::domain::{Category, CategoryFields, CategoryStatus, CategoryStore, CategoryStoreError};

#[derive(Default)]
pub struct HashmapCategoryStore {
    categories: BTreeMap<i64, Category>,
    last_id: i64,
}

impl HashmapCategoryStore {
    fn sorted(mut categories: Vec<Category>) -> Vec<Category> {
        categories.sort_by_key(|c| (c.category_level, c.category_order, c.category_id));
        categories
    }
}

#[async_trait::async_trait]
impl CategoryStore for HashmapCategoryStore {
    async fn insert(&mut self, fields: CategoryFields) -> Result<Category, CategoryStoreError> {
        self.last_id += 1;
        let category = Category {
            category_id: self.last_id,
            parent_category_id: fields.parent_category_id,
            name: fields.name,
            description: fields.description,
            category_level: fields.category_level,
            category_order: fields.category_order,
            category_status: CategoryStatus::Active,
            created_at: Utc::now(),
        };
        self.categories.insert(category.category_id, category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, category_id: i64) -> Result<Category, CategoryStoreError> {
        self.categories
            .get(&category_id)
            .cloned()
            .ok_or(CategoryStoreError::NotFound)
    }

    async fn get_active_by_id(&self, category_id: i64) -> Result<Category, CategoryStoreError> {
        self.categories
            .get(&category_id)
            .filter(|c| c.is_active())
            .cloned()
            .ok_or(CategoryStoreError::NotFound)
    }

    async fn find_all_active(&self) -> Result<Vec<Category>, CategoryStoreError> {
        Ok(Self::sorted(
            self.categories
                .values()
                .filter(|c| c.is_active())
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_name_containing(
        &self,
        name: &str,
    ) -> Result<Vec<Category>, CategoryStoreError> {
        let needle = name.to_lowercase();
        Ok(Self::sorted(
            self.categories
                .values()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn save(&mut self, category: Category) -> Result<Category, CategoryStoreError> {
        let slot = self
            .categories
            .get_mut(&category.category_id)
            .ok_or(CategoryStoreError::NotFound)?;
        *slot = category;
        Ok(slot.clone())
    }
}
