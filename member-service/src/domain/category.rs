use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryStatus {
    Active,
    Inactive,
}

impl std::str::FromStr for CategoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(CategoryStatus::Active),
            "INACTIVE" => Ok(CategoryStatus::Inactive),
            _ => Err(format!("unknown category status: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub category_id: i64,
    pub parent_category_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category_level: u32,
    pub category_order: i32,
    pub category_status: CategoryStatus,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.category_status == CategoryStatus::Active
    }
}

/// Validated attributes shared by creation and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFields {
    pub parent_category_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category_level: u32,
    pub category_order: i32,
}

impl CategoryFields {
    pub const MAX_NAME_CHARS: usize = 50;

    pub fn new(
        parent_category_id: Option<i64>,
        name: String,
        description: String,
        category_level: u32,
        category_order: i32,
    ) -> Result<Self, String> {
        let name = name.trim().to_owned();
        if name.is_empty() || name.chars().count() > Self::MAX_NAME_CHARS {
            return Err(format!(
                "category name must be between 1 and {} characters",
                Self::MAX_NAME_CHARS
            ));
        }
        if category_level == 0 {
            return Err("category level starts at 1".to_string());
        }
        Ok(Self {
            parent_category_id,
            name,
            description,
            category_level,
            category_order,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    pub parent_category_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_level: u32,
    pub category_order: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdateRequest {
    pub parent_category_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_level: u32,
    pub category_order: i32,
    pub category_status: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryStatusRequest {
    pub status: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CategoryOrderRequest {
    pub order: i32,
}

#[derive(Deserialize, Debug)]
pub struct CategorySearchParams {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: i64,
    pub parent_category_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category_level: u32,
    pub category_order: i32,
    pub category_status: CategoryStatus,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            category_id: category.category_id,
            parent_category_id: category.parent_category_id,
            name: category.name.clone(),
            description: category.description.clone(),
            category_level: category.category_level,
            category_order: category.category_order,
            category_status: category.category_status,
        }
    }
}
