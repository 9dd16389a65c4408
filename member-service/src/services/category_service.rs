use crate::app_state::AppState;
use crate::domain::{
    AuthContext, Category, CategoryCreateRequest, CategoryFields, CategoryResponse,
    CategoryStatus, CategoryStore, CategoryStoreError, CategoryUpdateRequest, Role,
};
use crate::errors::BoardError;

/// Category administration. Every operation requires `Role::Admin`.
pub struct CategoryService {}

impl CategoryService {
    pub async fn list_active(
        state: &AppState,
        ctx: &AuthContext,
    ) -> Result<Vec<CategoryResponse>, BoardError> {
        ctx.require(Role::Admin)?;
        let categories = state.category_store.read().await.find_all_active().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    pub async fn get(
        state: &AppState,
        ctx: &AuthContext,
        category_id: i64,
    ) -> Result<CategoryResponse, BoardError> {
        ctx.require(Role::Admin)?;
        let category = state
            .category_store
            .read()
            .await
            .get_active_by_id(category_id)
            .await?;
        Ok(CategoryResponse::from(&category))
    }

    pub async fn create(
        state: &AppState,
        ctx: &AuthContext,
        request: CategoryCreateRequest,
    ) -> Result<CategoryResponse, BoardError> {
        ctx.require(Role::Admin)?;
        let fields = CategoryFields::new(
            request.parent_category_id,
            request.name,
            request.description,
            request.category_level,
            request.category_order,
        )
        .map_err(BoardError::Validation)?;

        let mut store = state.category_store.write().await;
        Self::check_parent(&*store, fields.parent_category_id).await?;
        let category = store.insert(fields).await?;

        log::info!("category {} created", category.category_id);
        Ok(CategoryResponse::from(&category))
    }

    pub async fn update(
        state: &AppState,
        ctx: &AuthContext,
        category_id: i64,
        request: CategoryUpdateRequest,
    ) -> Result<CategoryResponse, BoardError> {
        ctx.require(Role::Admin)?;
        let status = request
            .category_status
            .parse::<CategoryStatus>()
            .map_err(BoardError::InvalidStatus)?;
        let fields = CategoryFields::new(
            request.parent_category_id,
            request.name,
            request.description,
            request.category_level,
            request.category_order,
        )
        .map_err(BoardError::Validation)?;

        let mut store = state.category_store.write().await;
        let current = store.get_by_id(category_id).await?;
        Self::check_parent(&*store, fields.parent_category_id).await?;

        let saved = store
            .save(Category {
                parent_category_id: fields.parent_category_id,
                name: fields.name,
                description: fields.description,
                category_level: fields.category_level,
                category_order: fields.category_order,
                category_status: status,
                ..current
            })
            .await?;
        Ok(CategoryResponse::from(&saved))
    }

    pub async fn change_status(
        state: &AppState,
        ctx: &AuthContext,
        category_id: i64,
        status: &str,
    ) -> Result<(), BoardError> {
        ctx.require(Role::Admin)?;
        let status = status
            .parse::<CategoryStatus>()
            .map_err(BoardError::InvalidStatus)?;

        let mut store = state.category_store.write().await;
        let mut category = store.get_by_id(category_id).await?;
        category.category_status = status;
        store.save(category).await?;
        Ok(())
    }

    pub async fn change_order(
        state: &AppState,
        ctx: &AuthContext,
        category_id: i64,
        order: i32,
    ) -> Result<(), BoardError> {
        ctx.require(Role::Admin)?;
        let mut store = state.category_store.write().await;
        let mut category = store.get_by_id(category_id).await?;
        category.category_order = order;
        store.save(category).await?;
        Ok(())
    }

    pub async fn search(
        state: &AppState,
        ctx: &AuthContext,
        name: &str,
    ) -> Result<Vec<CategoryResponse>, BoardError> {
        ctx.require(Role::Admin)?;
        let categories = state
            .category_store
            .read()
            .await
            .find_by_name_containing(name)
            .await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    async fn check_parent(
        store: &dyn CategoryStore,
        parent_category_id: Option<i64>,
    ) -> Result<(), BoardError> {
        let Some(parent_id) = parent_category_id else {
            return Ok(());
        };
        match store.get_by_id(parent_id).await {
            Ok(_) => Ok(()),
            Err(CategoryStoreError::NotFound) => Err(BoardError::ParentCategoryNotFound),
            Err(e) => Err(e.into()),
        }
    }
}
