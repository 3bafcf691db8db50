use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::{
    application::errors::{
        CATEGORY_NOT_FOUND, UseCaseError, UseCaseResult, ensure_name, ensure_price,
    },
    domain::{
        entities::{categories::InsertCategoryEntity, products::InsertProductEntity},
        repositories::categories::CategoryRepository,
        value_objects::categories::{CategoryWithProductsModel, InsertCategoryModel},
    },
};

pub struct CategoryUseCase<T>
where
    T: CategoryRepository + Send + Sync,
{
    category_repository: Arc<T>,
}

impl<T> CategoryUseCase<T>
where
    T: CategoryRepository + Send + Sync,
{
    pub fn new(category_repository: Arc<T>) -> Self {
        Self {
            category_repository,
        }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<CategoryWithProductsModel>> {
        let categories = self
            .category_repository
            .list_with_products()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "categories: failed to list categories");
                err
            })?;

        Ok(categories
            .into_iter()
            .map(CategoryWithProductsModel::from)
            .collect())
    }

    pub async fn find(&self, category_id: i32) -> UseCaseResult<CategoryWithProductsModel> {
        let category = self
            .category_repository
            .find_with_products(category_id)
            .await
            .map_err(|err| {
                error!(category_id, db_error = ?err, "categories: failed to load category");
                err
            })?
            .ok_or(UseCaseError::NotFound(CATEGORY_NOT_FOUND))?;

        Ok(category.into())
    }

    pub async fn create(
        &self,
        insert_category_model: InsertCategoryModel,
    ) -> UseCaseResult<CategoryWithProductsModel> {
        ensure_name("name", &insert_category_model.name)?;
        for product in &insert_category_model.products {
            ensure_name("products.name", &product.name)?;
            ensure_price("products.price", product.price)?;
        }

        let now = Utc::now();
        let insert_category_entity = InsertCategoryEntity {
            name: insert_category_model.name,
            created_at: now,
            updated_at: now,
        };

        // category_id is assigned inside the repository transaction.
        let insert_product_entities = insert_category_model
            .products
            .into_iter()
            .map(|product| InsertProductEntity {
                name: product.name,
                price: product.price,
                category_id: 0,
                created_at: now,
                updated_at: now,
            })
            .collect::<Vec<_>>();

        let created = self
            .category_repository
            .create(insert_category_entity, insert_product_entities)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "categories: failed to create category");
                err
            })?;

        info!(
            category_id = created.0.id,
            products = created.1.len(),
            "categories: category created"
        );
        Ok(created.into())
    }
}
