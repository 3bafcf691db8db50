use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    application::errors::{
        PRODUCT_NOT_FOUND, UseCaseError, UseCaseResult, ensure_name, ensure_price,
    },
    domain::{
        entities::products::{
            InsertProductEntity, ProductWithCategoryEntity, UpdateProductEntity,
        },
        repositories::products::ProductRepository,
        value_objects::{
            product_filter::ProductFilter,
            products::{InsertProductModel, ProductModel, UpdateProductModel},
        },
    },
};

pub struct ProductUseCase<T>
where
    T: ProductRepository + Send + Sync,
{
    product_repository: Arc<T>,
}

impl<T> ProductUseCase<T>
where
    T: ProductRepository + Send + Sync,
{
    pub fn new(product_repository: Arc<T>) -> Self {
        Self { product_repository }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<ProductModel>> {
        self.filter(ProductFilter::default()).await
    }

    pub async fn filter(&self, filter: ProductFilter) -> UseCaseResult<Vec<ProductModel>> {
        let products = self
            .product_repository
            .list(filter.clone())
            .await
            .map_err(|err| {
                error!(?filter, db_error = ?err, "products: failed to list products");
                err
            })?;

        Ok(products.into_iter().map(ProductModel::from).collect())
    }

    pub async fn find(&self, product_id: i32) -> UseCaseResult<ProductModel> {
        let product = self.load(product_id).await?;
        Ok(product.into())
    }

    pub async fn create(
        &self,
        insert_product_model: InsertProductModel,
    ) -> UseCaseResult<ProductModel> {
        ensure_name("name", &insert_product_model.name)?;
        ensure_price("price", insert_product_model.price)?;
        self.ensure_category(insert_product_model.category_id).await?;

        let now = Utc::now();
        let insert_product_entity = InsertProductEntity {
            name: insert_product_model.name,
            price: insert_product_model.price,
            category_id: insert_product_model.category_id,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .product_repository
            .create(insert_product_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "products: failed to create product");
                err
            })?;

        info!(product_id = created.0.id, "products: product created");
        Ok(created.into())
    }

    /// Overlays the present fields of `update_product_model` onto the stored row.
    pub async fn update(
        &self,
        product_id: i32,
        update_product_model: UpdateProductModel,
    ) -> UseCaseResult<ProductModel> {
        let (existing, _) = self.load(product_id).await?;

        let update_product_entity = UpdateProductEntity {
            name: update_product_model.name.unwrap_or(existing.name),
            price: update_product_model.price.unwrap_or(existing.price),
            category_id: update_product_model
                .category_id
                .unwrap_or(existing.category_id),
            updated_at: Utc::now(),
        };

        ensure_name("name", &update_product_entity.name)?;
        ensure_price("price", update_product_entity.price)?;
        if update_product_entity.category_id != existing.category_id {
            self.ensure_category(update_product_entity.category_id).await?;
        }

        let updated = self
            .product_repository
            .update(product_id, update_product_entity)
            .await
            .map_err(|err| {
                error!(product_id, db_error = ?err, "products: failed to update product");
                err
            })?;

        info!(product_id, "products: product updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, product_id: i32) -> UseCaseResult<()> {
        self.load(product_id).await?;

        self.product_repository
            .soft_delete(product_id)
            .await
            .map_err(|err| {
                error!(product_id, db_error = ?err, "products: failed to delete product");
                err
            })?;

        info!(product_id, "products: product soft-deleted");
        Ok(())
    }

    /// Live product with its category, or `NotFound`.
    async fn load(&self, product_id: i32) -> UseCaseResult<ProductWithCategoryEntity> {
        self.product_repository
            .find_by_id(product_id)
            .await
            .map_err(|err| {
                error!(product_id, db_error = ?err, "products: failed to load product");
                err
            })?
            .ok_or(UseCaseError::NotFound(PRODUCT_NOT_FOUND))
    }

    async fn ensure_category(&self, category_id: i32) -> UseCaseResult<()> {
        if !self.product_repository.category_exists(category_id).await? {
            warn!(category_id, "products: category does not exist");
            return Err(UseCaseError::Invalid(format!(
                "category {} does not exist",
                category_id
            )));
        }
        Ok(())
    }
}
