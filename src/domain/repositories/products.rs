use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    entities::products::{InsertProductEntity, ProductWithCategoryEntity, UpdateProductEntity},
    value_objects::product_filter::ProductFilter,
};

/// Every read skips soft-deleted products.
#[async_trait]
#[automock]
pub trait ProductRepository {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductWithCategoryEntity>>;
    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductWithCategoryEntity>>;
    async fn create(
        &self,
        insert_product_entity: InsertProductEntity,
    ) -> Result<ProductWithCategoryEntity>;
    async fn update(
        &self,
        product_id: i32,
        update_product_entity: UpdateProductEntity,
    ) -> Result<ProductWithCategoryEntity>;
    async fn soft_delete(&self, product_id: i32) -> Result<()>;
    async fn category_exists(&self, category_id: i32) -> Result<bool>;
}
