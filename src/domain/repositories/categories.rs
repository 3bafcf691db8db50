use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{
    categories::{CategoryEntity, InsertCategoryEntity},
    products::{InsertProductEntity, ProductEntity},
};

#[async_trait]
#[automock]
pub trait CategoryRepository {
    async fn list_with_products(&self) -> Result<Vec<(CategoryEntity, Vec<ProductEntity>)>>;
    async fn find_with_products(
        &self,
        category_id: i32,
    ) -> Result<Option<(CategoryEntity, Vec<ProductEntity>)>>;
    /// Inserts the category and its nested products in one transaction.
    /// The products' `category_id` is overwritten with the new category id.
    async fn create(
        &self,
        insert_category_entity: InsertCategoryEntity,
        insert_product_entities: Vec<InsertProductEntity>,
    ) -> Result<(CategoryEntity, Vec<ProductEntity>)>;
}
