use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::carts::{CartEntity, InsertCartEntity};

#[async_trait]
#[automock]
pub trait CartRepository {
    async fn list(&self) -> Result<Vec<CartEntity>>;
    async fn create(&self, insert_cart_entity: InsertCartEntity) -> Result<CartEntity>;
}
