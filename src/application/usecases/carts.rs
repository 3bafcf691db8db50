use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::{
    application::errors::UseCaseResult,
    domain::{
        entities::carts::InsertCartEntity,
        repositories::carts::CartRepository,
        value_objects::carts::{CartModel, InsertCartModel},
    },
};

pub struct CartUseCase<T>
where
    T: CartRepository + Send + Sync,
{
    cart_repository: Arc<T>,
}

impl<T> CartUseCase<T>
where
    T: CartRepository + Send + Sync,
{
    pub fn new(cart_repository: Arc<T>) -> Self {
        Self { cart_repository }
    }

    pub async fn list(&self) -> UseCaseResult<Vec<CartModel>> {
        let carts = self.cart_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "carts: failed to list carts");
            err
        })?;

        Ok(carts.into_iter().map(CartModel::from).collect())
    }

    /// Stores `user_id` and `cart_value` as given.
    pub async fn create(&self, insert_cart_model: InsertCartModel) -> UseCaseResult<CartModel> {
        let now = Utc::now();
        let insert_cart_entity = InsertCartEntity {
            user_id: insert_cart_model.user_id,
            cart_value: insert_cart_model.cart_value,
            created_at: now,
            updated_at: now,
        };

        let cart = self
            .cart_repository
            .create(insert_cart_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "carts: failed to create cart");
                err
            })?;

        info!(cart_id = cart.id, user_id = cart.user_id, "carts: cart created");
        Ok(cart.into())
    }
}
