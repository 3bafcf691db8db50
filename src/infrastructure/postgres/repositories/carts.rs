use anyhow::Result;
use async_trait::async_trait;
use diesel::{insert_into, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::carts::{CartEntity, InsertCartEntity},
    repositories::carts::CartRepository,
};
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::carts};

pub struct CartPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CartPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CartRepository for CartPostgres {
    async fn list(&self) -> Result<Vec<CartEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = carts::table
            .filter(carts::deleted_at.is_null())
            .select(CartEntity::as_select())
            .order(carts::id.asc())
            .load::<CartEntity>(&mut conn)?;

        Ok(results)
    }

    async fn create(&self, insert_cart_entity: InsertCartEntity) -> Result<CartEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(carts::table)
            .values(&insert_cart_entity)
            .returning(CartEntity::as_returning())
            .get_result::<CartEntity>(&mut conn)?;

        Ok(result)
    }
}
