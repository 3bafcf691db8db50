use anyhow::Result;
use async_trait::async_trait;
use diesel::{insert_into, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::{
        categories::{CategoryEntity, InsertCategoryEntity},
        products::{InsertProductEntity, ProductEntity},
    },
    repositories::categories::CategoryRepository,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{categories, products},
};

pub struct CategoryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CategoryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryPostgres {
    async fn list_with_products(&self) -> Result<Vec<(CategoryEntity, Vec<ProductEntity>)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let categories = categories::table
            .filter(categories::deleted_at.is_null())
            .select(CategoryEntity::as_select())
            .order(categories::id.asc())
            .load::<CategoryEntity>(&mut conn)?;

        let products = ProductEntity::belonging_to(&categories)
            .filter(products::deleted_at.is_null())
            .select(ProductEntity::as_select())
            .order(products::id.asc())
            .load::<ProductEntity>(&mut conn)?;

        let grouped = products.grouped_by(&categories);

        Ok(categories.into_iter().zip(grouped).collect())
    }

    async fn find_with_products(
        &self,
        category_id: i32,
    ) -> Result<Option<(CategoryEntity, Vec<ProductEntity>)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let Some(category) = categories::table
            .filter(categories::id.eq(category_id))
            .filter(categories::deleted_at.is_null())
            .select(CategoryEntity::as_select())
            .first::<CategoryEntity>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let products = ProductEntity::belonging_to(&category)
            .filter(products::deleted_at.is_null())
            .select(ProductEntity::as_select())
            .order(products::id.asc())
            .load::<ProductEntity>(&mut conn)?;

        Ok(Some((category, products)))
    }

    async fn create(
        &self,
        insert_category_entity: InsertCategoryEntity,
        mut insert_product_entities: Vec<InsertProductEntity>,
    ) -> Result<(CategoryEntity, Vec<ProductEntity>)> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = conn.transaction::<_, diesel::result::Error, _>(|tx| {
            let category = insert_into(categories::table)
                .values(&insert_category_entity)
                .returning(CategoryEntity::as_returning())
                .get_result::<CategoryEntity>(tx)?;

            if insert_product_entities.is_empty() {
                return Ok((category, Vec::new()));
            }

            for product in insert_product_entities.iter_mut() {
                product.category_id = category.id;
            }

            let products = insert_into(products::table)
                .values(&insert_product_entities)
                .returning(ProductEntity::as_returning())
                .get_results::<ProductEntity>(tx)?;

            Ok((category, products))
        })?;

        Ok(result)
    }
}
