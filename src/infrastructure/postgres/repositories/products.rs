use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{dsl::exists, insert_into, prelude::*, select, update};
use std::sync::Arc;

use crate::domain::{
    entities::{
        categories::CategoryEntity,
        products::{
            InsertProductEntity, ProductEntity, ProductWithCategoryEntity, UpdateProductEntity,
        },
    },
    repositories::products::ProductRepository,
    value_objects::product_filter::{ProductFilter, ProductScope},
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{categories, products},
};

pub struct ProductPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProductPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

fn with_category(
    conn: &mut PgConnection,
    product: ProductEntity,
) -> QueryResult<ProductWithCategoryEntity> {
    let category = categories::table
        .find(product.category_id)
        .select(CategoryEntity::as_select())
        .first::<CategoryEntity>(conn)
        .optional()?;

    Ok((product, category))
}

#[async_trait]
impl ProductRepository for ProductPostgres {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductWithCategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = products::table
            .left_join(categories::table)
            .filter(products::deleted_at.is_null())
            .select((ProductEntity::as_select(), Option::<CategoryEntity>::as_select()))
            .order(products::id.asc())
            .into_boxed();

        for scope in filter.scopes {
            query = match scope {
                ProductScope::MinPrice(min_price) => query.filter(products::price.ge(min_price)),
                ProductScope::CategoryId(category_id) => {
                    query.filter(products::category_id.eq(category_id))
                }
            };
        }

        let results = query.load::<ProductWithCategoryEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductWithCategoryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = products::table
            .left_join(categories::table)
            .filter(products::id.eq(product_id))
            .filter(products::deleted_at.is_null())
            .select((ProductEntity::as_select(), Option::<CategoryEntity>::as_select()))
            .first::<ProductWithCategoryEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(
        &self,
        insert_product_entity: InsertProductEntity,
    ) -> Result<ProductWithCategoryEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let product = insert_into(products::table)
            .values(&insert_product_entity)
            .returning(ProductEntity::as_returning())
            .get_result::<ProductEntity>(&mut conn)?;

        Ok(with_category(&mut conn, product)?)
    }

    async fn update(
        &self,
        product_id: i32,
        update_product_entity: UpdateProductEntity,
    ) -> Result<ProductWithCategoryEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let product = update(products::table)
            .filter(products::id.eq(product_id))
            .filter(products::deleted_at.is_null())
            .set(&update_product_entity)
            .returning(ProductEntity::as_returning())
            .get_result::<ProductEntity>(&mut conn)?;

        Ok(with_category(&mut conn, product)?)
    }

    async fn soft_delete(&self, product_id: i32) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(products::table)
            .filter(products::id.eq(product_id))
            .filter(products::deleted_at.is_null())
            .set(products::deleted_at.eq(Some(Utc::now())))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn category_exists(&self, category_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = select(exists(
            categories::table
                .filter(categories::id.eq(category_id))
                .filter(categories::deleted_at.is_null()),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}
