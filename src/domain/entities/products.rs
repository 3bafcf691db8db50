use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::entities::categories::CategoryEntity, infrastructure::postgres::schema::products,
};

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable, Associations)]
#[diesel(belongs_to(CategoryEntity, foreign_key = category_id))]
#[diesel(table_name = products)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A product row joined with its owning category row, if that row exists.
pub type ProductWithCategoryEntity = (ProductEntity, Option<CategoryEntity>);

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = products)]
pub struct InsertProductEntity {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full overwrite of the mutable columns; the use case merges partial input first.
#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = products)]
pub struct UpdateProductEntity {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub updated_at: DateTime<Utc>,
}
