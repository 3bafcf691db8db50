use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::{
    domain::entities::payments::PaymentEntity, infrastructure::postgres::schema::payment_items,
};

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable, Associations)]
#[diesel(belongs_to(PaymentEntity, foreign_key = payment_id))]
#[diesel(table_name = payment_items)]
pub struct PaymentItemEntity {
    pub id: i32,
    pub payment_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub qty: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// `payment_id` is filled in by the repository once the parent row exists.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = payment_items)]
pub struct InsertPaymentItemEntity {
    pub payment_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub qty: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
