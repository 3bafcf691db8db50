use anyhow::Result;
use async_trait::async_trait;
use diesel::{insert_into, prelude::*};
use std::sync::Arc;

use crate::domain::{
    entities::{
        payment_items::{InsertPaymentItemEntity, PaymentItemEntity},
        payments::{InsertPaymentEntity, PaymentEntity},
    },
    repositories::payments::PaymentRepository,
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{payment_items, payments},
};

pub struct PaymentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentRepository for PaymentPostgres {
    async fn record_payment(
        &self,
        insert_payment_entity: InsertPaymentEntity,
        mut insert_payment_item_entities: Vec<InsertPaymentItemEntity>,
    ) -> Result<(PaymentEntity, Vec<PaymentItemEntity>)> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = conn.transaction::<_, diesel::result::Error, _>(|tx| {
            let payment = insert_into(payments::table)
                .values(&insert_payment_entity)
                .returning(PaymentEntity::as_returning())
                .get_result::<PaymentEntity>(tx)?;

            if insert_payment_item_entities.is_empty() {
                return Ok((payment, Vec::new()));
            }

            for item in insert_payment_item_entities.iter_mut() {
                item.payment_id = payment.id;
            }

            let items = insert_into(payment_items::table)
                .values(&insert_payment_item_entities)
                .returning(PaymentItemEntity::as_returning())
                .get_results::<PaymentItemEntity>(tx)?;

            Ok((payment, items))
        })?;

        Ok(result)
    }
}
