use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::{
    payment_items::{InsertPaymentItemEntity, PaymentItemEntity},
    payments::{InsertPaymentEntity, PaymentEntity},
};

#[async_trait]
#[automock]
pub trait PaymentRepository {
    /// Writes the payment and all of its items atomically.
    async fn record_payment(
        &self,
        insert_payment_entity: InsertPaymentEntity,
        insert_payment_item_entities: Vec<InsertPaymentItemEntity>,
    ) -> Result<(PaymentEntity, Vec<PaymentItemEntity>)>;
}
