use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::{
    application::errors::{UseCaseError, UseCaseResult, ensure_price},
    domain::{
        entities::{payment_items::InsertPaymentItemEntity, payments::InsertPaymentEntity},
        repositories::payments::PaymentRepository,
        value_objects::payments::{InsertPaymentModel, PaymentModel},
    },
};

pub struct PaymentUseCase<T>
where
    T: PaymentRepository + Send + Sync,
{
    payment_repository: Arc<T>,
}

impl<T> PaymentUseCase<T>
where
    T: PaymentRepository + Send + Sync,
{
    pub fn new(payment_repository: Arc<T>) -> Self {
        Self { payment_repository }
    }

    /// Records a payment and its line items. Prices and quantities are the
    /// caller's snapshot, not looked up in the catalog.
    pub async fn create(
        &self,
        insert_payment_model: InsertPaymentModel,
    ) -> UseCaseResult<PaymentModel> {
        for (index, item) in insert_payment_model.items.iter().enumerate() {
            if item.qty < 1 {
                return Err(UseCaseError::Invalid(format!(
                    "items[{}].qty must be at least 1",
                    index
                )));
            }
            ensure_price(&format!("items[{}].price", index), item.price)?;
        }

        let total = insert_payment_model.total();
        if !total.is_finite() {
            return Err(UseCaseError::Invalid(
                "total must be a finite number".to_string(),
            ));
        }
        let now = Utc::now();

        let insert_payment_entity = InsertPaymentEntity {
            customer_name: insert_payment_model.customer.name,
            customer_email: insert_payment_model.customer.email,
            total,
            created_at: now,
            updated_at: now,
        };

        // payment_id is assigned inside the repository transaction.
        let insert_payment_item_entities = insert_payment_model
            .items
            .into_iter()
            .map(|item| InsertPaymentItemEntity {
                payment_id: 0,
                product_id: item.product_id,
                name: item.name,
                price: item.price,
                qty: item.qty,
                created_at: now,
                updated_at: now,
            })
            .collect::<Vec<_>>();
        let item_count = insert_payment_item_entities.len();

        let recorded = self
            .payment_repository
            .record_payment(insert_payment_entity, insert_payment_item_entities)
            .await
            .map_err(|err| {
                error!(
                    total,
                    items = item_count,
                    db_error = ?err,
                    "payments: failed to record payment, transaction rolled back"
                );
                err
            })?;

        info!(
            payment_id = recorded.0.id,
            total,
            items = item_count,
            "payments: payment recorded"
        );
        Ok(recorded.into())
    }
}
