use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{payment_items::PaymentItemEntity, payments::PaymentEntity},
    value_objects::audit::Audit,
};

pub const PAYMENT_ACCEPTED_MESSAGE: &str = "Payment accepted";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerModel {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertPaymentItemModel {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub qty: i32,
}

impl InsertPaymentItemModel {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertPaymentModel {
    pub customer: CustomerModel,
    pub items: Vec<InsertPaymentItemModel>,
}

impl InsertPaymentModel {
    /// Sum of `price * qty` over the submitted items, as given by the caller.
    pub fn total(&self) -> f64 {
        self.items.iter().map(InsertPaymentItemModel::subtotal).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentItemModel {
    #[serde(flatten)]
    pub audit: Audit,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub qty: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentModel {
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(rename = "name")]
    pub customer_name: String,
    #[serde(rename = "email")]
    pub customer_email: String,
    pub total: f64,
    pub items: Vec<PaymentItemModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePaymentResponse {
    pub message: String,
    pub payment: PaymentModel,
}

impl From<PaymentItemEntity> for PaymentItemModel {
    fn from(value: PaymentItemEntity) -> Self {
        Self {
            audit: Audit {
                id: value.id,
                created_at: value.created_at,
                updated_at: value.updated_at,
                deleted_at: value.deleted_at,
            },
            product_id: value.product_id,
            name: value.name,
            price: value.price,
            qty: value.qty,
        }
    }
}

impl From<(PaymentEntity, Vec<PaymentItemEntity>)> for PaymentModel {
    fn from((payment, items): (PaymentEntity, Vec<PaymentItemEntity>)) -> Self {
        Self {
            audit: Audit {
                id: payment.id,
                created_at: payment.created_at,
                updated_at: payment.updated_at,
                deleted_at: payment.deleted_at,
            },
            customer_name: payment.customer_name,
            customer_email: payment.customer_email,
            total: payment.total,
            items: items.into_iter().map(PaymentItemModel::from).collect(),
        }
    }
}
