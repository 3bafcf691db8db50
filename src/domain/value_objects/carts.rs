use serde::{Deserialize, Serialize};

use crate::domain::{entities::carts::CartEntity, value_objects::audit::Audit};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartModel {
    #[serde(flatten)]
    pub audit: Audit,
    pub user_id: i32,
    pub cart_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertCartModel {
    pub user_id: i32,
    pub cart_value: f64,
}

impl From<CartEntity> for CartModel {
    fn from(value: CartEntity) -> Self {
        Self {
            audit: Audit {
                id: value.id,
                created_at: value.created_at,
                updated_at: value.updated_at,
                deleted_at: value.deleted_at,
            },
            user_id: value.user_id,
            cart_value: value.cart_value,
        }
    }
}
