use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::products::ProductWithCategoryEntity,
    value_objects::{audit::Audit, categories::CategoryModel},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductModel {
    #[serde(flatten)]
    pub audit: Audit,
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub category: Option<CategoryModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertProductModel {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
}

/// Partial update payload. Absent fields keep the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateProductModel {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
}

impl From<ProductWithCategoryEntity> for ProductModel {
    fn from((product, category): ProductWithCategoryEntity) -> Self {
        // A soft-deleted category is not embedded.
        let category = category
            .filter(|category| category.deleted_at.is_none())
            .map(CategoryModel::from);

        Self {
            audit: Audit {
                id: product.id,
                created_at: product.created_at,
                updated_at: product.updated_at,
                deleted_at: product.deleted_at,
            },
            name: product.name,
            price: product.price,
            category_id: product.category_id,
            category,
        }
    }
}
