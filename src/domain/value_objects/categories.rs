use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{categories::CategoryEntity, products::ProductEntity},
    value_objects::{audit::Audit, products::ProductModel},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryModel {
    #[serde(flatten)]
    pub audit: Audit,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWithProductsModel {
    #[serde(flatten)]
    pub category: CategoryModel,
    pub products: Vec<ProductModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertCategoryModel {
    pub name: String,
    #[serde(default)]
    pub products: Vec<InsertNestedProductModel>,
}

/// Product created together with its category; `category_id` comes from the new row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertNestedProductModel {
    pub name: String,
    pub price: f64,
}

impl From<CategoryEntity> for CategoryModel {
    fn from(value: CategoryEntity) -> Self {
        Self {
            audit: Audit {
                id: value.id,
                created_at: value.created_at,
                updated_at: value.updated_at,
                deleted_at: value.deleted_at,
            },
            name: value.name,
        }
    }
}

impl From<(CategoryEntity, Vec<ProductEntity>)> for CategoryWithProductsModel {
    fn from((category, products): (CategoryEntity, Vec<ProductEntity>)) -> Self {
        Self {
            category: category.into(),
            products: products
                .into_iter()
                .map(|product| ProductModel::from((product, None)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn empty_category_serializes_products_as_empty_list() {
        let now = Utc::now();
        let category = CategoryEntity {
            id: 1,
            name: "Books".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let json = serde_json::to_value(CategoryWithProductsModel::from((category, vec![]))).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Books");
        assert_eq!(json["products"], serde_json::json!([]));
    }

    #[test]
    fn nested_products_default_to_empty() {
        let model: InsertCategoryModel = serde_json::from_str(r#"{"name":"Books"}"#).unwrap();
        assert_eq!(model.name, "Books");
        assert!(model.products.is_empty());
    }
}
