use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw `/products/filter` query string. Values stay as text so a malformed
/// number can be skipped instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilterQuery {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "categoryID")]
    pub category_id: Option<String>,
}

/// A single condition on the products table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ProductScope {
    MinPrice(f64),
    CategoryId(i32),
}

/// Conditions ANDed together by the repository. Empty means "all live products".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    pub scopes: Vec<ProductScope>,
}

impl ProductFilter {
    pub fn with_scope(mut self, scope: ProductScope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl From<&ProductFilterQuery> for ProductFilter {
    fn from(query: &ProductFilterQuery) -> Self {
        let mut filter = ProductFilter::default();

        if let Some(raw) = non_empty(query.min_price.as_deref()) {
            match raw.parse::<f64>() {
                Ok(min_price) if min_price.is_finite() => {
                    filter = filter.with_scope(ProductScope::MinPrice(min_price));
                }
                _ => debug!(min_price = raw, "product_filter: ignoring malformed minPrice"),
            }
        }

        if let Some(raw) = non_empty(query.category_id.as_deref()) {
            match raw.parse::<u32>().ok().and_then(|id| i32::try_from(id).ok()) {
                Some(category_id) => {
                    filter = filter.with_scope(ProductScope::CategoryId(category_id));
                }
                None => debug!(category_id = raw, "product_filter: ignoring malformed categoryID"),
            }
        }

        filter
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
