pub mod audit;
pub mod carts;
pub mod categories;
pub mod payments;
pub mod product_filter;
pub mod products;
