pub mod carts;
pub mod categories;
pub mod payments;
pub mod products;
