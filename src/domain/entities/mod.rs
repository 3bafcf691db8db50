pub mod carts;
pub mod categories;
pub mod payment_items;
pub mod payments;
pub mod products;
