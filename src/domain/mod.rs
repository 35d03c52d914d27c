pub mod coupon;
pub mod errors;
pub mod freight;
pub mod item;
pub mod order;
pub mod ports;
pub mod tax_id;

pub use coupon::Coupon;
pub use errors::DomainError;
pub use freight::FreightPolicy;
pub use item::{Dimensions, Item, OrderItem};
pub use order::Order;
pub use tax_id::TaxId;
