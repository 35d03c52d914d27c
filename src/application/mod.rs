pub mod order_service;

pub use order_service::{OrderLineInput, OrderService, PlaceOrderInput, PlaceOrderOutput};
