pub mod coupon_repo;
pub mod factory;
pub mod item_repo;
pub mod models;
pub mod order_repo;

pub use coupon_repo::MemoryCouponRepository;
pub use factory::MemoryRepositoryFactory;
pub use item_repo::MemoryItemRepository;
pub use models::{Catalog, CouponRow};
pub use order_repo::MemoryOrderRepository;
