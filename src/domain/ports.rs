use super::coupon::Coupon;
use super::errors::DomainError;
use super::item::Item;
use super::order::Order;

pub trait ItemRepository: Send + Sync + 'static {
    fn get_by_id(&self, id: u64) -> Result<Option<Item>, DomainError>;
}

pub trait CouponRepository: Send + Sync + 'static {
    fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn save(&self, order: Order) -> Result<(), DomainError>;
    fn count(&self) -> Result<u64, DomainError>;
}

/// Builds a matching set of repositories for one storage backend.
pub trait RepositoryFactory {
    type Items: ItemRepository;
    type Coupons: CouponRepository;
    type Orders: OrderRepository;

    fn create_item_repository(&self) -> Self::Items;
    fn create_coupon_repository(&self) -> Self::Coupons;
    fn create_order_repository(&self) -> Self::Orders;
}
