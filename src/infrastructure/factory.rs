use crate::domain::coupon::Coupon;
use crate::domain::errors::DomainError;
use crate::domain::item::Item;
use crate::domain::ports::RepositoryFactory;

use super::coupon_repo::MemoryCouponRepository;
use super::item_repo::MemoryItemRepository;
use super::models::Catalog;
use super::order_repo::MemoryOrderRepository;

/// Hands out in-memory repositories seeded from a catalog. Every order
/// repository it creates starts empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepositoryFactory {
    items: Vec<Item>,
    coupons: Vec<Coupon>,
}

impl MemoryRepositoryFactory {
    pub fn from_catalog(catalog: Catalog) -> Result<Self, DomainError> {
        let coupons = catalog
            .coupons
            .into_iter()
            .map(Coupon::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Seeding repositories with {} items and {} coupons",
            catalog.items.len(),
            coupons.len()
        );
        Ok(Self {
            items: catalog.items,
            coupons,
        })
    }
}

impl RepositoryFactory for MemoryRepositoryFactory {
    type Items = MemoryItemRepository;
    type Coupons = MemoryCouponRepository;
    type Orders = MemoryOrderRepository;

    fn create_item_repository(&self) -> Self::Items {
        MemoryItemRepository::new(self.items.clone())
    }

    fn create_coupon_repository(&self) -> Self::Coupons {
        MemoryCouponRepository::new(self.coupons.clone())
    }

    fn create_order_repository(&self) -> Self::Orders {
        MemoryOrderRepository::new()
    }
}
