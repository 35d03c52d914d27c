pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

use std::fs;

use application::OrderService;
use config::Settings;
use errors::AppError;
use infrastructure::{
    Catalog, MemoryCouponRepository, MemoryItemRepository, MemoryOrderRepository,
    MemoryRepositoryFactory,
};

pub type MemoryOrderService =
    OrderService<MemoryItemRepository, MemoryCouponRepository, MemoryOrderRepository>;

/// Load the catalog named by `settings`, or the bundled one when none is set.
pub fn load_catalog(settings: &Settings) -> Result<Catalog, AppError> {
    match &settings.catalog_path {
        Some(path) => {
            log::info!("Loading catalog from {}", path.display());
            Ok(Catalog::from_json(&fs::read_to_string(path)?)?)
        }
        None => Ok(Catalog::seed()?),
    }
}

/// Build an order service over freshly seeded in-memory repositories.
pub fn build_service(settings: &Settings) -> Result<MemoryOrderService, AppError> {
    let factory = MemoryRepositoryFactory::from_catalog(load_catalog(settings)?)?;
    Ok(OrderService::from_factory(&factory).with_freight_policy(settings.freight))
}
