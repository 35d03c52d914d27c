use std::sync::{PoisonError, RwLock};

use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl<T> From<PoisonError<T>> for DomainError {
    fn from(e: PoisonError<T>) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

/// Append-only order store. Orders are kept in the order they were saved.
#[derive(Debug, Default)]
pub struct MemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved order.
    pub fn orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read()?.clone())
    }
}

impl OrderRepository for MemoryOrderRepository {
    fn save(&self, order: Order) -> Result<(), DomainError> {
        log::debug!("Saving order {}", order.code());
        self.orders.write()?.push(order);
        Ok(())
    }

    fn count(&self) -> Result<u64, DomainError> {
        Ok(self.orders.read()?.len() as u64)
    }
}
