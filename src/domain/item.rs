use serde::{Deserialize, Serialize};

/// Package dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Volume in cubic centimetres.
    pub fn volume(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * u64::from(self.length)
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub description: String,
    /// Unit price in minor currency units.
    pub price: u64,
    pub dimensions: Dimensions,
    /// Weight in grams.
    pub weight: u32,
}

impl Item {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        price: u64,
        dimensions: Dimensions,
        weight: u32,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            price,
            dimensions,
            weight,
        }
    }
}

/// An item line in an order. Quantity is always at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub item: Item,
    pub quantity: u64,
}

impl OrderItem {
    /// `None` when price × quantity does not fit in a `u64`.
    pub fn subtotal(&self) -> Option<u64> {
        self.item.price.checked_mul(self.quantity)
    }
}
