use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::coupon::Coupon;
use crate::domain::errors::DomainError;
use crate::domain::item::Item;

const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponRow {
    pub code: String,
    pub percentage: u8,
    pub expiration: DateTime<Utc>,
}

impl TryFrom<CouponRow> for Coupon {
    type Error = DomainError;

    fn try_from(row: CouponRow) -> Result<Self, Self::Error> {
        Coupon::new(row.code, row.percentage, row.expiration)
    }
}

/// Static catalog data the in-memory repositories are seeded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub coupons: Vec<CouponRow>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog bundled with the crate: guitar, amplifier, cable and two
    /// 20% coupons (one long-lived, one expired).
    pub fn seed() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_parses() {
        let catalog = Catalog::seed().expect("seed catalog is valid json");
        let ids: Vec<u64> = catalog.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.coupons.len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json("{}").expect("empty object is a catalog");
        assert!(catalog.items.is_empty());
        assert!(catalog.coupons.is_empty());
    }

    #[test]
    fn coupon_row_above_hundred_percent_is_rejected() {
        let row: CouponRow = serde_json::from_str(
            r#"{"code":"BAD","percentage":150,"expiration":"2030-01-01T00:00:00Z"}"#,
        )
        .expect("row json");
        assert!(Coupon::try_from(row).is_err());
    }
}
