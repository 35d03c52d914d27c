use super::item::Item;

pub const DEFAULT_MINIMUM_FREIGHT: u64 = 10;
pub const DEFAULT_DISTANCE: u64 = 1000;

/// g → kg (10³) times the rate divisor (100).
const FREIGHT_SCALE: u128 = 100_000;

/// Freight parameters an order is priced with.
///
/// `minimum` is charged whenever the computed freight of a non-empty order
/// falls below it. `distance` is the distance, in km, the order total is
/// priced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreightPolicy {
    pub minimum: u64,
    pub distance: u64,
}

impl Default for FreightPolicy {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_FREIGHT,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl FreightPolicy {
    /// Freight for a single unit of `item`: distance × volume (m³) × density / 100.
    ///
    /// Volume × density is the weight, so only the weight enters the product
    /// and the result is rounded down once. Items without volume ship free.
    /// `None` when the amount does not fit in a `u64`.
    pub fn unit_freight(&self, item: &Item, distance: u64) -> Option<u64> {
        if item.dimensions.volume() == 0 {
            return Some(0);
        }
        let raw = u128::from(distance) * u128::from(item.weight) / FREIGHT_SCALE;
        u64::try_from(raw).ok()
    }

    pub fn apply_minimum(&self, freight: u64) -> u64 {
        freight.max(self.minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Dimensions;

    fn item(dimensions: Dimensions, weight: u32) -> Item {
        Item::new(1, "Test", 100, dimensions, weight)
    }

    #[test]
    fn reference_items_at_thousand_km() {
        let policy = FreightPolicy::default();
        let guitar = item(Dimensions::new(100, 30, 10), 3000);
        let amplifier = item(Dimensions::new(100, 50, 50), 20_000);
        let cable = item(Dimensions::new(10, 10, 10), 1000);

        assert_eq!(policy.unit_freight(&guitar, 1000), Some(30));
        assert_eq!(policy.unit_freight(&amplifier, 1000), Some(200));
        assert_eq!(policy.unit_freight(&cable, 1000), Some(10));
    }

    #[test]
    fn freight_scales_with_distance() {
        let policy = FreightPolicy::default();
        let amplifier = item(Dimensions::new(100, 50, 50), 20_000);
        assert_eq!(policy.unit_freight(&amplifier, 2000), Some(400));
        assert_eq!(policy.unit_freight(&amplifier, 0), Some(0));
    }

    #[test]
    fn volume_not_dividing_weight_is_not_undercharged() {
        let policy = FreightPolicy::default();
        let cube = item(Dimensions::new(7, 7, 7), 1000);
        assert_eq!(policy.unit_freight(&cube, 1000), Some(10));
        let odd = item(Dimensions::new(3, 7, 11), 2500);
        assert_eq!(policy.unit_freight(&odd, 1000), Some(25));
    }

    #[test]
    fn unrepresentable_freight_is_none() {
        let policy = FreightPolicy::default();
        let heavy = item(Dimensions::new(1, 1, 1), u32::MAX);
        assert_eq!(policy.unit_freight(&heavy, u64::MAX), None);
    }

    #[test]
    fn zero_volume_item_has_no_freight() {
        let policy = FreightPolicy::default();
        let flat = item(Dimensions::new(0, 10, 10), 500);
        assert_eq!(policy.unit_freight(&flat, 1000), Some(0));
    }

    #[test]
    fn minimum_is_a_floor() {
        let policy = FreightPolicy::default();
        assert_eq!(policy.apply_minimum(3), 10);
        assert_eq!(policy.apply_minimum(260), 260);
    }
}
