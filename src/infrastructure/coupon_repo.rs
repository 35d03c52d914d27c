use std::collections::HashMap;

use crate::domain::coupon::Coupon;
use crate::domain::errors::DomainError;
use crate::domain::ports::CouponRepository;

#[derive(Debug, Clone, Default)]
pub struct MemoryCouponRepository {
    coupons: HashMap<String, Coupon>,
}

impl MemoryCouponRepository {
    pub fn new(coupons: impl IntoIterator<Item = Coupon>) -> Self {
        Self {
            coupons: coupons
                .into_iter()
                .map(|coupon| (coupon.code().to_string(), coupon))
                .collect(),
        }
    }
}

impl CouponRepository for MemoryCouponRepository {
    fn get_by_code(&self, code: &str) -> Result<Option<Coupon>, DomainError> {
        Ok(self.coupons.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let expiration = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let repo = MemoryCouponRepository::new(vec![Coupon::new("VALE20", 20, expiration).unwrap()]);

        assert!(repo.get_by_code("VALE20").unwrap().is_some());
        assert!(repo.get_by_code("vale20").unwrap().is_none());
    }
}
