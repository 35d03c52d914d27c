use chrono::{DateTime, Utc};

use super::errors::DomainError;

/// Percentage-off coupon. Expiration is checked when the discount is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    code: String,
    percentage: u8,
    expiration: DateTime<Utc>,
}

impl Coupon {
    pub fn new(
        code: impl Into<String>,
        percentage: u8,
        expiration: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if percentage > 100 {
            return Err(DomainError::invalid_parameter());
        }
        Ok(Self {
            code: code.into(),
            percentage,
            expiration,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// A coupon is valid only while its expiration lies strictly after `at`.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.expiration <= at
    }

    /// Amount to subtract from `amount`, rounded down. Zero once expired.
    pub fn discount(&self, amount: u64, at: DateTime<Utc>) -> u64 {
        if self.is_expired(at) {
            return 0;
        }
        let discount = u128::from(amount) * u128::from(self.percentage) / 100;
        // percentage <= 100, so the discount never exceeds `amount`
        u64::try_from(discount).unwrap_or(amount)
    }
}
