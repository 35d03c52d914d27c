use std::iter;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Datelike, Utc};

use super::coupon::Coupon;
use super::errors::DomainError;
use super::freight::FreightPolicy;
use super::item::{Item, OrderItem};
use super::tax_id::TaxId;

/// Process-wide order sequence, starting at 1. Only consumed by `Order::new`.
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_sequence() -> u64 {
    NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Order aggregate.
///
/// Totals and freight are derived from the current lines on every call;
/// nothing is cached.
#[derive(Debug, Clone)]
pub struct Order {
    tax_id: TaxId,
    items: Vec<OrderItem>,
    coupon: Option<Coupon>,
    issue_date: DateTime<Utc>,
    sequence: u64,
    freight_policy: FreightPolicy,
}

impl Order {
    /// Creates an order issued now, numbered from the process-wide sequence.
    pub fn new(tax_id: &str) -> Result<Self, DomainError> {
        let tax_id = TaxId::parse(tax_id)?;
        Ok(Self::build(tax_id, Utc::now(), next_sequence()))
    }

    /// Creates an order with an explicit issue date and sequence number.
    pub fn issued(
        tax_id: &str,
        issue_date: DateTime<Utc>,
        sequence: u64,
    ) -> Result<Self, DomainError> {
        let tax_id = TaxId::parse(tax_id)?;
        Ok(Self::build(tax_id, issue_date, sequence))
    }

    fn build(tax_id: TaxId, issue_date: DateTime<Utc>, sequence: u64) -> Self {
        Self {
            tax_id,
            items: Vec::new(),
            coupon: None,
            issue_date,
            sequence,
            freight_policy: FreightPolicy::default(),
        }
    }

    pub fn with_freight_policy(mut self, policy: FreightPolicy) -> Self {
        self.freight_policy = policy;
        self
    }

    pub fn add_item(&mut self, item: Item, quantity: i64) -> Result<(), DomainError> {
        let quantity = u64::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(DomainError::invalid_parameter)?;
        let line = OrderItem { item, quantity };
        // the order must stay exactly priceable at the policy distance
        self.checked_total_with(&line).ok_or_else(DomainError::invalid_parameter)?;
        self.items.push(line);
        Ok(())
    }

    fn checked_total_with(&self, line: &OrderItem) -> Option<u64> {
        let lines = || self.items.iter().chain(iter::once(line));
        let subtotal = checked_subtotal(lines())?;
        let freight = self.checked_freight(lines(), self.freight_policy.distance)?;
        subtotal.checked_add(self.freight_policy.apply_minimum(freight))
    }

    fn checked_freight<'a>(
        &self,
        mut lines: impl Iterator<Item = &'a OrderItem>,
        distance: u64,
    ) -> Option<u64> {
        lines.try_fold(0u64, |acc, line| {
            let unit = self.freight_policy.unit_freight(&line.item, distance)?;
            acc.checked_add(unit.checked_mul(line.quantity)?)
        })
    }

    /// Attaches `coupon`, replacing any previous one. Expiry is not checked here.
    pub fn add_coupon(&mut self, coupon: Coupon) {
        self.coupon = Some(coupon);
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    pub fn issue_date(&self) -> DateTime<Utc> {
        self.issue_date
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn freight_policy(&self) -> FreightPolicy {
        self.freight_policy
    }

    /// Merchandise amount before discount.
    pub fn subtotal(&self) -> u64 {
        checked_subtotal(self.items.iter()).unwrap_or(u64::MAX)
    }

    /// Coupon discount on the merchandise, evaluated at the issue date.
    pub fn discount(&self) -> u64 {
        self.coupon
            .as_ref()
            .map_or(0, |c| c.discount(self.subtotal(), self.issue_date))
    }

    /// Discounted merchandise plus freight at the policy distance.
    pub fn total(&self) -> u64 {
        let merchandise = self.subtotal() - self.discount();
        merchandise.saturating_add(self.freight(self.freight_policy.distance))
    }

    /// Freight for shipping every line over `distance` km. An order without
    /// lines ships nothing; otherwise the policy minimum applies.
    ///
    /// Exact at the policy distance. Saturates at `u64::MAX` for distances
    /// the lines were never validated against.
    pub fn freight(&self, distance: u64) -> u64 {
        if self.items.is_empty() {
            return 0;
        }
        self.checked_freight(self.items.iter(), distance)
            .map_or(u64::MAX, |freight| self.freight_policy.apply_minimum(freight))
    }

    /// Issue year followed by the 8-digit zero-padded sequence number.
    pub fn code(&self) -> String {
        format!("{:04}{:08}", self.issue_date.year(), self.sequence)
    }
}

fn checked_subtotal<'a>(mut lines: impl Iterator<Item = &'a OrderItem>) -> Option<u64> {
    lines.try_fold(0u64, |acc, line| acc.checked_add(line.subtotal()?))
}
