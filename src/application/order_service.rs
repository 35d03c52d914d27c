use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use crate::domain::freight::FreightPolicy;
use crate::domain::order::Order;
use crate::domain::ports::{CouponRepository, ItemRepository, OrderRepository, RepositoryFactory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineInput {
    pub item_id: u64,
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderInput {
    pub cpf: String,
    pub lines: Vec<OrderLineInput>,
    pub coupon: Option<String>,
    /// Defaults to the moment the order is placed.
    pub issue_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderOutput {
    pub code: String,
    pub total: u64,
    pub freight: u64,
}

pub struct OrderService<I, C, O> {
    items: I,
    coupons: C,
    orders: O,
    freight_policy: FreightPolicy,
}

impl<I, C, O> OrderService<I, C, O>
where
    I: ItemRepository,
    C: CouponRepository,
    O: OrderRepository,
{
    pub fn new(items: I, coupons: C, orders: O) -> Self {
        Self {
            items,
            coupons,
            orders,
            freight_policy: FreightPolicy::default(),
        }
    }

    pub fn from_factory<F>(factory: &F) -> Self
    where
        F: RepositoryFactory<Items = I, Coupons = C, Orders = O>,
    {
        Self::new(
            factory.create_item_repository(),
            factory.create_coupon_repository(),
            factory.create_order_repository(),
        )
    }

    pub fn with_freight_policy(mut self, policy: FreightPolicy) -> Self {
        self.freight_policy = policy;
        self
    }

    pub fn orders(&self) -> &O {
        &self.orders
    }

    /// Builds, prices and saves an order. Nothing is saved if any line fails.
    pub fn place_order(&self, input: PlaceOrderInput) -> Result<PlaceOrderOutput, DomainError> {
        let sequence = self.orders.count()? + 1;
        let issue_date = input.issue_date.unwrap_or_else(Utc::now);
        let mut order = Order::issued(&input.cpf, issue_date, sequence)?
            .with_freight_policy(self.freight_policy);

        for line in &input.lines {
            let item = self
                .items
                .get_by_id(line.item_id)?
                .ok_or_else(|| DomainError::NotFound(format!("item {}", line.item_id)))?;
            order.add_item(item, line.quantity)?;
        }

        if let Some(code) = input.coupon.as_deref() {
            match self.coupons.get_by_code(code)? {
                Some(coupon) => order.add_coupon(coupon),
                None => log::warn!("Ignoring unknown coupon {}", code),
            }
        }

        let output = PlaceOrderOutput {
            code: order.code(),
            total: order.total(),
            freight: order.freight(self.freight_policy.distance),
        };
        self.orders.save(order)?;
        log::info!(
            "Placed order {} (total {}, freight {})",
            output.code,
            output.total,
            output.freight
        );
        Ok(output)
    }
}
