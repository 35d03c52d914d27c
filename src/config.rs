use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::{OrderLineInput, PlaceOrderInput};
use crate::domain::freight::{FreightPolicy, DEFAULT_DISTANCE, DEFAULT_MINIMUM_FREIGHT};
use crate::errors::AppError;

/// Runtime settings read from the environment (and `.env`, loaded by `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub freight: FreightPolicy,
    /// JSON catalog to seed from; the bundled catalog when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            freight: FreightPolicy {
                minimum: parse_or(&lookup, "FREIGHT_MINIMUM", DEFAULT_MINIMUM_FREIGHT)?,
                distance: parse_or(&lookup, "FREIGHT_DISTANCE", DEFAULT_DISTANCE)?,
            },
            catalog_path: lookup("CATALOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::Config(format!(
                "{} must be a non-negative integer, got '{}'",
                key, raw
            ))
        }),
        None => Ok(default),
    }
}

/// Order request for the binary: `ORDER_CPF`, `ORDER_ITEMS` (`id:qty,...`)
/// and an optional `ORDER_COUPON`.
pub fn order_from_env() -> Result<PlaceOrderInput, AppError> {
    order_from_lookup(|key| env::var(key).ok())
}

pub fn order_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PlaceOrderInput, AppError> {
    let required = |key: &str| {
        lookup(key).ok_or_else(|| AppError::Config(format!("{} must be set", key)))
    };
    let cpf = required("ORDER_CPF")?;
    let items = required("ORDER_ITEMS")?;
    Ok(PlaceOrderInput {
        cpf,
        lines: parse_lines(&items)?,
        coupon: lookup("ORDER_COUPON").filter(|c| !c.trim().is_empty()),
        issue_date: None,
    })
}

fn parse_lines(raw: &str) -> Result<Vec<OrderLineInput>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<OrderLineInput, AppError> {
            let invalid = || {
                AppError::Config(format!("ORDER_ITEMS entry '{}' is not id:quantity", entry))
            };
            let (id, quantity) = entry.split_once(':').ok_or_else(invalid)?;
            Ok(OrderLineInput {
                item_id: id.trim().parse().map_err(|_| invalid())?,
                quantity: quantity.trim().parse().map_err(|_| invalid())?,
            })
        })
        .collect()
}
