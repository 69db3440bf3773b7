//! Order entity and its read-side views

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core_types::OrderId;
use crate::money::{self, MoneyError};

/// An order that has not been persisted yet.
///
/// No validation happens here: empty names, zero or negative prices and
/// quantities are all representable. Input checks belong to the request layer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl NewOrder {
    pub fn new(product_name: impl Into<String>, unit_price: Decimal, quantity: i32) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity,
        }
    }
}

/// A stored order
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    pub order_id: OrderId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_new(order_id: OrderId, new: NewOrder, created_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            product_name: new.product_name,
            unit_price: new.unit_price,
            quantity: new.quantity,
            created_at,
        }
    }

    /// `quantity × unit_price`, exact. The amount is never stored.
    pub fn calculate_amount(&self) -> Result<Decimal, MoneyError> {
        money::line_amount(self.unit_price, self.quantity)
    }

    pub fn to_view(&self) -> OrderView {
        OrderView {
            product_name: self.product_name.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// Order as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderView {
    #[serde(rename = "productname")]
    #[schema(example = "Batavus fiets")]
    pub product_name: String,
    #[serde(rename = "unitprice", with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1500.0)]
    pub unit_price: Decimal,
    #[schema(example = 5)]
    pub quantity: i32,
}

/// Invoice amount for one order
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InvoiceView {
    #[serde(rename = "orderid")]
    #[schema(example = 123)]
    pub order_id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 7500.0)]
    pub amount: Decimal,
}
