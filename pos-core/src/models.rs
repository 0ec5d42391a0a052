use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Payment method as persisted in `payments.payment_method_id`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Gcash,
    Card,
}

impl PaymentMethod {
    /// Numeric code stored in the payments table
    pub fn code(self) -> i64 {
        match self {
            PaymentMethod::Cash => 1,
            PaymentMethod::Gcash => 2,
            PaymentMethod::Card => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Gcash => "GCash",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }
}

impl TryFrom<i64> for PaymentMethod {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PaymentMethod::Cash),
            2 => Ok(PaymentMethod::Gcash),
            3 => Ok(PaymentMethod::Card),
            other => Err(CoreError::ValidationError(format!(
                "unknown payment method code {other}"
            ))),
        }
    }
}

/// Static reference row from the menu table; never mutated by the counter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in centavos
    pub price: i64,
}

/// One counter order; the total is written once, after the item loop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    /// Total in centavos, 0 until totaling runs
    pub total: i64,
}

/// One accepted item+quantity entry. The subtotal is frozen at insert
/// time and is not recomputed if the menu price later changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
    pub subtotal: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: PaymentMethod,
    pub amount_paid: i64,
    pub change: i64,
    pub paid_at: DateTime<Utc>,
}

/// 2NF view row: order lines grouped by menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineGroup {
    pub menu_id: i64,
    pub total_quantity: i64,
}

/// The three read-only normalization views over one order,
/// fetched together after payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReport {
    /// 1NF: raw order_details rows
    pub lines: Vec<OrderLine>,
    /// 2NF: lines grouped by menu id with summed quantity
    pub groups: Vec<LineGroup>,
    /// 3NF-a: the orders row
    pub order: Option<Order>,
    /// 3NF-b: distinct menu rows joined through the order lines
    pub items: Vec<MenuItem>,
    /// 3NF-c: payments for the order
    pub payments: Vec<Payment>,
}
