use async_trait::async_trait;

use crate::models::{LineGroup, MenuItem, Order, OrderLine, Payment, PaymentMethod};

/// Repository trait for menu reference data (read-only)
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list_items(
        &self,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_item(
        &self,
        menu_id: i64,
    ) -> Result<Option<MenuItem>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for order and order-line writes
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order with total 0 and return its generated id
    async fn create_order(&self) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;

    async fn add_line(
        &self,
        order_id: i64,
        menu_id: i64,
        quantity: i64,
        subtotal: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Sum of line subtotals for the order, 0 when there are no lines
    async fn total_lines(
        &self,
        order_id: i64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;

    async fn set_total(
        &self,
        order_id: i64,
        total: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for payment writes
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn record_payment(
        &self,
        order_id: i64,
        method: PaymentMethod,
        amount_paid: i64,
        change: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for the read-only normalization views
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 1NF: raw order_details rows for the order
    async fn order_lines(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLine>, Box<dyn std::error::Error + Send + Sync>>;

    /// 2NF: lines grouped by menu id with summed quantity
    async fn grouped_lines(
        &self,
        order_id: i64,
    ) -> Result<Vec<LineGroup>, Box<dyn std::error::Error + Send + Sync>>;

    /// 3NF-a: the orders row
    async fn order_summary(
        &self,
        order_id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>>;

    /// 3NF-b: distinct menu rows joined through the order lines
    async fn ordered_items(
        &self,
        order_id: i64,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>>;

    /// 3NF-c: payments for the order
    async fn payments(
        &self,
        order_id: i64,
    ) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send + Sync>>;
}
