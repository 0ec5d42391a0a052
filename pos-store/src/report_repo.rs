use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use pos_core::models::{LineGroup, MenuItem, Order, OrderLine, Payment, PaymentMethod};
use pos_core::repository::ReportRepository;

/// Read side of the store: the 1NF/2NF/3NF views over one order
pub struct StoreReportRepository {
    pool: SqlitePool,
}

impl StoreReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct LineRow {
    order_detail_id: i64,
    order_id: i64,
    menu_id: i64,
    quantity: i64,
    subtotal: i64,
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    payment_id: i64,
    order_id: i64,
    payment_method_id: i64,
    amount_paid: i64,
    change_amount: i64,
    payment_date: DateTime<Utc>,
}

impl From<LineRow> for OrderLine {
    fn from(row: LineRow) -> Self {
        OrderLine {
            id: row.order_detail_id,
            order_id: row.order_id,
            menu_id: row.menu_id,
            quantity: row.quantity,
            subtotal: row.subtotal,
        }
    }
}

#[async_trait]
impl ReportRepository for StoreReportRepository {
    async fn order_lines(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLine>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<LineRow> = sqlx::query_as(
            "SELECT order_detail_id, order_id, menu_id, quantity, subtotal \
             FROM order_details WHERE order_id = ? ORDER BY order_detail_id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn grouped_lines(
        &self,
        order_id: i64,
    ) -> Result<Vec<LineGroup>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT menu_id, SUM(quantity) FROM order_details \
             WHERE order_id = ? GROUP BY menu_id ORDER BY menu_id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(menu_id, total_quantity)| LineGroup {
                menu_id,
                total_quantity,
            })
            .collect())
    }

    async fn order_summary(
        &self,
        order_id: i64,
    ) -> Result<Option<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<(i64, i64)> =
            sqlx::query_as("SELECT order_id, total_amount FROM orders WHERE order_id = ?")
                .bind(order_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, total)| Order { id, total }))
    }

    async fn ordered_items(
        &self,
        order_id: i64,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<(i64, String, i64)> = sqlx::query_as(
            "SELECT DISTINCT m.menu_id, m.item_name, m.price \
             FROM menu m JOIN order_details od ON m.menu_id = od.menu_id \
             WHERE od.order_id = ? ORDER BY m.menu_id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, price)| MenuItem { id, name, price })
            .collect())
    }

    async fn payments(
        &self,
        order_id: i64,
    ) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            "SELECT payment_id, order_id, payment_method_id, amount_paid, change_amount, payment_date \
             FROM payments WHERE order_id = ? ORDER BY payment_id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        let mut payments = Vec::with_capacity(rows.len());
        for row in rows {
            payments.push(Payment {
                id: row.payment_id,
                order_id: row.order_id,
                method: PaymentMethod::try_from(row.payment_method_id)?,
                amount_paid: row.amount_paid,
                change: row.change_amount,
                paid_at: row.payment_date,
            });
        }
        Ok(payments)
    }
}
