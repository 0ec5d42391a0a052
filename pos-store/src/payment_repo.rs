use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use pos_core::models::PaymentMethod;
use pos_core::repository::PaymentRepository;

pub struct StorePaymentRepository {
    pool: SqlitePool,
}

impl StorePaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for StorePaymentRepository {
    async fn record_payment(
        &self,
        order_id: i64,
        method: PaymentMethod,
        amount_paid: i64,
        change: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO payments (order_id, payment_method_id, amount_paid, change_amount, payment_date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(method.code())
        .bind(amount_paid)
        .bind(change)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
