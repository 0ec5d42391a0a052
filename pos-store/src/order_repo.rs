use async_trait::async_trait;
use sqlx::SqlitePool;

use pos_core::repository::OrderRepository;

pub struct StoreOrderRepository {
    pool: SqlitePool,
}

impl StoreOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn create_order(&self) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query("INSERT INTO orders (total_amount) VALUES (0)")
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn add_line(
        &self,
        order_id: i64,
        menu_id: i64,
        quantity: i64,
        subtotal: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO order_details (order_id, menu_id, quantity, subtotal) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(menu_id)
        .bind(quantity)
        .bind(subtotal)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn total_lines(
        &self,
        order_id: i64,
    ) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(subtotal), 0) FROM order_details WHERE order_id = ?",
        )
        .bind(order_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    async fn set_total(
        &self,
        order_id: i64,
        total: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("UPDATE orders SET total_amount = ? WHERE order_id = ?")
            .bind(total)
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
