use async_trait::async_trait;
use sqlx::SqlitePool;

use pos_core::models::MenuItem;
use pos_core::repository::MenuRepository;

pub struct StoreMenuRepository {
    pool: SqlitePool,
}

impl StoreMenuRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct MenuRow {
    menu_id: i64,
    item_name: String,
    price: i64,
}

impl From<MenuRow> for MenuItem {
    fn from(row: MenuRow) -> Self {
        MenuItem {
            id: row.menu_id,
            name: row.item_name,
            price: row.price,
        }
    }
}

#[async_trait]
impl MenuRepository for StoreMenuRepository {
    async fn list_items(
        &self,
    ) -> Result<Vec<MenuItem>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<MenuRow> =
            sqlx::query_as("SELECT menu_id, item_name, price FROM menu ORDER BY menu_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_item(
        &self,
        menu_id: i64,
    ) -> Result<Option<MenuItem>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<MenuRow> =
            sqlx::query_as("SELECT menu_id, item_name, price FROM menu WHERE menu_id = ?")
                .bind(menu_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }
}
