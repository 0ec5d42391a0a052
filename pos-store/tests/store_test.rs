use pos_core::models::{LineGroup, PaymentMethod};
use pos_core::repository::{
    MenuRepository, OrderRepository, PaymentRepository, ReportRepository,
};
use pos_store::{
    DbClient, StoreMenuRepository, StoreOrderRepository, StorePaymentRepository,
    StoreReportRepository,
};

async fn setup() -> DbClient {
    let db = DbClient::new("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");
    db.migrate().await.expect("migrations should apply");
    db
}

#[tokio::test]
async fn test_menu_is_seeded() {
    let db = setup().await;
    let menu = StoreMenuRepository::new(db.pool.clone());

    let items = menu.list_items().await.unwrap();
    assert!(!items.is_empty());

    let bbq = menu.find_item(2).await.unwrap().unwrap();
    assert_eq!(bbq.name, "Pork BBQ");
    assert_eq!(bbq.price, 5500);

    assert!(menu.find_item(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_order_totaling_roundtrip() {
    let db = setup().await;
    let orders = StoreOrderRepository::new(db.pool.clone());
    let reports = StoreReportRepository::new(db.pool.clone());

    let order_id = orders.create_order().await.unwrap();
    assert!(order_id >= 1);

    // Empty order sums to zero.
    assert_eq!(orders.total_lines(order_id).await.unwrap(), 0);

    orders.add_line(order_id, 2, 1, 5500).await.unwrap();
    orders.add_line(order_id, 3, 1, 12000).await.unwrap();

    let total = orders.total_lines(order_id).await.unwrap();
    assert_eq!(total, 17500);

    orders.set_total(order_id, total).await.unwrap();
    let summary = reports.order_summary(order_id).await.unwrap().unwrap();
    assert_eq!(summary.id, order_id);
    assert_eq!(summary.total, 17500);
}

#[tokio::test]
async fn test_generated_order_ids_ascend() {
    let db = setup().await;
    let orders = StoreOrderRepository::new(db.pool.clone());

    let first = orders.create_order().await.unwrap();
    let second = orders.create_order().await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_grouped_lines_sum_quantities() {
    let db = setup().await;
    let orders = StoreOrderRepository::new(db.pool.clone());
    let reports = StoreReportRepository::new(db.pool.clone());

    let order_id = orders.create_order().await.unwrap();
    orders.add_line(order_id, 2, 2, 11000).await.unwrap();
    orders.add_line(order_id, 2, 3, 16500).await.unwrap();

    let groups = reports.grouped_lines(order_id).await.unwrap();
    assert_eq!(
        groups,
        vec![LineGroup {
            menu_id: 2,
            total_quantity: 5
        }]
    );
}

#[tokio::test]
async fn test_report_views_cover_one_order() {
    let db = setup().await;
    let orders = StoreOrderRepository::new(db.pool.clone());
    let payments = StorePaymentRepository::new(db.pool.clone());
    let reports = StoreReportRepository::new(db.pool.clone());

    // Rows from another order must not leak into the views.
    let other = orders.create_order().await.unwrap();
    orders.add_line(other, 1, 1, 12500).await.unwrap();

    let order_id = orders.create_order().await.unwrap();
    orders.add_line(order_id, 2, 1, 5500).await.unwrap();
    orders.add_line(order_id, 3, 1, 12000).await.unwrap();
    orders.set_total(order_id, 17500).await.unwrap();
    payments
        .record_payment(order_id, PaymentMethod::Cash, 20000, 2500)
        .await
        .unwrap();

    let lines = reports.order_lines(order_id).await.unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.order_id == order_id));

    let items = reports.ordered_items(order_id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 2);
    assert_eq!(items[1].id, 3);

    let paid = reports.payments(order_id).await.unwrap();
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0].method, PaymentMethod::Cash);
    assert_eq!(paid[0].amount_paid, 20000);
    assert_eq!(paid[0].change, 2500);

    assert!(reports.payments(other).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_subtotal_is_frozen_against_price_changes() {
    let db = setup().await;
    let orders = StoreOrderRepository::new(db.pool.clone());
    let reports = StoreReportRepository::new(db.pool.clone());

    let order_id = orders.create_order().await.unwrap();
    orders.add_line(order_id, 2, 2, 11000).await.unwrap();

    // Menu edits are out of scope for the counter, but the stored
    // subtotal must survive one regardless.
    sqlx::query("UPDATE menu SET price = 9900 WHERE menu_id = 2")
        .execute(&db.pool)
        .await
        .unwrap();

    let lines = reports.order_lines(order_id).await.unwrap();
    assert_eq!(lines[0].subtotal, 11000);
    assert_eq!(orders.total_lines(order_id).await.unwrap(), 11000);
}
