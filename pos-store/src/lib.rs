pub mod app_config;
pub mod database;
pub mod menu_repo;
pub mod order_repo;
pub mod payment_repo;
pub mod report_repo;

pub use database::DbClient;
pub use menu_repo::StoreMenuRepository;
pub use order_repo::StoreOrderRepository;
pub use payment_repo::StorePaymentRepository;
pub use report_repo::StoreReportRepository;
