use std::io::{self, Write};
use std::sync::Arc;

use pos_session::SessionController;
use pos_store::{
    app_config::Config, DbClient, StoreMenuRepository, StoreOrderRepository,
    StorePaymentRepository, StoreReportRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pos_cli=info,pos_session=info,pos_store=info".into()),
        )
        // Diagnostics go to stderr; stdout belongs to the counter prompts.
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load()?;

    // The only nonzero exit: no connection, no session.
    let db = match DbClient::new(&config.database.url).await {
        Ok(db) => db,
        Err(e) => {
            println!("Database connection failed: {e}");
            std::process::exit(1);
        }
    };
    println!("Connected to the database successfully!");
    db.migrate().await?;
    tracing::info!("Counter ready, starting order session");

    let controller = SessionController::new(
        Arc::new(StoreMenuRepository::new(db.pool.clone())),
        Arc::new(StoreOrderRepository::new(db.pool.clone())),
        Arc::new(StorePaymentRepository::new(db.pool.clone())),
        Arc::new(StoreReportRepository::new(db.pool.clone())),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    controller.run(&mut input, &mut output).await?;
    writeln!(output, "\nThank you for ordering!")?;

    Ok(())
}
