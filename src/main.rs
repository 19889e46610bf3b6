// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use taxi_service::config::settings::Settings;
use taxi_service::infrastructure::database::connection;
use taxi_service::infrastructure::metrics;
use taxi_service::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use taxi_service::presentation::routes;
use taxi_service::utils::telemetry;
use taxi_service::workers::session_cleanup_worker::SessionCleanupWorker;
use tokio::net::TcpListener;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(&settings.logging);
    info!("Starting taxi-service...");
    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!(
        "Database connection established ({})",
        connection::redact(&settings.database.url)
    );

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Start background workers
    SessionCleanupWorker::new(Arc::new(SessionRepositoryImpl::new(db.clone()))).start();

    // 5. Build router and serve
    let app = routes::build_router(db, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
