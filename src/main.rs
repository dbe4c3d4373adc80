use std::env;
use std::sync::Arc;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::scheduler::{LoggingSink, ScheduleBook, spawn_scheduler};
use attendance_engine::store::InMemoryStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance_engine=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("ATTENDANCE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("ATTENDANCE_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        config_dir = %config_dir,
        end_of_work_day = %config.workday().end_of_work_day_text(),
        regular_hours_cap = %config.workday().regular_hours_cap,
        "Configuration loaded"
    );

    let schedules = ScheduleBook::with_schedules(config.schedules().to_vec())?;
    let state = AppState::new(config, InMemoryStore::with_demo_employees(), schedules);

    spawn_scheduler(
        state.schedules().clone(),
        state.tracker().clone(),
        Arc::new(LoggingSink),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Attendance engine listening");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
