pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::{
    config::config_loader,
    infrastructure::{axum_http::http_serve, postgres::postgres_connection},
};

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("shop-catalog")?;

    let dotenvy_env = config_loader::load()?;
    info!("config: env has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database)?;
    info!("postgres: connection pool has been established");

    postgres_connection::run_migrations(&postgres_pool)?;

    http_serve::start(Arc::new(dotenvy_env), Arc::new(postgres_pool)).await?;

    Ok(())
}
