use anyhow::{Result, anyhow};
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::config::config_model::Database;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

pub fn establish_connection(database: &Database) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(&database.url);
    let pool = Pool::builder()
        .max_size(database.max_connections)
        .build(manager)?;
    Ok(pool)
}

/// Applies every embedded migration that has not run yet.
pub fn run_migrations(db_pool: &PgPoolSquad) -> Result<()> {
    let mut conn = db_pool.get()?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("failed to run migrations: {}", err))?;

    for version in &applied {
        info!(%version, "postgres: migration applied");
    }

    Ok(())
}
