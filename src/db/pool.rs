use crate::config::Config;
use crate::db::schema::create_tables;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    connect(&config.database_url(), config.database.max_connections).await
}

/// Opens a pool on `url` and creates any missing tables.
///
/// In-memory SQLite databases live as long as their connection, so callers
/// using `sqlite::memory:` should pass `max_connections = 1`.
pub async fn connect(url: &str, max_connections: u32) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(max_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(options).await?;
    log::info!(
        "Connected to {:?} database (max {} connections)",
        db.get_database_backend(),
        max_connections
    );

    create_tables(&db).await?;

    Ok(db)
}
