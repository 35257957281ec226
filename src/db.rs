use crate::config::DatabaseConfig;
use anyhow::{anyhow, Context, Result};
use deadpool::Runtime;
use diesel::{Connection, PgConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub type DbPool = deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;
pub type DbConnection = deadpool::managed::Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database collaborator: owns the connection pool and creates the declared
/// tables. Referential integrity is enforced here, not in the registry.
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database manager with connection pool and make sure the
    /// schema tables exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .context("DATABASE_URL is not configured")?;

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(url);
        let pool = DbPool::builder(manager)
            .max_size(config.max_connections as usize)
            .runtime(Runtime::Tokio1)
            .build()?;

        let db = Self { pool };

        // Test connection before touching the schema
        db.get_connection().await?;
        info!("Successfully connected to the database");

        apply_schema(url)?;

        Ok(db)
    }

    /// Get a database connection from the pool
    pub async fn get_connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .await
            .map_err(|e| anyhow!("failed to check out a database connection: {e}"))
    }

    /// Get the database connection pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Create the schema's tables by applying the embedded migrations.
fn apply_schema(url: &str) -> Result<()> {
    let mut conn = PgConnection::establish(url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("failed to apply schema migrations: {e}"))?;
    info!("Database schema applied");
    Ok(())
}
