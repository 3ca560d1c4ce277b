//! SQLite connection pooling and schema migrations.

use std::time::Duration;

use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::{RunQueryDsl, connection::SimpleConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies per-connection pragmas. SQLite keeps `foreign_keys` off unless
/// every connection asks for it, and cascade deletes depend on it.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: Duration::from_secs(5),
        }))
        .build(manager)?;
    Ok(pool)
}

/// Run every embedded migration that has not been applied yet.
pub fn run_migrations(pool: &DbPool) -> RepositoryResult<()> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::Migration(e.to_string()))?;
    Ok(())
}

/// Whether foreign key enforcement is active on the given connection.
pub fn foreign_keys_enabled(conn: &mut SqliteConnection) -> RepositoryResult<bool> {
    #[derive(diesel::QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = diesel::sql_types::Integer)]
        foreign_keys: i32,
    }

    let row = diesel::sql_query("PRAGMA foreign_keys").get_result::<Pragma>(conn)?;
    Ok(row.foreign_keys == 1)
}
