//! Database connections and embedded migrations.
//!
//! Both supported backends hide behind [`AnyConnection`]; the DSN scheme
//! decides which one is opened. Migrations are kept per dialect because the
//! id-column DDL differs between SQLite and PostgreSQL.

use diesel::{Connection, ConnectionError, PgConnection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use url::Url;

pub const SQLITE_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("migrations/sqlite");
pub const POSTGRESQL_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("migrations/postgresql");

#[derive(diesel::MultiConnection)]
pub enum AnyConnection {
    Sqlite(SqliteConnection),
    Postgresql(PgConnection),
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid database DSN: {0}")]
    InvalidDsn(#[from] url::ParseError),
    #[error("unsupported DB scheme: {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Opens a connection for the given DSN.
///
/// `sqlite:` DSNs address an embedded database file by path; the literal path
/// `/:memory:` opens an in-memory database instead. `postgres:` and
/// `postgresql:` DSNs are handed to libpq unchanged. Anything else is
/// rejected up front.
pub fn get_db_conn(dsn: &str) -> Result<AnyConnection, ConnectError> {
    let url = Url::parse(dsn)?;
    match url.scheme() {
        "sqlite" => {
            let path = match url.path() {
                "/:memory:" => ":memory:",
                path => path,
            };
            Ok(AnyConnection::Sqlite(SqliteConnection::establish(path)?))
        }
        "postgres" | "postgresql" => {
            Ok(AnyConnection::Postgresql(PgConnection::establish(dsn)?))
        }
        other => Err(ConnectError::UnsupportedScheme(other.to_string())),
    }
}

/// Brings the schema of the connected database up to date.
pub fn run_migrations(
    conn: &mut AnyConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    match conn {
        AnyConnection::Sqlite(conn) => {
            conn.run_pending_migrations(SQLITE_MIGRATIONS)?;
        }
        AnyConnection::Postgresql(conn) => {
            conn.run_pending_migrations(POSTGRESQL_MIGRATIONS)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_in_memory_sqlite() {
        assert!(matches!(
            get_db_conn("sqlite:/:memory:"),
            Ok(AnyConnection::Sqlite(_))
        ));
    }

    #[test]
    fn rejects_unsupported_scheme() {
        match get_db_conn("mysql://root@localhost/crm") {
            Err(ConnectError::UnsupportedScheme(scheme)) => {
                assert_eq!(scheme, "mysql")
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("mysql DSN should have been rejected"),
        }
    }

    #[test]
    fn rejects_malformed_dsn() {
        assert!(matches!(
            get_db_conn("definitely not a dsn"),
            Err(ConnectError::InvalidDsn(_))
        ));
    }
}
