//! DDL generation
//!
//! ```text
//! dialect.rs     - DdlDialect trait with ANSI-style defaults
//! mysql.rs       - backticks, AUTO_INCREMENT, ALTER TABLE ... COMMENT
//! postgresql.rs  - identity columns, sequences, COMMENT ON
//! sqlserver.rs   - brackets, IDENTITY(1,1), sp_addextendedproperty
//! sqlite.rs      - inline foreign keys, rowid AUTOINCREMENT
//! writer.rs      - whole-schema statement order
//! ```

mod dialect;
mod mysql;
mod postgresql;
mod sqlite;
mod sqlserver;
mod writer;

pub use dialect::{DdlDialect, TableChange};
pub use mysql::MySqlDialect;
pub use postgresql::PostgreSqlDialect;
pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;
pub use writer::{schema_statements, write_schema, STATEMENT_SEPARATOR};

/// Target database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    MySql,
    PostgreSql,
    SqlServer,
    Sqlite,
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSql),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::SqlServer => "sqlserver",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// The statement builder for this dialect.
    pub fn strategy(&self) -> Box<dyn DdlDialect> {
        match self {
            Dialect::MySql => Box::new(MySqlDialect),
            Dialect::PostgreSql => Box::new(PostgreSqlDialect),
            Dialect::SqlServer => Box::new(SqlServerDialect::default()),
            Dialect::Sqlite => Box::new(SqliteDialect),
        }
    }
}
