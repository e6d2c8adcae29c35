//! SQLite
//!
//! SQLite cannot add constraints to an existing table, so foreign keys are
//! declared inside `CREATE TABLE`. It has no column comments and no sequences.

use super::{DdlDialect, TableChange};
use crate::model::{ForeignKeyInfo, GenerationStrategy};
use crate::schema::{ColumnDef, ColumnType, TableDef};

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    fn is_rowid_alias(column: &ColumnDef) -> bool {
        column.primary_key
            && column.column_type.is_integral()
            && matches!(
                column.generation,
                GenerationStrategy::AutoIncrement | GenerationStrategy::Sequence { .. }
            )
    }
}

impl DdlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn quote_chars(&self) -> (char, char) {
        ('"', '"')
    }

    fn column_type(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::BigInt
            | ColumnType::Integer
            | ColumnType::SmallInt
            | ColumnType::TinyInt
            | ColumnType::Boolean => "INTEGER".to_string(),
            ColumnType::Decimal { precision, scale } => format!("NUMERIC({},{})", precision, scale),
            ColumnType::Float | ColumnType::Double => "REAL".to_string(),
            ColumnType::Varchar(length) => format!("VARCHAR({})", length),
            ColumnType::Char(length) => format!("CHAR({})", length),
            ColumnType::Text | ColumnType::Uuid => "TEXT".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time => "TIME".to_string(),
            ColumnType::Timestamp => "DATETIME".to_string(),
        }
    }

    fn column_definition(&self, column: &ColumnDef) -> String {
        if Self::is_rowid_alias(column) {
            return format!(
                "{} INTEGER PRIMARY KEY AUTOINCREMENT",
                self.quote(&column.name)
            );
        }
        let mut def = format!(
            "{} {}",
            self.quote(&column.name),
            self.column_type(&column.column_type)
        );
        if !column.nullable {
            def.push_str(" NOT NULL");
        }
        def
    }

    fn inline_primary_key(&self, column: &ColumnDef) -> bool {
        Self::is_rowid_alias(column)
    }

    fn inline_foreign_keys(&self) -> bool {
        true
    }

    fn alter_table(&self, table_name: &str, change: &TableChange) -> String {
        let table = self.quote(table_name);
        match change {
            TableChange::RenameTo(new_name) => {
                format!("ALTER TABLE {} RENAME TO {};", table, self.quote(new_name))
            }
            TableChange::AddColumn(column) => {
                format!("ALTER TABLE {} ADD COLUMN {};", table, self.column_definition(column))
            }
            TableChange::DropColumn(column) => {
                format!("ALTER TABLE {} DROP COLUMN {};", table, self.quote(column))
            }
            TableChange::ModifyColumn(column) => format!(
                "-- SQLite cannot alter column {} on {}; rebuild the table instead",
                self.quote(&column.name),
                table
            ),
        }
    }

    fn add_foreign_key(&self, table_name: &str, fk: &ForeignKeyInfo) -> String {
        format!(
            "-- SQLite cannot add constraint {} to {}; declare it in CREATE TABLE instead",
            self.quote(&fk.name),
            self.quote(table_name)
        )
    }

    fn add_comment(&self, _table: &TableDef) -> Vec<String> {
        Vec::new()
    }
}
