//! PostgreSQL

use super::{DdlDialect, TableChange};
use crate::model::GenerationStrategy;
use crate::schema::{ColumnDef, ColumnType};
use crate::util::escape_sql_literal;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlDialect;

impl DdlDialect for PostgreSqlDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn quote_chars(&self) -> (char, char) {
        ('"', '"')
    }

    fn column_type(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::SmallInt | ColumnType::TinyInt => "SMALLINT".to_string(),
            ColumnType::Decimal { precision, scale } => format!("NUMERIC({},{})", precision, scale),
            ColumnType::Float => "REAL".to_string(),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Varchar(length) => format!("VARCHAR({})", length),
            ColumnType::Char(length) => format!("CHAR({})", length),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time => "TIME".to_string(),
            ColumnType::Timestamp => "TIMESTAMP".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
        }
    }

    fn generation_clause(&self, column: &ColumnDef) -> Option<String> {
        match (&column.generation, &column.sequence) {
            // regclass literal keeps the quoted name's case
            (GenerationStrategy::Sequence { .. }, Some(sequence)) => Some(format!(
                "DEFAULT nextval('{}')",
                escape_sql_literal(&self.quote(sequence))
            )),
            (GenerationStrategy::AutoIncrement, _) if column.column_type.is_integral() => {
                Some("GENERATED BY DEFAULT AS IDENTITY".to_string())
            }
            _ => None,
        }
    }

    fn create_sequence(&self, sequence_name: &str) -> Option<String> {
        Some(format!(
            "CREATE SEQUENCE IF NOT EXISTS {};",
            self.quote(sequence_name)
        ))
    }

    fn alter_table(&self, table_name: &str, change: &TableChange) -> String {
        let table = self.quote(table_name);
        match change {
            TableChange::ModifyColumn(column) => {
                let name = self.quote(&column.name);
                let nullability = if column.nullable {
                    "DROP NOT NULL"
                } else {
                    "SET NOT NULL"
                };
                format!(
                    "ALTER TABLE {} ALTER COLUMN {} TYPE {}, ALTER COLUMN {} {};",
                    table,
                    name,
                    self.column_type(&column.column_type),
                    name,
                    nullability
                )
            }
            TableChange::RenameTo(new_name) => {
                format!("ALTER TABLE {} RENAME TO {};", table, self.quote(new_name))
            }
            TableChange::AddColumn(column) => {
                format!("ALTER TABLE {} ADD COLUMN {};", table, self.column_definition(column))
            }
            TableChange::DropColumn(column) => {
                format!("ALTER TABLE {} DROP COLUMN {};", table, self.quote(column))
            }
        }
    }
}
