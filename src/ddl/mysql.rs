//! MySQL / MariaDB

use super::DdlDialect;
use crate::model::{GenerationStrategy, IndexDefinition, IndexType};
use crate::schema::{ColumnDef, ColumnType, TableDef};
use crate::util::escape_sql_literal;

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl DdlDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn column_type(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Integer => "INT".to_string(),
            ColumnType::SmallInt => "SMALLINT".to_string(),
            ColumnType::TinyInt => "TINYINT".to_string(),
            ColumnType::Decimal { precision, scale } => format!("DECIMAL({},{})", precision, scale),
            ColumnType::Float => "FLOAT".to_string(),
            ColumnType::Double => "DOUBLE".to_string(),
            ColumnType::Varchar(length) => format!("VARCHAR({})", length),
            ColumnType::Char(length) => format!("CHAR({})", length),
            ColumnType::Text => "LONGTEXT".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time => "TIME".to_string(),
            ColumnType::Timestamp => "DATETIME".to_string(),
            ColumnType::Boolean => "TINYINT(1)".to_string(),
            ColumnType::Uuid => "CHAR(36)".to_string(),
        }
    }

    /// No sequences in MySQL: sequence keys fall back to `AUTO_INCREMENT`.
    fn generation_clause(&self, column: &ColumnDef) -> Option<String> {
        match column.generation {
            GenerationStrategy::AutoIncrement | GenerationStrategy::Sequence { .. }
                if column.column_type.is_integral() =>
            {
                Some("AUTO_INCREMENT".to_string())
            }
            _ => None,
        }
    }

    fn table_options(&self) -> &'static str {
        " ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"
    }

    fn add_comment(&self, table: &TableDef) -> Vec<String> {
        let mut statements = Vec::new();
        if let Some(comment) = &table.comment {
            statements.push(format!(
                "ALTER TABLE {} COMMENT = '{}';",
                self.quote(&table.name),
                escape_sql_literal(comment)
            ));
        }
        for column in &table.columns {
            if let Some(comment) = &column.comment {
                statements.push(format!(
                    "ALTER TABLE {} MODIFY COLUMN {} COMMENT '{}';",
                    self.quote(&table.name),
                    self.column_definition(column),
                    escape_sql_literal(comment)
                ));
            }
        }
        statements
    }

    fn create_index(&self, table_name: &str, index: &IndexDefinition) -> String {
        let kind = match index.index_type {
            IndexType::Unique => "UNIQUE ",
            IndexType::Fulltext => "FULLTEXT ",
            IndexType::Normal => "",
        };
        format!(
            "CREATE {}INDEX {} ON {} ({});",
            kind,
            self.quote(&index.name),
            self.quote(table_name),
            self.quote_list(&index.columns)
        )
    }
}
