//! Microsoft SQL Server

use super::{DdlDialect, TableChange};
use crate::model::{GenerationStrategy, ReferentialAction};
use crate::schema::{ColumnDef, ColumnType, TableDef};
use crate::util::escape_sql_literal;

/// Longest NVARCHAR that is not `NVARCHAR(MAX)`.
const MAX_NVARCHAR_LENGTH: u32 = 4000;

#[derive(Debug, Clone)]
pub struct SqlServerDialect {
    /// Schema used for extended properties
    pub schema: String,
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self {
            schema: "dbo".to_string(),
        }
    }
}

impl SqlServerDialect {
    fn describe(&self, comment: &str, table: &str, column: Option<&str>) -> String {
        let mut statement = format!(
            "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{}', \
             @level0type = N'SCHEMA', @level0name = N'{}', \
             @level1type = N'TABLE', @level1name = N'{}'",
            escape_sql_literal(comment),
            escape_sql_literal(&self.schema),
            escape_sql_literal(table)
        );
        if let Some(column) = column {
            statement.push_str(&format!(
                ", @level2type = N'COLUMN', @level2name = N'{}'",
                escape_sql_literal(column)
            ));
        }
        statement.push(';');
        statement
    }
}

impl DdlDialect for SqlServerDialect {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_chars(&self) -> (char, char) {
        ('[', ']')
    }

    fn column_type(&self, column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Integer => "INT".to_string(),
            ColumnType::SmallInt => "SMALLINT".to_string(),
            ColumnType::TinyInt => "TINYINT".to_string(),
            ColumnType::Decimal { precision, scale } => format!("DECIMAL({},{})", precision, scale),
            ColumnType::Float => "REAL".to_string(),
            ColumnType::Double => "FLOAT".to_string(),
            ColumnType::Varchar(length) if *length > MAX_NVARCHAR_LENGTH => {
                "NVARCHAR(MAX)".to_string()
            }
            ColumnType::Varchar(length) => format!("NVARCHAR({})", length),
            ColumnType::Char(length) => format!("NCHAR({})", length),
            ColumnType::Text => "NVARCHAR(MAX)".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time => "TIME".to_string(),
            ColumnType::Timestamp => "DATETIME2".to_string(),
            ColumnType::Boolean => "BIT".to_string(),
            ColumnType::Uuid => "UNIQUEIDENTIFIER".to_string(),
        }
    }

    fn generation_clause(&self, column: &ColumnDef) -> Option<String> {
        match (&column.generation, &column.sequence) {
            (GenerationStrategy::Sequence { .. }, Some(sequence)) => Some(format!(
                "DEFAULT (NEXT VALUE FOR {})",
                self.quote(sequence)
            )),
            (GenerationStrategy::AutoIncrement, _) if column.column_type.is_integral() => {
                Some("IDENTITY(1,1)".to_string())
            }
            _ => None,
        }
    }

    /// RESTRICT is not T-SQL; NO ACTION has the same effect.
    fn referential_action(&self, action: ReferentialAction) -> &'static str {
        match action {
            ReferentialAction::Restrict => ReferentialAction::NoAction.as_sql(),
            other => other.as_sql(),
        }
    }

    fn create_sequence(&self, sequence_name: &str) -> Option<String> {
        Some(format!(
            "CREATE SEQUENCE {} AS BIGINT START WITH 1 INCREMENT BY 1;",
            self.quote(sequence_name)
        ))
    }

    fn alter_table(&self, table_name: &str, change: &TableChange) -> String {
        let table = self.quote(table_name);
        match change {
            TableChange::RenameTo(new_name) => format!(
                "EXEC sp_rename N'{}', N'{}';",
                escape_sql_literal(table_name),
                escape_sql_literal(new_name)
            ),
            TableChange::AddColumn(column) => {
                format!("ALTER TABLE {} ADD {};", table, self.column_definition(column))
            }
            TableChange::DropColumn(column) => {
                format!("ALTER TABLE {} DROP COLUMN {};", table, self.quote(column))
            }
            TableChange::ModifyColumn(column) => {
                // ALTER COLUMN cannot carry IDENTITY or DEFAULT
                let mut def = format!(
                    "{} {}",
                    self.quote(&column.name),
                    self.column_type(&column.column_type)
                );
                def.push_str(if column.nullable { " NULL" } else { " NOT NULL" });
                format!("ALTER TABLE {} ALTER COLUMN {};", table, def)
            }
        }
    }

    fn add_comment(&self, table: &TableDef) -> Vec<String> {
        let mut statements = Vec::new();
        if let Some(comment) = &table.comment {
            statements.push(self.describe(comment, &table.name, None));
        }
        for column in &table.columns {
            if let Some(comment) = &column.comment {
                statements.push(self.describe(comment, &table.name, Some(&column.name)));
            }
        }
        statements
    }
}
