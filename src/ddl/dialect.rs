//! The dialect strategy trait.
//!
//! Default method bodies produce ANSI-style DDL; each dialect overrides only
//! what its grammar does differently.

use crate::model::{EntityField, ForeignKeyInfo, IndexDefinition, IndexType, JunctionTable, ReferentialAction};
use crate::schema::{ColumnDef, ColumnType, SchemaDef, TableDef};
use crate::util::escape_sql_literal;

use super::writer::write_schema;

/// A single change applied with `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub enum TableChange {
    RenameTo(String),
    AddColumn(ColumnDef),
    DropColumn(String),
    ModifyColumn(ColumnDef),
}

/// DDL syntax of one target database.
pub trait DdlDialect: Send + Sync {
    /// Short lowercase name (e.g., "postgresql")
    fn name(&self) -> &'static str;

    /// Opening and closing identifier quote characters.
    fn quote_chars(&self) -> (char, char) {
        ('`', '`')
    }

    fn quote(&self, identifier: &str) -> String {
        let (open, close) = self.quote_chars();
        let escaped = identifier.replace(close, &format!("{}{}", close, close));
        format!("{}{}{}", open, escaped, close)
    }

    fn quote_list(&self, identifiers: &[String]) -> String {
        identifiers
            .iter()
            .map(|c| self.quote(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn column_type(&self, column_type: &ColumnType) -> String;

    /// Column type for a field, from its type category, length, precision and scale.
    fn column_type_for_field(&self, field: &EntityField) -> String {
        self.column_type(&ColumnType::for_field(field))
    }

    /// Identity, sequence default or similar clause appended after nullability.
    fn generation_clause(&self, _column: &ColumnDef) -> Option<String> {
        None
    }

    /// True when the column carries its own `PRIMARY KEY` and the table-level clause is omitted.
    fn inline_primary_key(&self, _column: &ColumnDef) -> bool {
        false
    }

    /// True when foreign keys must be declared inside `CREATE TABLE`.
    fn inline_foreign_keys(&self) -> bool {
        false
    }

    /// Text appended after the closing parenthesis of `CREATE TABLE`.
    fn table_options(&self) -> &'static str {
        ""
    }

    fn referential_action(&self, action: ReferentialAction) -> &'static str {
        action.as_sql()
    }

    fn column_definition(&self, column: &ColumnDef) -> String {
        let mut def = format!(
            "{} {}",
            self.quote(&column.name),
            self.column_type(&column.column_type)
        );
        if !column.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(clause) = self.generation_clause(column) {
            def.push(' ');
            def.push_str(&clause);
        }
        def
    }

    /// `CONSTRAINT name FOREIGN KEY (col) REFERENCES table (col) [ON DELETE ..] [ON UPDATE ..]`
    fn foreign_key_clause(&self, fk: &ForeignKeyInfo) -> String {
        let mut clause = format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            self.quote(&fk.name),
            self.quote(&fk.column_name),
            self.quote(&fk.referenced_table),
            self.quote(&fk.referenced_column)
        );
        if let Some(action) = fk.on_delete {
            clause.push_str(" ON DELETE ");
            clause.push_str(self.referential_action(action));
        }
        if let Some(action) = fk.on_update {
            clause.push_str(" ON UPDATE ");
            clause.push_str(self.referential_action(action));
        }
        clause
    }

    fn create_table(&self, table: &TableDef) -> String {
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();

        if let Some(pk) = table.primary_key_column() {
            if !self.inline_primary_key(pk) {
                lines.push(format!("PRIMARY KEY ({})", self.quote(&pk.name)));
            }
        }
        if self.inline_foreign_keys() {
            lines.extend(table.foreign_keys.iter().map(|fk| self.foreign_key_clause(fk)));
        }

        format!(
            "CREATE TABLE {} (\n  {}\n){};",
            self.quote(&table.name),
            lines.join(",\n  "),
            self.table_options()
        )
    }

    fn drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", self.quote(table_name))
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
            TableChange::ModifyColumn(column) => {
                format!("ALTER TABLE {} MODIFY COLUMN {};", table, self.column_definition(column))
            }
        }
    }

    fn add_column(&self, table_name: &str, column: &ColumnDef) -> String {
        self.alter_table(table_name, &TableChange::AddColumn(column.clone()))
    }

    fn drop_column(&self, table_name: &str, column_name: &str) -> String {
        self.alter_table(table_name, &TableChange::DropColumn(column_name.to_string()))
    }

    fn modify_column(&self, table_name: &str, column: &ColumnDef) -> String {
        self.alter_table(table_name, &TableChange::ModifyColumn(column.clone()))
    }

    fn add_foreign_key(&self, table_name: &str, fk: &ForeignKeyInfo) -> String {
        format!(
            "ALTER TABLE {} ADD {};",
            self.quote(table_name),
            self.foreign_key_clause(fk)
        )
    }

    /// Table and column comment statements; empty when nothing is commented.
    fn add_comment(&self, table: &TableDef) -> Vec<String> {
        let mut statements = Vec::new();
        if let Some(comment) = &table.comment {
            statements.push(format!(
                "COMMENT ON TABLE {} IS '{}';",
                self.quote(&table.name),
                escape_sql_literal(comment)
            ));
        }
        for column in &table.columns {
            if let Some(comment) = &column.comment {
                statements.push(format!(
                    "COMMENT ON COLUMN {}.{} IS '{}';",
                    self.quote(&table.name),
                    self.quote(&column.name),
                    escape_sql_literal(comment)
                ));
            }
        }
        statements
    }

    fn create_index(&self, table_name: &str, index: &IndexDefinition) -> String {
        let kind = match index.index_type {
            IndexType::Unique => "UNIQUE ",
            IndexType::Normal | IndexType::Fulltext => "",
        };
        format!(
            "CREATE {}INDEX {} ON {} ({});",
            kind,
            self.quote(&index.name),
            self.quote(table_name),
            self.quote_list(&index.columns)
        )
    }

    /// `CREATE SEQUENCE`, for dialects that have sequences.
    fn create_sequence(&self, _sequence_name: &str) -> Option<String> {
        None
    }

    /// Junction table with a composite primary key over both key columns.
    fn create_junction_table(&self, junction: &JunctionTable<'_>) -> String {
        let mut lines = vec![
            format!(
                "{} {} NOT NULL",
                self.quote(&junction.left_column),
                self.column_type(&junction.left_key_type)
            ),
            format!(
                "{} {} NOT NULL",
                self.quote(&junction.right_column),
                self.column_type(&junction.right_key_type)
            ),
            format!(
                "PRIMARY KEY ({}, {})",
                self.quote(&junction.left_column),
                self.quote(&junction.right_column)
            ),
        ];
        if self.inline_foreign_keys() {
            lines.extend(
                junction_foreign_key_infos(junction)
                    .iter()
                    .map(|fk| self.foreign_key_clause(fk)),
            );
        }
        format!(
            "CREATE TABLE {} (\n  {}\n){};",
            self.quote(&junction.table_name),
            lines.join(",\n  "),
            self.table_options()
        )
    }

    /// The two foreign keys of a junction table, named `fk_{table}_{column}`.
    fn junction_foreign_keys(&self, junction: &JunctionTable<'_>) -> Vec<String> {
        if self.inline_foreign_keys() {
            return Vec::new();
        }
        junction_foreign_key_infos(junction)
            .iter()
            .map(|fk| self.add_foreign_key(&junction.table_name, fk))
            .collect()
    }

    /// The whole schema: every table before any constraint or comment.
    fn generate_all(&self, schema: &SchemaDef<'_>) -> String {
        write_schema(self, schema)
    }
}

pub(crate) fn junction_foreign_key_infos(junction: &JunctionTable<'_>) -> [ForeignKeyInfo; 2] {
    let fk = |column: &str, table: &str, referenced: &str| ForeignKeyInfo {
        name: format!("fk_{}_{}", junction.table_name, column),
        column_name: column.to_string(),
        referenced_table: table.to_string(),
        referenced_column: referenced.to_string(),
        on_delete: None,
        on_update: None,
    };
    [
        fk(
            &junction.left_column,
            &junction.left_table,
            &junction.left_referenced_column,
        ),
        fk(
            &junction.right_column,
            &junction.right_table,
            &junction.right_referenced_column,
        ),
    ]
}
