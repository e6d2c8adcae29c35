//! Whole-schema statement ordering.

use indexmap::IndexSet;

use super::DdlDialect;
use crate::schema::SchemaDef;

/// Separator between statements in generated scripts.
pub const STATEMENT_SEPARATOR: &str = "\n\n";

/// Renders a schema as one script.
pub fn write_schema<D: DdlDialect + ?Sized>(dialect: &D, schema: &SchemaDef<'_>) -> String {
    schema_statements(dialect, schema).join(STATEMENT_SEPARATOR)
}

/// All statements for a schema, in execution order.
///
/// Sequences and every `CREATE TABLE` come first, then indexes, then
/// constraints and comments. Entities may reference each other in any
/// declaration order, so no constraint is emitted before all tables exist.
pub fn schema_statements<D: DdlDialect + ?Sized>(dialect: &D, schema: &SchemaDef<'_>) -> Vec<String> {
    let mut statements = Vec::new();

    let sequences: IndexSet<&str> = schema.tables.iter().flat_map(|t| t.sequences()).collect();
    statements.extend(sequences.iter().filter_map(|s| dialect.create_sequence(s)));

    statements.extend(schema.tables.iter().map(|t| dialect.create_table(t)));
    statements.extend(
        schema
            .junction_tables
            .iter()
            .map(|j| dialect.create_junction_table(j)),
    );

    for table in &schema.tables {
        statements.extend(
            table
                .indexes
                .iter()
                .map(|index| dialect.create_index(&table.name, index)),
        );
    }

    for table in &schema.tables {
        if !dialect.inline_foreign_keys() {
            statements.extend(
                table
                    .foreign_keys
                    .iter()
                    .map(|fk| dialect.add_foreign_key(&table.name, fk)),
            );
        }
        statements.extend(dialect.add_comment(table));
    }

    for junction in &schema.junction_tables {
        statements.extend(dialect.junction_foreign_keys(junction));
    }

    statements
}
