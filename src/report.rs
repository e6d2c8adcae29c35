//! Human-readable description of a derived schema

use std::fmt::Write;

use crate::ddl::DdlDialect;
use crate::model::GenerationStrategy;
use crate::schema::SchemaDef;

/// Render the schema report for the `describe` command.
pub fn format_report(schema: &SchemaDef<'_>, dialect: &dyn DdlDialect) -> String {
    let mut out = String::new();
    let _ = write_report(&mut out, schema, dialect);
    out
}

fn write_report(out: &mut String, schema: &SchemaDef<'_>, dialect: &dyn DdlDialect) -> std::fmt::Result {
    writeln!(out, "=== Schema ({}) ===", dialect.name())?;
    writeln!(
        out,
        "Tables: {}, junction tables: {}",
        schema.tables.len(),
        schema.junction_tables.len()
    )?;
    writeln!(out)?;

    for table in &schema.tables {
        writeln!(out, "--- {} ({}) ---", table.name, table.entity)?;
        if let Some(comment) = &table.comment {
            writeln!(out, "Comment: {}", comment)?;
        }
        for column in &table.columns {
            let mut flags = Vec::new();
            if column.primary_key {
                flags.push("PK".to_string());
            }
            if !column.nullable {
                flags.push("NOT NULL".to_string());
            }
            match &column.generation {
                GenerationStrategy::None => {}
                generation => flags.push(format!("{:?}", generation)),
            }
            write!(
                out,
                "  {} {}",
                column.name,
                dialect.column_type(&column.column_type)
            )?;
            if !flags.is_empty() {
                write!(out, " [{}]", flags.join(", "))?;
            }
            if let Some(comment) = &column.comment {
                write!(out, " -- {}", comment)?;
            }
            writeln!(out)?;
        }
        for index in &table.indexes {
            writeln!(
                out,
                "  index {} {:?} ({})",
                index.name,
                index.index_type,
                index.columns.join(", ")
            )?;
        }
        for fk in &table.foreign_keys {
            writeln!(
                out,
                "  foreign key {}: {} -> {}({})",
                fk.name, fk.column_name, fk.referenced_table, fk.referenced_column
            )?;
        }
        writeln!(out)?;
    }

    if !schema.junction_tables.is_empty() {
        writeln!(out, "--- Junction tables ---")?;
        for junction in &schema.junction_tables {
            writeln!(
                out,
                "  {}: {}.{} <-> {}.{} (from {}.{})",
                junction.table_name,
                junction.left_table,
                junction.left_column,
                junction.right_table,
                junction.right_column,
                junction.left_entity.simple_name,
                junction.field.name
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Diagnostics ({}):", schema.diagnostics.len())?;
    if schema.diagnostics.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        for diagnostic in &schema.diagnostics {
            writeln!(out, "  {}", diagnostic)?;
        }
    }

    Ok(())
}
