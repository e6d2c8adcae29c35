//! Builds table definitions from the entity model

use super::{ColumnDef, ColumnType, SchemaDef, TableDef};
use crate::diagnostics::Diagnostic;
use crate::keys::{derive_keys, ForeignKeyColumn, TableKeys};
use crate::model::{DbField, EntityClass, EntityModel, FieldOrder, GenerationStrategy};
use crate::relations::scan_relations;

/// Options controlling schema derivation
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOptions {
    pub field_order: FieldOrder,
}

/// Derives the schema of every table entity in the model, plus junction tables.
pub fn build_schema<'a>(model: &'a EntityModel, options: &SchemaOptions) -> SchemaDef<'a> {
    let mut schema = SchemaDef::default();

    for class in model.classes().iter().filter(|c| c.has_table()) {
        let (table, diagnostics) = build_table(model, class, options.field_order);
        schema.tables.push(table);
        schema.diagnostics.extend(diagnostics);
    }

    let scan = scan_relations(model, options.field_order);
    for skipped in &scan.unresolved {
        schema.diagnostics.push(Diagnostic::warning(
            skipped.class.table_name(),
            format!(
                "many-to-many '{}' targets '{}', which is not a known entity; relationship skipped",
                skipped.field.name,
                skipped.target.as_deref().unwrap_or("<unknown>")
            ),
        ));
    }
    schema.junction_tables = scan.junction_tables;

    schema
}

/// Derives one entity's table.
pub fn build_table(
    model: &EntityModel,
    class: &EntityClass,
    order: FieldOrder,
) -> (TableDef, Vec<Diagnostic>) {
    let keys = derive_keys(model, class, order);
    let pk_field = keys.primary_key;

    let mut table = TableDef::new(keys.table_name.clone());
    table.entity = class.qualified_name.clone();
    table.comment = class.comment();

    let mut diagnostics = Vec::new();
    for field in model.all_db_fields(class, order) {
        let is_pk = pk_field.is_some_and(|pk| std::ptr::eq(pk.field, field.field));
        let column = match keys.foreign_key_for(&field.name) {
            Some(fk) => reference_column(model, fk, order),
            None if is_pk => primary_key_column(&keys, field),
            None => plain_column(field),
        };
        if is_pk {
            table.primary_key = Some(column.name.clone());
            if let Some(generator) = field.custom_generator_type() {
                diagnostics.push(Diagnostic::info(
                    keys.table_name.clone(),
                    format!(
                        "primary key '{}' is generated by '{}' in the application; no database default emitted",
                        field.name, generator
                    ),
                ));
            }
        }
        table.columns.push(column);
    }

    table.indexes = keys.indexes.clone();
    table.foreign_keys = keys.foreign_keys.iter().map(|fk| fk.info.clone()).collect();

    let mut all = keys.diagnostics;
    all.extend(diagnostics);
    (table, all)
}

fn plain_column(field: DbField<'_>) -> ColumnDef {
    ColumnDef {
        name: field.column_name(),
        column_type: ColumnType::for_field(&field),
        nullable: field.is_nullable(),
        primary_key: false,
        generation: GenerationStrategy::None,
        sequence: None,
        comment: field.comment(),
    }
}

fn primary_key_column(keys: &TableKeys<'_>, field: DbField<'_>) -> ColumnDef {
    let name = field.column_name();
    let generation = field.generation();
    let sequence = match &generation {
        GenerationStrategy::Sequence { name: explicit } => Some(
            explicit
                .clone()
                .unwrap_or_else(|| format!("{}_{}_seq", keys.table_name, name)),
        ),
        _ => None,
    };
    ColumnDef {
        column_type: ColumnType::for_field(&field),
        nullable: false,
        primary_key: true,
        generation,
        sequence,
        comment: field.comment(),
        name,
    }
}

/// Column holding a reference: typed like the referenced key.
fn reference_column(model: &EntityModel, fk: &ForeignKeyColumn<'_>, order: FieldOrder) -> ColumnDef {
    let column_type = crate::keys::primary_key(model, fk.target, order)
        .map(|pk| ColumnType::for_field(&pk))
        .unwrap_or(ColumnType::BigInt);
    let optional = fk
        .field
        .markers
        .iter()
        .find_map(|m| m.attribute("optional"));
    let nullable = match optional {
        Some(v) if v.trim().eq_ignore_ascii_case("false") => false,
        _ => fk.field.is_nullable(),
    };
    ColumnDef {
        name: fk.info.column_name.clone(),
        column_type,
        nullable,
        primary_key: false,
        generation: GenerationStrategy::None,
        sequence: None,
        comment: fk.field.comment(),
    }
}
