//! Primary key, index and foreign key derivation

mod foreign_keys;
mod indexes;

pub use foreign_keys::ForeignKeyColumn;
pub use indexes::derive_indexes;

use crate::diagnostics::Diagnostic;
use crate::model::{DbField, EntityClass, EntityModel, FieldOrder, IndexDefinition};
use foreign_keys::{reference, Reference};

/// Keys and indexes of one entity table.
#[derive(Debug, Clone)]
pub struct TableKeys<'a> {
    pub table_name: String,
    pub primary_key: Option<DbField<'a>>,
    /// Every other database field, in column order
    pub non_primary: Vec<DbField<'a>>,
    pub indexes: Vec<IndexDefinition>,
    pub foreign_keys: Vec<ForeignKeyColumn<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TableKeys<'_> {
    pub fn primary_key_column(&self) -> Option<String> {
        self.primary_key.map(|f| f.column_name())
    }

    /// Foreign key owned by the given field, if any.
    pub fn foreign_key_for(&self, field_name: &str) -> Option<&ForeignKeyColumn<'_>> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.field.name == field_name)
    }
}

/// The primary key field: the first candidate in column order.
pub fn primary_key<'a>(
    model: &'a EntityModel,
    class: &'a EntityClass,
    order: FieldOrder,
) -> Option<DbField<'a>> {
    model.primary_key_candidates(class, order).into_iter().next()
}

/// Derives primary key, non-primary columns, unique indexes and foreign keys.
///
/// Several primary-key candidates, a missing primary key and unresolvable
/// association targets are reported as diagnostics.
pub fn derive_keys<'a>(model: &'a EntityModel, class: &'a EntityClass, order: FieldOrder) -> TableKeys<'a> {
    let table_name = class.table_name();
    let fields = model.all_db_fields(class, order);
    let mut diagnostics = Vec::new();

    let candidates: Vec<&DbField<'a>> = fields.iter().filter(|f| f.is_primary_key()).collect();
    let primary_key = candidates.first().map(|f| **f);
    match candidates.as_slice() {
        [] => diagnostics.push(Diagnostic::warning(
            &table_name,
            format!("{} declares no primary key", class.qualified_name),
        )),
        [_] => {}
        [chosen, rest @ ..] => diagnostics.push(Diagnostic::warning(
            &table_name,
            format!(
                "multiple primary key candidates on {}; using '{}', ignoring {}",
                class.qualified_name,
                chosen.name,
                rest.iter()
                    .map(|f| format!("'{}'", f.name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )),
    }

    let non_primary: Vec<DbField<'a>> = fields
        .iter()
        .filter(|f| primary_key.map_or(true, |pk| !std::ptr::eq(pk.field, f.field)))
        .copied()
        .collect();

    let (indexes, index_diagnostics) = derive_indexes(&table_name, &non_primary);
    diagnostics.extend(index_diagnostics);

    let mut foreign_keys = Vec::new();
    for field in &non_primary {
        match reference(model, &table_name, *field, order) {
            Reference::None => {}
            Reference::Resolved(fk) => foreign_keys.push(fk),
            Reference::Unresolved => diagnostics.push(Diagnostic::warning(
                &table_name,
                format!(
                    "association '{}' targets '{}', which is not a known entity; emitted as a plain column",
                    field.name, field.type_name
                ),
            )),
        }
    }

    TableKeys {
        table_name,
        primary_key,
        non_primary,
        indexes,
        foreign_keys,
        diagnostics,
    }
}
