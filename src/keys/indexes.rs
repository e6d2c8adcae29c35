//! Unique index derivation from key and uniqueness markers.

use indexmap::IndexMap;

use crate::diagnostics::Diagnostic;
use crate::model::{DbField, IndexDefinition};

/// Indexes for `fields`, which must exclude the primary key.
///
/// Grouped key fields collapse into one composite unique index per group,
/// emitted first in order of each group's first field. Ungrouped key fields
/// and unique non-key fields then get a single-column unique index each.
/// When two indexes end up with the same name the first is kept and the
/// other is reported.
pub fn derive_indexes(table_name: &str, fields: &[DbField<'_>]) -> (Vec<IndexDefinition>, Vec<Diagnostic>) {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut singles = Vec::new();

    for field in fields {
        let column = field.column_name();
        if field.is_key() {
            match field.key_group() {
                Some(group) => groups.entry(group).or_default().push(column),
                None => singles.push(single_column_index(table_name, column)),
            }
        } else if field.is_unique() {
            singles.push(single_column_index(table_name, column));
        }
    }

    let candidates = groups
        .into_iter()
        .map(|(group, columns)| IndexDefinition::unique(format!("uk_{}_{}", table_name, group), columns))
        .chain(singles);

    let mut indexes: IndexMap<String, IndexDefinition> = IndexMap::new();
    let mut diagnostics = Vec::new();
    for index in candidates {
        if let Some(kept) = indexes.get(&index.name) {
            diagnostics.push(Diagnostic::warning(
                table_name,
                format!(
                    "index '{}' on ({}) has the same name as the index on ({}); skipped",
                    index.name,
                    index.columns.join(", "),
                    kept.columns.join(", ")
                ),
            ));
            continue;
        }
        indexes.insert(index.name.clone(), index);
    }
    (indexes.into_values().collect(), diagnostics)
}

fn single_column_index(table_name: &str, column: String) -> IndexDefinition {
    IndexDefinition::unique(format!("uk_{}_{}", table_name, column), vec![column])
}
