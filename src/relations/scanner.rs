//! Discovers many-to-many associations and synthesizes junction tables.

use indexmap::IndexMap;

use crate::markers::vocabulary::{JOIN_TABLE_MARKERS, MANY_TO_MANY_MARKERS};
use crate::markers::{find_any, Marker};
use crate::keys::primary_key;
use crate::model::{EntityClass, EntityField, EntityModel, FieldOrder, JunctionTable};
use crate::schema::ColumnType;
use crate::types::element_type;
use crate::util::{is_blank, strip_quotes, to_underline_lower};

/// Key column assumed when the referenced entity declares none.
const DEFAULT_KEY_COLUMN: &str = "id";

/// A many-to-many field whose target could not be resolved to a table entity.
#[derive(Debug, Clone)]
pub struct UnresolvedRelation<'a> {
    pub class: &'a EntityClass,
    pub field: &'a EntityField,
    /// The target type name that was looked up, if one could be determined
    pub target: Option<String>,
}

/// Result of a relationship scan.
#[derive(Debug, Clone, Default)]
pub struct RelationScan<'a> {
    /// One entry per junction table name, in discovery order
    pub junction_tables: Vec<JunctionTable<'a>>,
    pub unresolved: Vec<UnresolvedRelation<'a>>,
}

/// Junction tables for every owning many-to-many field of every table entity.
pub fn scan_junction_tables(model: &EntityModel, order: FieldOrder) -> Vec<JunctionTable<'_>> {
    scan_relations(model, order).junction_tables
}

/// Full scan, including the relationships that had to be skipped.
///
/// Classes are scanned in input order and fields in declaration order; the
/// first relationship producing a given table name wins.
pub fn scan_relations(model: &EntityModel, order: FieldOrder) -> RelationScan<'_> {
    let mut tables: IndexMap<String, JunctionTable<'_>> = IndexMap::new();
    let mut unresolved = Vec::new();

    for class in model.classes().iter().filter(|c| c.has_table()) {
        for field in class
            .fields
            .iter()
            .filter(|f| !f.is_static && !f.is_transient())
        {
            let Some(marker) = find_any(&field.markers, MANY_TO_MANY_MARKERS) else {
                continue;
            };
            // The owning side processes the relationship
            if marker.non_blank_attribute("mappedBy").is_some() {
                continue;
            }

            let target_name = target_type_name(marker, field);
            let target = target_name
                .as_deref()
                .and_then(|name| model.find_class(name))
                .filter(|c| c.has_table());
            let Some(target) = target else {
                unresolved.push(UnresolvedRelation {
                    class,
                    field,
                    target: target_name,
                });
                continue;
            };

            let junction = build_junction(model, order, class, target, field);
            tables
                .entry(junction.table_name.clone())
                .or_insert(junction);
        }
    }

    RelationScan {
        junction_tables: tables.into_values().collect(),
        unresolved,
    }
}

/// `targetEntity` unless blank or `void`, else the collection's element type.
fn target_type_name(marker: &Marker, field: &EntityField) -> Option<String> {
    let explicit = marker
        .non_blank_attribute("targetEntity")
        .map(|v| {
            strip_quotes(v)
                .trim_end_matches(".class")
                .trim_end_matches("::class")
                .to_string()
        })
        .filter(|v| !is_blank(v) && !v.eq_ignore_ascii_case("void") && !v.ends_with(".Void"));

    explicit
        .or_else(|| field.type_arguments.first().cloned())
        .or_else(|| element_type(&field.type_name))
}

fn build_junction<'a>(
    model: &EntityModel,
    order: FieldOrder,
    owner: &'a EntityClass,
    target: &'a EntityClass,
    field: &'a EntityField,
) -> JunctionTable<'a> {
    let left_table = owner.table_name();
    let right_table = target.table_name();
    let join_table = find_any(&field.markers, JOIN_TABLE_MARKERS);

    let explicit = |attributes: &[&str]| -> Option<String> {
        let marker = join_table?;
        attributes
            .iter()
            .find_map(|attr| marker.non_blank_attribute(attr))
            .map(strip_quotes)
    };

    let table_name = explicit(&["name"]).unwrap_or_else(|| {
        let mut names = [left_table.as_str(), right_table.as_str()];
        names.sort_unstable();
        format!("{}_{}", names[0], names[1])
    });

    let left_column =
        explicit(&["joinColumnName", "joinColumns"]).unwrap_or_else(|| format!("{}_id", left_table));
    let mut right_column = explicit(&["inverseJoinColumnName", "inverseJoinColumns"])
        .unwrap_or_else(|| format!("{}_id", right_table));
    // Self-referencing relationships need distinct column names
    if right_column == left_column {
        right_column = format!("{}_id", to_underline_lower(&field.name));
    }

    JunctionTable {
        table_name,
        left_referenced_column: model
            .primary_key_column(owner, order)
            .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string()),
        right_referenced_column: model
            .primary_key_column(target, order)
            .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string()),
        left_key_type: key_type(model, owner, order),
        right_key_type: key_type(model, target, order),
        left_table,
        left_column,
        right_table,
        right_column,
        left_entity: owner,
        right_entity: target,
        field,
    }
}

/// Junction columns are typed like the key they reference.
fn key_type(model: &EntityModel, class: &EntityClass, order: FieldOrder) -> ColumnType {
    primary_key(model, class, order)
        .map(|pk| ColumnType::for_field(&pk))
        .unwrap_or(ColumnType::BigInt)
}
