//! Foreign keys owned by single-valued association fields.

use crate::markers::vocabulary::{JOIN_COLUMN_MARKERS, ON_DELETE, ON_DISSOCIATE, REFERENCE_MARKERS};
use crate::markers::{find_any, find_named};
use crate::model::{DbField, EntityClass, EntityModel, FieldOrder, ForeignKeyInfo, ReferentialAction};
use crate::util::strip_quotes;

/// A column that references another entity's table.
#[derive(Debug, Clone)]
pub struct ForeignKeyColumn<'a> {
    pub field: DbField<'a>,
    pub target: &'a EntityClass,
    pub info: ForeignKeyInfo,
}

/// Outcome for one association field.
pub(crate) enum Reference<'a> {
    /// Not an owning association
    None,
    Resolved(ForeignKeyColumn<'a>),
    /// Association marker present but the target is not a table entity
    Unresolved,
}

pub(crate) fn reference<'a>(
    model: &'a EntityModel,
    table_name: &str,
    field: DbField<'a>,
    order: FieldOrder,
) -> Reference<'a> {
    let Some(marker) = find_any(&field.markers, REFERENCE_MARKERS) else {
        return Reference::None;
    };
    if marker.non_blank_attribute("mappedBy").is_some() {
        return Reference::None;
    }
    let target = model
        .resolved_type(&field)
        .or_else(|| model.find_class(&field.type_name))
        .filter(|c| c.has_table());
    let Some(target) = target else {
        return Reference::Unresolved;
    };

    let join_column = find_any(&field.markers, JOIN_COLUMN_MARKERS);
    let column_name = join_column
        .and_then(|m| m.non_blank_attribute("name"))
        .map(strip_quotes)
        .unwrap_or_else(|| {
            let base = field.column_name();
            if base.ends_with("_id") {
                base
            } else {
                format!("{}_id", base)
            }
        });
    let referenced_column = join_column
        .and_then(|m| m.non_blank_attribute("referencedColumnName"))
        .map(strip_quotes)
        .or_else(|| model.primary_key_column(target, order))
        .unwrap_or_else(|| "id".to_string());

    let on_delete = find_named(&field.markers, ON_DISSOCIATE)
        .and_then(|m| m.attribute("value"))
        .or_else(|| find_named(&field.markers, ON_DELETE).and_then(|m| m.attribute("action")))
        .and_then(|v| ReferentialAction::parse(&strip_quotes(v)));

    Reference::Resolved(ForeignKeyColumn {
        field,
        target,
        info: ForeignKeyInfo {
            name: format!("fk_{}_{}", table_name, column_name),
            column_name,
            referenced_table: target.table_name(),
            referenced_column,
            on_delete,
            on_update: None,
        },
    })
}
