//! Derived schema value objects

use super::{EntityClass, EntityField};
use crate::schema::ColumnType;

/// Index type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    Normal,
    Unique,
    Fulltext,
}

/// Index derived from key and uniqueness markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub name: String,
    /// Column names in field-declaration order
    pub columns: Vec<String>,
    pub index_type: IndexType,
}

impl IndexDefinition {
    pub fn unique(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            index_type: IndexType::Unique,
        }
    }

    pub fn is_unique(&self) -> bool {
        self.index_type == IndexType::Unique
    }
}

/// Action taken on dependent rows when the referenced row changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

impl ReferentialAction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }

    /// Parses enum-constant style values such as `DissociateAction.DELETE` or `CASCADE`.
    pub fn parse(value: &str) -> Option<Self> {
        let constant = crate::util::simple_name(value.trim()).to_ascii_uppercase();
        match constant.as_str() {
            "CASCADE" | "DELETE" => Some(ReferentialAction::Cascade),
            "SET_NULL" => Some(ReferentialAction::SetNull),
            "SET_DEFAULT" => Some(ReferentialAction::SetDefault),
            "RESTRICT" | "CHECK" => Some(ReferentialAction::Restrict),
            "NO_ACTION" | "NONE" => Some(ReferentialAction::NoAction),
            _ => None,
        }
    }
}

/// Foreign key owned by an entity column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyInfo {
    /// Constraint name (e.g., "fk_order_user_id")
    pub name: String,
    pub column_name: String,
    pub referenced_table: String,
    pub referenced_column: String,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

/// How a key column receives its values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationStrategy {
    /// No generation marker
    #[default]
    None,
    /// Identity / auto-increment column
    AutoIncrement,
    /// Database sequence, optionally named by the generator marker
    Sequence { name: Option<String> },
    /// UUID generated by the application
    Uuid,
    /// Application-supplied generator (fully qualified generator type)
    Custom { generator_type: String },
}

impl GenerationStrategy {
    pub fn is_auto_increment(&self) -> bool {
        matches!(self, GenerationStrategy::AutoIncrement)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, GenerationStrategy::Sequence { .. })
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, GenerationStrategy::Uuid)
    }

    pub fn has_custom_generator(&self) -> bool {
        matches!(self, GenerationStrategy::Custom { .. })
    }
}

/// Junction table synthesized for one many-to-many relationship
#[derive(Debug, Clone)]
pub struct JunctionTable<'a> {
    pub table_name: String,
    /// Owning side
    pub left_table: String,
    pub left_column: String,
    /// Key column of the owning side's table
    pub left_referenced_column: String,
    /// Type of the owning side's key
    pub left_key_type: ColumnType,
    /// Target side
    pub right_table: String,
    pub right_column: String,
    /// Key column of the target side's table
    pub right_referenced_column: String,
    pub right_key_type: ColumnType,
    pub left_entity: &'a EntityClass,
    pub right_entity: &'a EntityClass,
    /// Field that declared the relationship
    pub field: &'a EntityField,
}
