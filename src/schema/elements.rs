//! Dialect-neutral table definitions

use super::ColumnType;
use crate::diagnostics::Diagnostic;
use crate::model::{ForeignKeyInfo, GenerationStrategy, IndexDefinition, JunctionTable};

/// Column definition
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub generation: GenerationStrategy,
    /// Sequence feeding this column, for sequence-generated keys
    pub sequence: Option<String>,
    pub comment: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            primary_key: false,
            generation: GenerationStrategy::None,
            sequence: None,
            comment: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Table definition
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub name: String,
    /// Qualified name of the entity the table was derived from
    pub entity: String,
    pub comment: Option<String>,
    pub columns: Vec<ColumnDef>,
    /// Primary key column name
    pub primary_key: Option<String>,
    pub indexes: Vec<IndexDefinition>,
    pub foreign_keys: Vec<ForeignKeyInfo>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity: String::new(),
            comment: None,
            columns: Vec::new(),
            primary_key: None,
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key_column(&self) -> Option<&ColumnDef> {
        self.primary_key.as_deref().and_then(|pk| self.column(pk))
    }

    pub fn sequences(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|c| c.sequence.as_deref())
    }
}

/// Everything derived from one entity model
#[derive(Debug, Clone, Default)]
pub struct SchemaDef<'a> {
    /// Entity tables in input order
    pub tables: Vec<TableDef>,
    /// Junction tables in discovery order
    pub junction_tables: Vec<JunctionTable<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SchemaDef<'_> {
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}
