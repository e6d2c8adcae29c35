//! Relationship scanning

mod scanner;

pub use scanner::{scan_junction_tables, scan_relations, RelationScan, UnresolvedRelation};
