//! Project configuration and entity snapshot loading

mod project_parser;
mod snapshot_reader;

pub use project_parser::{parse_project, EntityProject, SNAPSHOT_SUFFIX};
pub use snapshot_reader::{load_model, parse_snapshot, read_snapshot_file};
