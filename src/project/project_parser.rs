//! Parser for .entproj project files

use std::path::{Path, PathBuf};

use anyhow::Result;
use roxmltree::Document;

use crate::ddl::Dialect;
use crate::error::EntityDdlError;
use crate::model::FieldOrder;

/// File suffix picked up when a project lists no model files
pub const SNAPSHOT_SUFFIX: &str = ".entities.xml";

/// Parsed project
#[derive(Debug, Clone)]
pub struct EntityProject {
    /// Project name (file stem of the project file)
    pub name: String,
    /// Target dialect
    pub dialect: Dialect,
    /// Placement of inherited columns
    pub field_order: FieldOrder,
    /// Output script path, resolved against the project directory
    pub output_file: Option<PathBuf>,
    /// Entity snapshot files, sorted
    pub model_files: Vec<PathBuf>,
    /// Directory containing the project file
    pub project_dir: PathBuf,
}

/// Parse a .entproj file
pub fn parse_project(path: &Path) -> Result<EntityProject> {
    let content = std::fs::read_to_string(path).map_err(|e| EntityDdlError::ProjectReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let doc = Document::parse(&content).map_err(|e| EntityDdlError::ProjectParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let project_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

    let project_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schema")
        .to_string();

    let root = doc.root_element();
    if root.tag_name().name() != "Project" {
        return Err(EntityDdlError::InvalidProjectFormat {
            message: format!(
                "expected <Project> root element, found <{}>",
                root.tag_name().name()
            ),
        }
        .into());
    }

    let dialect = match find_property_value(&root, "Dialect") {
        Some(name) => name
            .parse::<Dialect>()
            .map_err(|_| EntityDdlError::UnknownDialect { name })?,
        None => Dialect::default(),
    };

    let field_order = match find_property_value(&root, "FieldOrder") {
        Some(value) => value
            .parse::<FieldOrder>()
            .map_err(|message| EntityDdlError::InvalidProjectFormat { message })?,
        None => FieldOrder::default(),
    };

    let output_file = find_property_value(&root, "OutputFile")
        .map(|file| project_dir.join(file.replace('\\', "/")));

    let model_files = find_model_files(&root, &project_dir)?;

    Ok(EntityProject {
        name: project_name,
        dialect,
        field_order,
        output_file,
        model_files,
        project_dir,
    })
}

fn find_property_value(root: &roxmltree::Node, property_name: &str) -> Option<String> {
    for node in root.descendants() {
        if node.tag_name().name() == property_name {
            return node
                .text()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
        }
    }
    None
}

fn find_model_files(root: &roxmltree::Node, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut model_files = Vec::new();
    let mut include_patterns: Vec<String> = Vec::new();
    let mut exclude_patterns: Vec<String> = Vec::new();

    // Collect Model Include and Remove patterns
    for node in root.descendants() {
        if node.tag_name().name() == "Model" {
            if let Some(include) = node.attribute("Include") {
                include_patterns.push(include.replace('\\', "/"));
            }
            if let Some(remove) = node.attribute("Remove") {
                exclude_patterns.push(remove.replace('\\', "/"));
            }
        }
    }

    for pattern in &include_patterns {
        if pattern.contains('*') || pattern.contains('?') {
            let glob_pattern = project_dir.join(pattern);
            let glob_str = glob_pattern.to_string_lossy();
            let paths = glob::glob(&glob_str).map_err(|e| EntityDdlError::InvalidProjectFormat {
                message: format!("invalid Include pattern '{}': {}", pattern, e),
            })?;
            model_files.extend(paths.filter_map(|p| p.ok()).filter(|p| p.is_file()));
        } else {
            let model_path = project_dir.join(pattern);
            if model_path.exists() {
                model_files.push(model_path);
            }
        }
    }

    // No Model Include items: every snapshot under the project directory
    if include_patterns.is_empty() {
        for entry in walkdir::WalkDir::new(project_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let is_snapshot = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(SNAPSHOT_SUFFIX));
            if is_snapshot && entry.file_type().is_file() {
                model_files.push(path.to_path_buf());
            }
        }
    }

    if !exclude_patterns.is_empty() {
        model_files.retain(|file| {
            for pattern in &exclude_patterns {
                let exclude_path = project_dir.join(pattern);
                if pattern.contains('*') || pattern.contains('?') {
                    if let Ok(matcher) = glob::Pattern::new(&exclude_path.to_string_lossy()) {
                        if matcher.matches_path(file) {
                            return false;
                        }
                    }
                } else if file == &exclude_path {
                    return false;
                }
            }
            true
        });
    }

    model_files.sort();
    model_files.dedup();
    Ok(model_files)
}
