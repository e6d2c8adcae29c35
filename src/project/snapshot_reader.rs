//! Reader for entity snapshot files (`*.entities.xml`)

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use roxmltree::{Document, Node};

use crate::error::EntityDdlError;
use crate::markers::Marker;
use crate::model::{ClassKind, EntityClass, EntityField, EntityModel};
use crate::types::generic_arguments;

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Load every snapshot file into one model, in file order
pub fn load_model(files: &[PathBuf]) -> Result<EntityModel> {
    let mut classes = Vec::with_capacity(files.len() * 4);

    if files.len() >= PARALLEL_THRESHOLD {
        let results: Vec<Result<Vec<EntityClass>>> =
            files.par_iter().map(|file| read_snapshot_file(file)).collect();

        // Combine results, propagating the first error if any
        for result in results {
            classes.extend(result?);
        }
    } else {
        for file in files {
            classes.extend(read_snapshot_file(file)?);
        }
    }

    Ok(EntityModel::from_classes(classes))
}

/// Read a single snapshot file
pub fn read_snapshot_file(path: &Path) -> Result<Vec<EntityClass>> {
    let content = std::fs::read_to_string(path).map_err(|e| EntityDdlError::SnapshotReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Strip UTF-8 BOM if present
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse_snapshot(content, path)
}

/// Parse snapshot XML; `path` is only used in error messages
pub fn parse_snapshot(content: &str, path: &Path) -> Result<Vec<EntityClass>> {
    let doc = Document::parse(content).map_err(|e| EntityDdlError::SnapshotParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let root = doc.root_element();
    if root.tag_name().name() != "Entities" {
        return Err(invalid(
            path,
            format!(
                "expected <Entities> root element, found <{}>",
                root.tag_name().name()
            ),
        ));
    }

    root.children()
        .filter(|n| n.has_tag_name("Class"))
        .map(|node| parse_class(node, path))
        .collect()
}

fn parse_class(node: Node, path: &Path) -> Result<EntityClass> {
    let qualified_name = node
        .attribute("qualifiedName")
        .or_else(|| node.attribute("name"))
        .ok_or_else(|| invalid(path, "<Class> without qualifiedName".to_string()))?;

    let mut class = EntityClass::new(qualified_name)
        .with_abstract(bool_attribute(node, "abstract").unwrap_or(false))
        .with_data_class(bool_attribute(node, "dataClass").unwrap_or(false));

    if let Some(simple_name) = node.attribute("simpleName") {
        class.simple_name = simple_name.to_string();
    }
    if let Some(kind) = node.attribute("kind") {
        class.kind = kind
            .parse::<ClassKind>()
            .map_err(|message| invalid(path, format!("class {}: {}", qualified_name, message)))?;
    }

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "Doc" => class.documentation = child.text().map(|t| t.trim().to_string()),
            "Marker" => class.markers.push(parse_marker(child, path)?),
            "SuperClass" => class.super_classes.push(name_attribute(child, path)?),
            "Interface" => class.interfaces.push(name_attribute(child, path)?),
            "Field" => class.fields.push(parse_field(child, path)?),
            other => {
                return Err(invalid(
                    path,
                    format!("unexpected <{}> in class {}", other, qualified_name),
                ))
            }
        }
    }

    Ok(class)
}

fn parse_field(node: Node, path: &Path) -> Result<EntityField> {
    let name = name_attribute(node, path)?;
    let type_name = node
        .attribute("type")
        .ok_or_else(|| invalid(path, format!("field {} without type", name)))?;

    let mut field = EntityField::new(name, type_name)
        .with_static(bool_attribute(node, "static").unwrap_or(false))
        .with_constant(bool_attribute(node, "constant").unwrap_or(false));
    field.is_var = bool_attribute(node, "var").unwrap_or(true);
    if let Some(nullable) = bool_attribute(node, "nullable") {
        field.declared_nullable = Some(nullable);
    }
    if let Some(collection) = bool_attribute(node, "collection") {
        field.is_collection = collection;
    }
    field.resolved_type = node.attribute("resolvedType").map(str::to_string);

    let mut type_arguments = Vec::new();
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "TypeArg" => {
                if let Some(arg) = child.text().map(str::trim).filter(|t| !t.is_empty()) {
                    type_arguments.push(arg.to_string());
                }
            }
            "Doc" => field.documentation = child.text().map(|t| t.trim().to_string()),
            "Marker" => field.markers.push(parse_marker(child, path)?),
            other => {
                return Err(invalid(
                    path,
                    format!("unexpected <{}> in field {}", other, field.name),
                ))
            }
        }
    }
    field.type_arguments = if type_arguments.is_empty() {
        generic_arguments(&field.type_name)
    } else {
        type_arguments
    };

    Ok(field)
}

fn parse_marker(node: Node, path: &Path) -> Result<Marker> {
    let mut marker = Marker::new(name_attribute(node, path)?);

    for attr in node.children().filter(|n| n.has_tag_name("Attr")) {
        let attr_name = name_attribute(attr, path)?;
        let values: Vec<String> = attr
            .children()
            .filter(|n| n.has_tag_name("Value"))
            .map(|v| v.text().unwrap_or_default().to_string())
            .collect();
        marker = if values.is_empty() {
            marker.with_attr(attr_name, attr.text().unwrap_or_default())
        } else {
            marker.with_array_attr(attr_name, values)
        };
    }

    Ok(marker)
}

fn name_attribute(node: Node, path: &Path) -> Result<String> {
    node.attribute("name")
        .map(str::to_string)
        .ok_or_else(|| invalid(path, format!("<{}> without name", node.tag_name().name())))
}

fn bool_attribute(node: Node, name: &str) -> Option<bool> {
    node.attribute(name).map(|v| v.eq_ignore_ascii_case("true"))
}

fn invalid(path: &Path, message: String) -> anyhow::Error {
    EntityDdlError::InvalidSnapshotFormat {
        path: path.to_path_buf(),
        message,
    }
    .into()
}
