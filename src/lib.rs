//! entity-ddl: derive relational schemas from annotated entity models
//!
//! This library reads a structural snapshot of classes, fields and their
//! persistence/documentation markers, derives tables, columns, keys, indexes
//! and junction tables, and emits DDL for MySQL, PostgreSQL, SQL Server or SQLite.

pub mod ddl;
pub mod diagnostics;
pub mod error;
pub mod keys;
pub mod markers;
pub mod model;
pub mod project;
pub mod relations;
pub mod report;
pub mod schema;
pub mod types;
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use ddl::{DdlDialect, Dialect};
pub use diagnostics::Diagnostic;
pub use error::EntityDdlError;
pub use markers::Marker;
pub use model::{EntityClass, EntityField, EntityModel, FieldOrder};
pub use schema::{build_schema, SchemaDef, SchemaOptions};

/// Options for generating DDL from a project
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to the .entproj file
    pub project_path: PathBuf,
    /// Output path for the .sql file (overrides the project's OutputFile)
    pub output_path: Option<PathBuf>,
    /// Target dialect (overrides the project's Dialect)
    pub dialect: Option<Dialect>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Generate the schema script for every table entity in `model`.
pub fn generate_schema(model: &EntityModel, dialect: &dyn DdlDialect) -> String {
    generate_schema_with(model, dialect, &SchemaOptions::default())
}

/// Generate the schema script with explicit derivation options.
pub fn generate_schema_with(
    model: &EntityModel,
    dialect: &dyn DdlDialect,
    options: &SchemaOptions,
) -> String {
    let schema = build_schema(model, options);
    dialect.generate_all(&schema)
}

/// Generate a .sql script from an .entproj project
pub fn generate_ddl(options: GenerateOptions) -> Result<PathBuf> {
    if options.verbose {
        println!("Generating project: {}", options.project_path.display());
    }

    // Step 1: Parse the project file
    let project = project::parse_project(&options.project_path)?;
    let dialect = options.dialect.unwrap_or(project.dialect);

    if options.verbose {
        println!(
            "Found {} entity snapshot files (dialect: {}, field order: {:?})",
            project.model_files.len(),
            dialect,
            project.field_order
        );
    }

    // Step 2: Load the entity model
    let model = project::load_model(&project.model_files)?;

    if options.verbose {
        println!("Loaded {} classes", model.len());
    }

    // Step 3: Derive the schema
    let schema_options = SchemaOptions {
        field_order: project.field_order,
    };
    let schema = build_schema(&model, &schema_options);

    if options.verbose {
        println!(
            "Derived {} tables and {} junction tables",
            schema.tables.len(),
            schema.junction_tables.len()
        );
    }
    for diagnostic in schema.warnings() {
        eprintln!("{}", diagnostic);
    }

    // Step 4: Determine output path
    let output_path = options
        .output_path
        .or(project.output_file.clone())
        .unwrap_or_else(|| default_output_path(&project.project_dir, &project.name));

    // Step 5: Render and write the script
    let mut script = dialect.strategy().generate_all(&schema);
    script.push('\n');

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EntityDdlError::OutputWriteError {
            path: output_path.clone(),
            source: e,
        })?;
    }
    std::fs::write(&output_path, script).map_err(|e| EntityDdlError::OutputWriteError {
        path: output_path.clone(),
        source: e,
    })?;

    if options.verbose {
        println!("Wrote DDL: {}", output_path.display());
    }

    Ok(output_path)
}

/// Describe the schema derived from an .entproj project without writing DDL
pub fn describe_project(project_path: &Path, dialect: Option<Dialect>) -> Result<String> {
    let project = project::parse_project(project_path)?;
    let dialect = dialect.unwrap_or(project.dialect);
    let model = project::load_model(&project.model_files)?;
    let schema = build_schema(
        &model,
        &SchemaOptions {
            field_order: project.field_order,
        },
    );
    Ok(report::format_report(&schema, dialect.strategy().as_ref()))
}

fn default_output_path(project_dir: &Path, project_name: &str) -> PathBuf {
    project_dir.join(format!("{}.sql", project_name))
}
