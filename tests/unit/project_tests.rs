//! Unit tests for project files and entity snapshot loading

use std::fs;
use std::path::{Path, PathBuf};

use entity_ddl::project::{load_model, parse_project, parse_snapshot};
use entity_ddl::{Dialect, EntityDdlError, FieldOrder};
use tempfile::TempDir;

const USER_SNAPSHOT: &str = r#"<Entities>
  <Class qualifiedName="com.example.User">
    <Marker name="jakarta.persistence.Entity"/>
    <Field name="id" type="long"/>
  </Class>
</Entities>"#;

const ROLE_SNAPSHOT: &str = r#"<Entities>
  <Class qualifiedName="com.example.Role">
    <Marker name="jakarta.persistence.Entity"/>
    <Field name="id" type="long"/>
  </Class>
</Entities>"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

// ============================================================================
// Project File Tests
// ============================================================================

#[test]
fn test_parse_project_properties() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "model/user.entities.xml", USER_SNAPSHOT);
    let project = write(
        dir.path(),
        "Inventory.entproj",
        r#"<Project>
  <PropertyGroup>
    <Dialect>postgres</Dialect>
    <FieldOrder>ancestors-first</FieldOrder>
    <OutputFile>out\schema.sql</OutputFile>
  </PropertyGroup>
  <ItemGroup>
    <Model Include="model\*.entities.xml" />
  </ItemGroup>
</Project>"#,
    );

    let project = parse_project(&project).unwrap();
    assert_eq!(project.name, "Inventory");
    assert_eq!(project.dialect, Dialect::PostgreSql);
    assert_eq!(project.field_order, FieldOrder::AncestorsFirst);
    assert_eq!(project.output_file, Some(dir.path().join("out/schema.sql")));
    assert_eq!(file_names(&project.model_files), vec!["user.entities.xml"]);
}

#[test]
fn test_defaults_without_properties() {
    let dir = TempDir::new().unwrap();
    let project = write(dir.path(), "app.entproj", "<Project/>");

    let project = parse_project(&project).unwrap();
    assert_eq!(project.dialect, Dialect::MySql);
    assert_eq!(project.field_order, FieldOrder::OwnFirst);
    assert_eq!(project.output_file, None);
    assert!(project.model_files.is_empty());
}

#[test]
fn test_remove_excludes_model_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "model/user.entities.xml", USER_SNAPSHOT);
    write(dir.path(), "model/draft.entities.xml", ROLE_SNAPSHOT);
    let project = write(
        dir.path(),
        "app.entproj",
        r#"<Project>
  <ItemGroup>
    <Model Include="model\*.entities.xml" />
    <Model Remove="model\draft.entities.xml" />
  </ItemGroup>
</Project>"#,
    );

    let project = parse_project(&project).unwrap();
    assert_eq!(file_names(&project.model_files), vec!["user.entities.xml"]);
}

/// With no Model items every snapshot under the project directory is used, sorted
#[test]
fn test_snapshots_discovered_without_model_items() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b/user.entities.xml", USER_SNAPSHOT);
    write(dir.path(), "a/role.entities.xml", ROLE_SNAPSHOT);
    write(dir.path(), "a/notes.xml", "<Notes/>");
    let project = write(dir.path(), "app.entproj", "<Project/>");

    let project = parse_project(&project).unwrap();
    assert_eq!(
        file_names(&project.model_files),
        vec!["role.entities.xml", "user.entities.xml"]
    );
}

#[test]
fn test_remove_applies_to_discovered_snapshots() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.entities.xml", USER_SNAPSHOT);
    write(dir.path(), "legacy.entities.xml", ROLE_SNAPSHOT);
    write(dir.path(), "old/stale.entities.xml", ROLE_SNAPSHOT);
    let project = write(
        dir.path(),
        "app.entproj",
        r#"<Project>
  <ItemGroup>
    <Model Remove="legacy.entities.xml" />
    <Model Remove="old\*.entities.xml" />
  </ItemGroup>
</Project>"#,
    );

    let project = parse_project(&project).unwrap();
    assert_eq!(file_names(&project.model_files), vec!["a.entities.xml"]);
}

#[test]
fn test_explicit_missing_model_is_ignored() {
    let dir = TempDir::new().unwrap();
    let project = write(
        dir.path(),
        "app.entproj",
        r#"<Project><ItemGroup><Model Include="missing.entities.xml" /></ItemGroup></Project>"#,
    );
    assert!(parse_project(&project).unwrap().model_files.is_empty());
}

#[test]
fn test_unknown_dialect_is_an_error() {
    let dir = TempDir::new().unwrap();
    let project = write(
        dir.path(),
        "app.entproj",
        "<Project><PropertyGroup><Dialect>oracle</Dialect></PropertyGroup></Project>",
    );

    let err = parse_project(&project).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<EntityDdlError>(),
            Some(EntityDdlError::UnknownDialect { name }) if name == "oracle"
        ),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn test_unknown_field_order_is_an_error() {
    let dir = TempDir::new().unwrap();
    let project = write(
        dir.path(),
        "app.entproj",
        "<Project><PropertyGroup><FieldOrder>Random</FieldOrder></PropertyGroup></Project>",
    );
    let err = parse_project(&project).unwrap_err();
    assert!(err.to_string().contains("Unknown field order"), "unexpected error: {}", err);
}

#[test]
fn test_wrong_project_root() {
    let dir = TempDir::new().unwrap();
    let project = write(dir.path(), "app.entproj", "<Solution/>");
    let err = parse_project(&project).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EntityDdlError>(),
        Some(EntityDdlError::InvalidProjectFormat { .. })
    ));
}

#[test]
fn test_missing_project_file() {
    let dir = TempDir::new().unwrap();
    let err = parse_project(&dir.path().join("absent.entproj")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EntityDdlError>(),
        Some(EntityDdlError::ProjectReadError { .. })
    ));
}

#[test]
fn test_malformed_project_xml() {
    let dir = TempDir::new().unwrap();
    let project = write(dir.path(), "app.entproj", "<Project><PropertyGroup>");
    let err = parse_project(&project).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EntityDdlError>(),
        Some(EntityDdlError::ProjectParseError { .. })
    ));
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[test]
fn test_snapshot_class_attributes() {
    let snapshot = r#"<Entities>
  <Class qualifiedName="com.example.Base" abstract="true" kind="class">
    <Marker name="jakarta.persistence.MappedSuperclass"/>
    <Field name="version" type="int" static="false"/>
  </Class>
  <Class qualifiedName="com.example.Point" dataClass="true">
    <SuperClass name="com.example.Base"/>
    <Field name="label" type="String" nullable="false">
      <Doc>Display label</Doc>
    </Field>
    <Field name="CACHE" type="String" static="true"/>
  </Class>
</Entities>"#;

    let classes = parse_snapshot(snapshot, Path::new("points.entities.xml")).unwrap();
    assert_eq!(classes.len(), 2);
    assert!(classes[0].is_abstract);
    assert!(classes[0].is_mapped_superclass());
    assert!(classes[1].is_entity());
    assert_eq!(classes[1].super_classes, vec!["com.example.Base".to_string()]);

    let label = classes[1].field("label").unwrap();
    assert!(!label.is_nullable());
    assert_eq!(label.comment(), Some("Display label".to_string()));
    assert!(!classes[1].field("CACHE").unwrap().is_db_field());
}

#[test]
fn test_unknown_class_kind_is_an_error() {
    let snapshot = r#"<Entities><Class qualifiedName="com.example.X" kind="struct"/></Entities>"#;
    let err = parse_snapshot(snapshot, Path::new("x.entities.xml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EntityDdlError>(),
        Some(EntityDdlError::InvalidSnapshotFormat { .. })
    ));
}

#[test]
fn test_field_without_type_is_an_error() {
    let snapshot = r#"<Entities><Class qualifiedName="com.example.X"><Field name="id"/></Class></Entities>"#;
    let err = parse_snapshot(snapshot, Path::new("x.entities.xml")).unwrap_err();
    assert!(err.to_string().contains("field id without type"), "unexpected error: {}", err);
}

#[test]
fn test_load_model_in_file_order() {
    let dir = TempDir::new().unwrap();
    let user = write(dir.path(), "user.entities.xml", USER_SNAPSHOT);
    let role = write(dir.path(), "role.entities.xml", &format!("\u{FEFF}{}", ROLE_SNAPSHOT));

    let model = load_model(&[user, role]).unwrap();
    let names: Vec<&str> = model.classes().iter().map(|c| c.simple_name.as_str()).collect();
    assert_eq!(names, vec!["User", "Role"]);
}

#[test]
fn test_load_model_many_files() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..12)
        .map(|i| {
            write(
                dir.path(),
                &format!("e{:02}.entities.xml", i),
                &format!(
                    r#"<Entities><Class qualifiedName="com.example.E{i}"><Marker name="jakarta.persistence.Entity"/></Class></Entities>"#
                ),
            )
        })
        .collect();

    let model = load_model(&files).unwrap();
    assert_eq!(model.classes().len(), 12);
    assert_eq!(model.classes()[0].simple_name, "E0");
    assert_eq!(model.classes()[11].simple_name, "E11");
}

#[test]
fn test_load_model_reports_bad_file() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.entities.xml", USER_SNAPSHOT);
    let bad = write(dir.path(), "bad.entities.xml", "<Entities>");

    let err = load_model(&[good, bad]).unwrap_err();
    assert!(
        err.to_string().contains("bad.entities.xml"),
        "error should name the file: {}",
        err
    );
}
