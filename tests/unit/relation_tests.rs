//! Unit tests for many-to-many relationship scanning

use entity_ddl::ddl::{DdlDialect, MySqlDialect};
use entity_ddl::markers::Marker;
use entity_ddl::relations::{scan_junction_tables, scan_relations};
use entity_ddl::{build_schema, EntityClass, EntityField, EntityModel, FieldOrder, SchemaOptions};

const ENTITY: &str = "org.babyfish.jimmer.sql.Entity";
const MANY_TO_MANY: &str = "org.babyfish.jimmer.sql.ManyToMany";

fn entity(qualified_name: &str) -> EntityClass {
    EntityClass::new(qualified_name)
        .with_marker(Marker::new(ENTITY))
        .with_field(EntityField::new("id", "long"))
        .with_field(EntityField::new("name", "String"))
}

fn many_to_many(name: &str, target: &str) -> EntityField {
    EntityField::new(name, format!("java.util.List<{}>", target)).with_marker(Marker::new(MANY_TO_MANY))
}

fn user_and_role() -> Vec<EntityClass> {
    vec![
        entity("com.example.User").with_field(many_to_many("roles", "com.example.Role")),
        entity("com.example.Role"),
    ]
}

// ============================================================================
// Junction Naming Tests
// ============================================================================

#[test]
fn test_user_role_junction() {
    let model = EntityModel::from_classes(user_and_role());
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);

    assert_eq!(junctions.len(), 1);
    let junction = &junctions[0];
    assert_eq!(junction.table_name, "role_user", "names are sorted lexicographically");
    assert_eq!(junction.left_table, "user");
    assert_eq!(junction.left_column, "user_id");
    assert_eq!(junction.right_table, "role");
    assert_eq!(junction.right_column, "role_id");
    assert_eq!(junction.left_referenced_column, "id");
    assert_eq!(junction.right_referenced_column, "id");
    assert_eq!(junction.left_entity.simple_name, "User");
    assert_eq!(junction.field.name, "roles");
}

#[test]
fn test_user_role_junction_foreign_keys() {
    let model = EntityModel::from_classes(user_and_role());
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    let statements = MySqlDialect.junction_foreign_keys(&junctions[0]);

    assert_eq!(
        statements,
        vec![
            "ALTER TABLE `role_user` ADD CONSTRAINT `fk_role_user_user_id` FOREIGN KEY (`user_id`) REFERENCES `user` (`id`);"
                .to_string(),
            "ALTER TABLE `role_user` ADD CONSTRAINT `fk_role_user_role_id` FOREIGN KEY (`role_id`) REFERENCES `role` (`id`);"
                .to_string(),
        ]
    );
}

/// The non-owning side is skipped, so the table name does not depend on which side comes first
#[test]
fn test_junction_name_independent_of_class_order() {
    let inverse = EntityField::new("users", "java.util.List<com.example.User>")
        .with_marker(Marker::new(MANY_TO_MANY).with_attr("mappedBy", "roles"));
    let role = entity("com.example.Role").with_field(inverse);
    let user = entity("com.example.User").with_field(many_to_many("roles", "com.example.Role"));

    let forward = EntityModel::from_classes(vec![user.clone(), role.clone()]);
    let backward = EntityModel::from_classes(vec![role, user]);

    let forward = scan_junction_tables(&forward, FieldOrder::OwnFirst);
    let backward = scan_junction_tables(&backward, FieldOrder::OwnFirst);
    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
    assert_eq!(forward[0].table_name, backward[0].table_name);
    assert_eq!(backward[0].left_table, "user", "owning side stays on the left");
}

#[test]
fn test_mapped_by_is_skipped() {
    let field = EntityField::new("roles", "java.util.List<com.example.Role>")
        .with_marker(Marker::new(MANY_TO_MANY).with_attr("mappedBy", "users"));
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(field),
        entity("com.example.Role"),
    ]);
    let scan = scan_relations(&model, FieldOrder::OwnFirst);
    assert!(scan.junction_tables.is_empty());
    assert!(scan.unresolved.is_empty(), "inverse sides are not failures");
}

/// Both sides owning the same pair produce one table; the first discovery wins
#[test]
fn test_duplicate_junction_first_wins() {
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(many_to_many("roles", "com.example.Role")),
        entity("com.example.Role").with_field(many_to_many("users", "com.example.User")),
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions.len(), 1);
    assert_eq!(junctions[0].field.name, "roles");
    assert_eq!(junctions[0].left_table, "user");
}

#[test]
fn test_explicit_join_table() {
    let field = many_to_many("roles", "com.example.Role").with_marker(
        Marker::new("jakarta.persistence.JoinTable")
            .with_attr("name", "sys_user_role")
            .with_attr("joinColumnName", "uid")
            .with_attr("inverseJoinColumnName", "rid"),
    );
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(field),
        entity("com.example.Role"),
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions[0].table_name, "sys_user_role");
    assert_eq!(junctions[0].left_column, "uid");
    assert_eq!(junctions[0].right_column, "rid");
}

// ============================================================================
// Target Resolution Tests
// ============================================================================

#[test]
fn test_target_entity_attribute() {
    let field = EntityField::new("roles", "java.util.List").with_marker(
        Marker::new("jakarta.persistence.ManyToMany").with_attr("targetEntity", "com.example.Role.class"),
    );
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(field),
        entity("com.example.Role"),
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions.len(), 1);
    assert_eq!(junctions[0].right_table, "role");
}

#[test]
fn test_void_target_entity_falls_back_to_type_argument() {
    let field = EntityField::new("roles", "java.util.Set<com.example.Role>").with_marker(
        Marker::new("javax.persistence.ManyToMany").with_attr("targetEntity", "void.class"),
    );
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(field),
        entity("com.example.Role"),
    ]);
    assert_eq!(scan_junction_tables(&model, FieldOrder::OwnFirst).len(), 1);
}

#[test]
fn test_unknown_target_is_reported_not_fatal() {
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(many_to_many("groups", "com.example.Group"))
    ]);
    let scan = scan_relations(&model, FieldOrder::OwnFirst);
    assert!(scan.junction_tables.is_empty());
    assert_eq!(scan.unresolved.len(), 1);
    assert_eq!(scan.unresolved[0].target.as_deref(), Some("com.example.Group"));

    let schema = build_schema(&model, &SchemaOptions::default());
    assert_eq!(schema.tables.len(), 1);
    assert!(
        schema.warnings().any(|d| d.message.contains("'groups'")),
        "expected a warning for the skipped relationship, got {:?}",
        schema.diagnostics
    );
}

#[test]
fn test_target_without_table_is_skipped() {
    let base = EntityClass::new("com.example.Base")
        .with_abstract(true)
        .with_marker(Marker::new("jakarta.persistence.MappedSuperclass"));
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(many_to_many("bases", "com.example.Base")),
        base,
    ]);
    let scan = scan_relations(&model, FieldOrder::OwnFirst);
    assert!(scan.junction_tables.is_empty());
    assert_eq!(scan.unresolved.len(), 1);
}

#[test]
fn test_self_reference_gets_distinct_columns() {
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(many_to_many("friends", "com.example.User"))
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions[0].table_name, "user_user");
    assert_eq!(junctions[0].left_column, "user_id");
    assert_eq!(junctions[0].right_column, "friends_id");
}

#[test]
fn test_referenced_column_follows_primary_key() {
    let role = EntityClass::new("com.example.Role")
        .with_marker(Marker::new(ENTITY))
        .with_field(EntityField::new("roleId", "long").with_marker(Marker::new("org.babyfish.jimmer.sql.Id")));
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(many_to_many("roles", "com.example.Role")),
        role,
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions[0].right_referenced_column, "role_id");
    assert_eq!(junctions[0].left_referenced_column, "id");
}

#[test]
fn test_adapter_type_arguments() {
    let field = EntityField::new("roles", "java.util.List")
        .with_type_arguments(["com.example.Role"])
        .with_marker(Marker::new(MANY_TO_MANY));
    let model = EntityModel::from_classes(vec![
        entity("com.example.User").with_field(field),
        entity("com.example.Role"),
    ]);
    let junctions = scan_junction_tables(&model, FieldOrder::OwnFirst);
    assert_eq!(junctions.len(), 1);
    assert_eq!(junctions[0].table_name, "role_user");
}
