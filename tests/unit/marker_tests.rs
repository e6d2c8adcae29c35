//! Unit tests for marker resolution and class-level facts

use entity_ddl::markers::{
    find_named, resolve_class_comment, resolve_column_name, resolve_field_comment,
    resolve_table_name, Marker, MarkerValue,
};
use entity_ddl::model::ClassKind;
use entity_ddl::EntityClass;

// ============================================================================
// Marker Tests
// ============================================================================

#[test]
fn test_array_attribute_scalar_view() {
    let marker = Marker::new("io.swagger.annotations.Api").with_array_attr("tags", ["Users", "Admin"]);
    assert_eq!(marker.attribute("tags"), Some("Users"));
    assert_eq!(
        marker.attributes.get("tags").map(MarkerValue::values),
        Some(vec!["Users", "Admin"])
    );
}

#[test]
fn test_simple_name_lookup_is_case_insensitive() {
    let markers = vec![Marker::new("com.example.ID"), Marker::new("lombok.Data")];
    assert!(find_named(&markers, "Id").is_some());
    assert!(find_named(&markers, "Entity").is_none());
}

#[test]
fn test_flag_strips_quotes() {
    let marker = Marker::new("jakarta.persistence.Column")
        .with_attr("unique", "\"true\"")
        .with_attr("nullable", "no");
    assert!(marker.flag("unique"));
    assert!(!marker.flag("nullable"));
    assert!(!marker.flag("missing"));
}

// ============================================================================
// Name Resolution Tests
// ============================================================================

#[test]
fn test_table_name_rules() {
    let jimmer = vec![Marker::new("org.babyfish.jimmer.sql.Table").with_attr("name", "'BOOK_STORE'")];
    assert_eq!(resolve_table_name(&jimmer, "BookStore"), "BOOK_STORE");
    assert_eq!(resolve_table_name(&[], "BookStore"), "book_store");
}

/// Unknown vocabularies are ignored even when the attribute name matches
#[test]
fn test_unknown_marker_is_ignored() {
    let markers = vec![Marker::new("com.acme.orm.Table").with_attr("name", "acme")];
    assert_eq!(resolve_table_name(&markers, "Widget"), "widget");
}

#[test]
fn test_mybatis_table_field_column_name() {
    let markers = vec![
        Marker::new("com.baomidou.mybatisplus.annotation.TableField").with_attr("value", "nick"),
    ];
    assert_eq!(resolve_column_name(&markers, "nickName"), "nick");
}

#[test]
fn test_column_rule_priority() {
    let markers = vec![
        Marker::new("jakarta.persistence.Column").with_attr("name", "jpa_col"),
        Marker::new("org.babyfish.jimmer.sql.Column").with_attr("name", "jimmer_col"),
    ];
    assert_eq!(resolve_column_name(&markers, "value"), "jimmer_col");
}

// ============================================================================
// Comment Resolution Tests
// ============================================================================

#[test]
fn test_field_comment_vocabularies() {
    let schema = vec![
        Marker::new("io.swagger.v3.oas.annotations.media.Schema").with_attr("description", "Price"),
    ];
    assert_eq!(resolve_field_comment(&schema, None), Some("Price".to_string()));

    let excel = vec![Marker::new("com.alibaba.excel.annotation.ExcelProperty")
        .with_array_attr("value", ["Amount", "Money"])];
    assert_eq!(resolve_field_comment(&excel, None), Some("Amount".to_string()));
}

#[test]
fn test_class_comment_from_api_tags() {
    let markers = vec![Marker::new("io.swagger.annotations.Api").with_array_attr("tags", ["User management"])];
    assert_eq!(
        resolve_class_comment(&markers, Some("Ignored documentation")),
        Some("User management".to_string())
    );
}

#[test]
fn test_class_comment_skips_doc_tags() {
    let doc = "/**\n * @author someone\n * Order header\n */";
    assert_eq!(resolve_class_comment(&[], Some(doc)), Some("Order header".to_string()));
    assert_eq!(resolve_class_comment(&[], Some("   ")), None);
}

// ============================================================================
// Entity Eligibility Tests
// ============================================================================

#[test]
fn test_plain_class_is_not_entity() {
    let class = EntityClass::new("com.example.Helper");
    assert!(!class.is_entity());
    assert!(!class.has_table());
}

#[test]
fn test_data_class_flag_makes_entity() {
    let class = EntityClass::new("com.example.Point").with_data_class(true);
    assert!(class.is_entity());
}

#[test]
fn test_mapped_superclass_has_no_table() {
    let class = EntityClass::new("com.example.BaseEntity")
        .with_abstract(true)
        .with_marker(Marker::new("jakarta.persistence.MappedSuperclass"));
    assert!(class.is_entity());
    assert!(class.is_mapped_superclass());
    assert!(!class.has_table());
}

#[test]
fn test_interface_needs_explicit_marker() {
    let with_data = EntityClass::new("com.example.Named")
        .with_kind(ClassKind::Interface)
        .with_marker(Marker::new("lombok.Data"));
    assert!(!with_data.is_entity());

    let with_table = EntityClass::new("com.example.Named")
        .with_kind(ClassKind::Interface)
        .with_marker(Marker::new("com.baomidou.mybatisplus.annotation.TableName").with_attr("value", "named"));
    assert!(with_table.is_entity());
    assert_eq!(with_table.table_name(), "named");
}
