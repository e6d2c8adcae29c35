//! Known marker vocabularies.
//!
//! Each resolution rule table is an ordered list of `(marker qualified name, attribute)`
//! pairs. Earlier rules win when an element carries markers from several frameworks.

/// Explicit table name.
pub static TABLE_NAME_RULES: &[(&str, &str)] = &[
    ("com.baomidou.mybatisplus.annotation.TableName", "value"),
    ("org.babyfish.jimmer.sql.Table", "name"),
    ("javax.persistence.Table", "name"),
    ("jakarta.persistence.Table", "name"),
];

/// Explicit column name.
pub static COLUMN_NAME_RULES: &[(&str, &str)] = &[
    ("org.babyfish.jimmer.sql.Column", "name"),
    ("com.baomidou.mybatisplus.annotation.TableField", "value"),
    ("javax.persistence.Column", "name"),
    ("jakarta.persistence.Column", "name"),
];

/// Field comment from documentation and export frameworks.
pub static FIELD_COMMENT_RULES: &[(&str, &str)] = &[
    ("io.swagger.annotations.ApiModelProperty", "value"),
    ("io.swagger.v3.oas.annotations.media.Schema", "description"),
    ("com.alibaba.excel.annotation.ExcelProperty", "value"),
    ("cn.idev.excel.annotation.ExcelProperty", "value"),
    ("cn.afterturn.easypoi.excel.annotation.Excel", "name"),
];

/// Class comment.
pub static CLASS_COMMENT_RULES: &[(&str, &str)] = &[
    ("io.swagger.annotations.Api", "tags"),
    ("io.swagger.v3.oas.annotations.tags.Tag", "name"),
    ("io.swagger.annotations.ApiModel", "description"),
    ("io.swagger.v3.oas.annotations.media.Schema", "description"),
];

/// Role a class-level marker plays in entity eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMarkerRole {
    Entity,
    MappedSuperclass,
    Table,
    DataClass,
}

pub static CLASS_MARKERS: &[(&str, ClassMarkerRole)] = &[
    ("javax.persistence.Entity", ClassMarkerRole::Entity),
    ("jakarta.persistence.Entity", ClassMarkerRole::Entity),
    ("org.babyfish.jimmer.sql.Entity", ClassMarkerRole::Entity),
    ("javax.persistence.MappedSuperclass", ClassMarkerRole::MappedSuperclass),
    ("jakarta.persistence.MappedSuperclass", ClassMarkerRole::MappedSuperclass),
    ("org.babyfish.jimmer.sql.MappedSuperclass", ClassMarkerRole::MappedSuperclass),
    ("com.baomidou.mybatisplus.annotation.TableName", ClassMarkerRole::Table),
    ("org.babyfish.jimmer.sql.Table", ClassMarkerRole::Table),
    ("javax.persistence.Table", ClassMarkerRole::Table),
    ("jakarta.persistence.Table", ClassMarkerRole::Table),
    ("lombok.Data", ClassMarkerRole::DataClass),
    ("lombok.Getter", ClassMarkerRole::DataClass),
    ("lombok.Setter", ClassMarkerRole::DataClass),
];

pub static MANY_TO_MANY_MARKERS: &[&str] = &[
    "org.babyfish.jimmer.sql.ManyToMany",
    "javax.persistence.ManyToMany",
    "jakarta.persistence.ManyToMany",
];

/// Single-valued associations that own a foreign-key column.
pub static REFERENCE_MARKERS: &[&str] = &[
    "org.babyfish.jimmer.sql.ManyToOne",
    "org.babyfish.jimmer.sql.OneToOne",
    "javax.persistence.ManyToOne",
    "javax.persistence.OneToOne",
    "jakarta.persistence.ManyToOne",
    "jakarta.persistence.OneToOne",
];

pub static JOIN_TABLE_MARKERS: &[&str] = &[
    "org.babyfish.jimmer.sql.JoinTable",
    "javax.persistence.JoinTable",
    "jakarta.persistence.JoinTable",
];

pub static JOIN_COLUMN_MARKERS: &[&str] = &[
    "org.babyfish.jimmer.sql.JoinColumn",
    "javax.persistence.JoinColumn",
    "jakarta.persistence.JoinColumn",
];

// Markers below are recognized by simple name, case-insensitively, whatever their package.
pub const ID: &str = "Id";
pub const GENERATED_VALUE: &str = "GeneratedValue";
pub const TRANSIENT: &str = "Transient";
pub const COLUMN: &str = "Column";
pub const KEY: &str = "Key";
pub const UNIQUE: &str = "Unique";
pub const LOB: &str = "Lob";
pub const LENGTH: &str = "Length";
pub const PRECISION: &str = "Precision";
pub const SCALE: &str = "Scale";
pub const ON_DISSOCIATE: &str = "OnDissociate";
pub const ON_DELETE: &str = "OnDelete";

/// Column definitions that mark a string column as large text.
pub static TEXT_COLUMN_DEFINITIONS: &[&str] = &["TEXT", "CLOB", "LONGTEXT", "MEDIUMTEXT"];
