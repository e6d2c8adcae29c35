//! End-to-end tests: project file in, DDL script out

use std::fs;

use pretty_assertions::assert_eq;

use crate::common::{statements, TestContext};
use crate::assert_script_contains;
use entity_ddl::{Dialect, GenerateOptions};

const BLOG_POSTGRESQL: &str = r#"CREATE TABLE "t_author" (
  "id" BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY,
  "name" VARCHAR(64) NOT NULL,
  "email" VARCHAR(255),
  "bio" TEXT,
  "created_at" TIMESTAMP,
  PRIMARY KEY ("id")
);

CREATE TABLE "post" (
  "id" BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY,
  "title" VARCHAR(255),
  "slug" VARCHAR(255),
  "content" TEXT,
  "author_id" BIGINT,
  PRIMARY KEY ("id")
);

CREATE TABLE "tag" (
  "id" BIGINT NOT NULL,
  "name" VARCHAR(255),
  PRIMARY KEY ("id")
);

CREATE TABLE "post_tag" (
  "post_id" BIGINT NOT NULL,
  "tag_id" BIGINT NOT NULL,
  PRIMARY KEY ("post_id", "tag_id")
);

CREATE UNIQUE INDEX "uk_t_author_email" ON "t_author" ("email");

CREATE UNIQUE INDEX "uk_post_title_slug" ON "post" ("title", "slug");

CREATE UNIQUE INDEX "uk_tag_name" ON "tag" ("name");

COMMENT ON TABLE "t_author" IS 'Blog author';

COMMENT ON COLUMN "t_author"."created_at" IS 'Created at';

ALTER TABLE "post" ADD CONSTRAINT "fk_post_author_id" FOREIGN KEY ("author_id") REFERENCES "t_author" ("id") ON DELETE CASCADE;

COMMENT ON TABLE "post" IS 'A published article.';

ALTER TABLE "post_tag" ADD CONSTRAINT "fk_post_tag_post_id" FOREIGN KEY ("post_id") REFERENCES "post" ("id");

ALTER TABLE "post_tag" ADD CONSTRAINT "fk_post_tag_tag_id" FOREIGN KEY ("tag_id") REFERENCES "tag" ("id");
"#;

// ============================================================================
// Fixture Output Tests
// ============================================================================

/// The blog fixture exercises inheritance, comments, composite keys and a junction table
#[test]
fn test_blog_postgresql_script() {
    let ctx = TestContext::with_fixture("blog");
    let result = ctx.generate(None);

    assert!(result.success, "generation failed: {:?}", result.errors);
    let sql_path = result.sql_path.unwrap();
    assert_eq!(sql_path, ctx.project_dir.join("project.sql"));
    assert_eq!(fs::read_to_string(&sql_path).unwrap(), BLOG_POSTGRESQL);
}

#[test]
fn test_shop_mysql_script() {
    let ctx = TestContext::with_fixture("shop");
    let result = ctx.generate(None);

    assert!(result.success, "generation failed: {:?}", result.errors);
    let sql_path = result.sql_path.unwrap();
    assert_eq!(sql_path, ctx.project_dir.join("build").join("shop.sql"));

    let script = fs::read_to_string(&sql_path).unwrap();
    assert_script_contains!(
        script,
        "CREATE TABLE `customer` (\n  `created_by` VARCHAR(255),\n  `id` BIGINT NOT NULL AUTO_INCREMENT,\n  `email` VARCHAR(255) NOT NULL,\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    );
    assert_script_contains!(
        script,
        "CREATE TABLE `orders` (\n  `id` BIGINT NOT NULL AUTO_INCREMENT,\n  `buyer_id` BIGINT,\n  `total` DECIMAL(12,2),\n  `status` VARCHAR(255),\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    );
    assert_script_contains!(
        script,
        "CREATE TABLE `order_items` (\n  `order_id` BIGINT NOT NULL,\n  `product_id` BIGINT NOT NULL,\n  PRIMARY KEY (`order_id`, `product_id`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
    );
    assert_script_contains!(script, "`sku` VARCHAR(32)");
    assert_script_contains!(script, "CREATE UNIQUE INDEX `uk_customer_email` ON `customer` (`email`);");
    assert_script_contains!(
        script,
        "ALTER TABLE `orders` ADD CONSTRAINT `fk_orders_buyer_id` FOREIGN KEY (`buyer_id`) REFERENCES `customer` (`id`);"
    );
    assert_script_contains!(
        script,
        "ALTER TABLE `order_items` ADD CONSTRAINT `fk_order_items_product_id` FOREIGN KEY (`product_id`) REFERENCES `product` (`id`);"
    );
    assert!(!script.contains("coupon"), "unresolved relationship must be skipped");
    assert!(!script.contains("auditable"), "mapped superclass has no table");
}

#[test]
fn test_shop_statement_order() {
    let ctx = TestContext::with_fixture("shop");
    let script = ctx.generate_successfully(None);
    let statements = statements(&script);

    let creates: Vec<&str> = statements
        .iter()
        .filter(|s| s.starts_with("CREATE TABLE"))
        .map(|s| s.lines().next().unwrap())
        .collect();
    assert_eq!(
        creates,
        vec![
            "CREATE TABLE `customer` (",
            "CREATE TABLE `orders` (",
            "CREATE TABLE `product` (",
            "CREATE TABLE `order_items` (",
        ]
    );
    assert_eq!(statements.len(), 8);
}

// ============================================================================
// Option Tests
// ============================================================================

#[test]
fn test_dialect_override() {
    let ctx = TestContext::with_fixture("blog");
    let script = ctx.generate_successfully(Some(Dialect::Sqlite));

    assert!(!script.contains("ALTER TABLE"));
    assert!(!script.contains("COMMENT ON"));
    assert_script_contains!(script, "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT");
    assert_script_contains!(
        script,
        "CONSTRAINT \"fk_post_author_id\" FOREIGN KEY (\"author_id\") REFERENCES \"t_author\" (\"id\") ON DELETE CASCADE"
    );
}

#[test]
fn test_sqlserver_comments() {
    let ctx = TestContext::with_fixture("blog");
    let script = ctx.generate_successfully(Some(Dialect::SqlServer));

    assert_script_contains!(script, "[id] BIGINT NOT NULL IDENTITY(1,1)");
    assert_script_contains!(script, "[bio] NVARCHAR(MAX)");
    assert_script_contains!(
        script,
        "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'Blog author', @level0type = N'SCHEMA', @level0name = N'dbo', @level1type = N'TABLE', @level1name = N't_author';"
    );
}

#[test]
fn test_output_path_override() {
    let ctx = TestContext::with_fixture("shop");
    let output = ctx.project_dir.join("nested").join("custom.sql");

    let written = entity_ddl::generate_ddl(GenerateOptions {
        project_path: ctx.project_path(),
        output_path: Some(output.clone()),
        dialect: None,
        verbose: true,
    })
    .unwrap();

    assert_eq!(written, output);
    assert!(output.is_file());
    assert!(!ctx.project_dir.join("build").join("shop.sql").exists());
}

#[test]
fn test_regeneration_is_identical() {
    let ctx = TestContext::with_fixture("blog");
    let first = ctx.generate_successfully(None);
    let second = ctx.generate_successfully(None);
    assert_eq!(first, second);
}

#[test]
fn test_project_without_entities() {
    let ctx = TestContext::with_files("<Project/>", &[]);
    let script = ctx.generate_successfully(None);
    assert_eq!(script, "\n");
}

#[test]
fn test_entities_in_any_file_order() {
    let ctx = TestContext::with_files(
        r#"<Project><PropertyGroup><Dialect>postgresql</Dialect></PropertyGroup></Project>"#,
        &[
            (
                "a/child.entities.xml",
                r#"<Entities>
  <Class qualifiedName="com.example.Child">
    <Marker name="jakarta.persistence.Entity"/>
    <Field name="id" type="long"/>
    <Field name="parent" type="com.example.Parent">
      <Marker name="jakarta.persistence.ManyToOne"/>
    </Field>
  </Class>
</Entities>"#,
            ),
            (
                "b/parent.entities.xml",
                r#"<Entities>
  <Class qualifiedName="com.example.Parent">
    <Marker name="jakarta.persistence.Entity"/>
    <Field name="id" type="int"/>
  </Class>
</Entities>"#,
            ),
        ],
    );
    let script = ctx.generate_successfully(None);
    let statements = statements(&script);

    assert_eq!(statements.len(), 3);
    assert!(statements[0].starts_with("CREATE TABLE \"child\""));
    assert!(statements[0].contains("\"parent_id\" INTEGER,"), "reference typed like the parent key");
    assert!(statements[1].starts_with("CREATE TABLE \"parent\""));
    assert_eq!(
        statements[2],
        "ALTER TABLE \"child\" ADD CONSTRAINT \"fk_child_parent_id\" FOREIGN KEY (\"parent_id\") REFERENCES \"parent\" (\"id\");"
    );
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_invalid_snapshot_fails() {
    let ctx = TestContext::with_files("<Project/>", &[("broken.entities.xml", "<Entities><Class>")]);
    let result = ctx.generate(None);

    assert!(!result.success);
    assert!(
        result.errors[0].contains("Failed to parse entity snapshot"),
        "unexpected error: {:?}",
        result.errors
    );
    assert!(!ctx.project_dir.join("project.sql").exists(), "no partial output");
}

#[test]
fn test_unknown_dialect_fails() {
    let ctx = TestContext::with_files(
        "<Project><PropertyGroup><Dialect>db2</Dialect></PropertyGroup></Project>",
        &[],
    );
    let result = ctx.generate(None);
    assert!(!result.success);
    assert!(result.errors[0].contains("Unknown dialect: db2"), "unexpected error: {:?}", result.errors);
}

#[test]
fn test_missing_project_fails() {
    let ctx = TestContext::with_files("<Project/>", &[]);
    let result = entity_ddl::generate_ddl(GenerateOptions {
        project_path: ctx.project_dir.join("missing.entproj"),
        output_path: None,
        dialect: None,
        verbose: false,
    });
    let err = result.unwrap_err();
    assert!(
        format!("{:#}", err).contains("Failed to read project file"),
        "unexpected error: {:#}",
        err
    );
}
