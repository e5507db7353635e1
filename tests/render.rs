mod common;

use std::fs;
use std::path::PathBuf;

use common::TestContext;
use mc_init::domain::template::{TemplateNode, TemplateTree};
use mc_init::domain::{Implementation, Permission, PermissionDetails};
use mc_init::services::{DirectoryTemplateSource, EmbeddedTemplateSource};
use mc_init::{ComponentConfig, Manifest, Namespace, render_project};

fn config(display_name: &str, namespace: &str) -> ComponentConfig {
    ComponentConfig::new(display_name, Namespace::new(namespace).unwrap())
}

#[test]
fn placeholders_are_replaced_in_nested_files() {
    let ctx = TestContext::new();
    let tree = TemplateTree::new(vec![
        TemplateNode::file("README.md", "# Welcome to {{ displayName }}"),
        TemplateNode::dir(
            "docs",
            vec![TemplateNode::file("usage.md", "npm i {{ namespace }}\n{{ description }}")],
        ),
    ]);
    let mut config = config("Click Counter", "click-counter");
    config.description = "Counts clicks".into();

    let summary = render_project(&config, &tree, ctx.work_dir()).unwrap();

    assert_eq!(summary.root, PathBuf::from("click-counter"));
    assert_eq!(ctx.read("click-counter/README.md"), "# Welcome to Click Counter");
    assert_eq!(ctx.read("click-counter/docs/usage.md"), "npm i click-counter\nCounts clicks");
}

#[test]
fn manifest_round_trips_the_collected_config() {
    let ctx = TestContext::new();
    let mut config = config("Click Counter", "click-counter");
    config.implements = vec![Implementation::ClientEvents];
    config.permissions.insert(
        Permission::ServeStaticFiles,
        PermissionDetails { description: "Serve the widget bundle".into(), required: true },
    );

    render_project(&config, &TemplateTree::default(), ctx.work_dir()).unwrap();

    let written = ctx.read("click-counter/manifest.json");
    assert!(written.ends_with("}\n"));
    assert_eq!(Manifest::from_json(&written).unwrap(), config.manifest());
}

#[test]
fn checklist_item_is_ticked() {
    let ctx = TestContext::new();
    let tree = TemplateTree::new(vec![TemplateNode::file(
        "README.md",
        "- [ ] find & replace `{{ namespace }}`\n- [ ] write docs\n",
    )]);

    render_project(&config("Tool", "tool"), &tree, ctx.work_dir()).unwrap();

    assert_eq!(ctx.read("tool/README.md"), "- [x] find & replace `tool`\n- [ ] write docs\n");
}

#[test]
fn source_files_are_copied_verbatim() {
    let ctx = TestContext::new();
    let tree = TemplateTree::new(vec![TemplateNode::dir(
        "src",
        vec![TemplateNode::file("index.ts", "const name = '{{ namespace }}'")],
    )]);

    render_project(&config("Tool", "tool"), &tree, ctx.work_dir()).unwrap();

    assert_eq!(ctx.read("tool/src/index.ts"), "const name = '{{ namespace }}'");
}

#[test]
fn scoped_namespace_renders_into_nested_directories() {
    let ctx = TestContext::new();
    let tree = TemplateTree::new(vec![TemplateNode::file("package.json", "{{ namespace }}")]);

    render_project(&config("Tool", "@acme/tool"), &tree, ctx.work_dir()).unwrap();

    assert_eq!(ctx.read("@acme/tool/package.json"), "@acme/tool");
}

#[test]
fn directory_template_renders_like_an_in_memory_one() {
    let ctx = TestContext::new();
    ctx.write("template/README.md", "# {{ displayName }}");
    ctx.write("template/src/index.ts", "// {{ displayName }}");
    let source = DirectoryTemplateSource::new(ctx.work_dir().join("template"));

    render_project(&config("Tool", "tool"), &source, ctx.work_dir()).unwrap();

    assert_eq!(ctx.read("tool/README.md"), "# Tool");
    assert_eq!(ctx.read("tool/src/index.ts"), "// {{ displayName }}");
}

#[test]
fn embedded_template_produces_a_buildable_project() {
    let ctx = TestContext::new();
    let mut config = config("Click Counter", "click-counter");
    config.tooling.vitest = false;

    let summary = render_project(&config, &EmbeddedTemplateSource::new(), ctx.work_dir()).unwrap();

    let package: serde_json::Value =
        serde_json::from_str(&ctx.read("click-counter/package.json")).unwrap();
    assert_eq!(package["name"], "click-counter");
    assert!(package["scripts"].get("test").is_none());
    assert!(package["scripts"].get("test:dev").is_none());
    assert!(package["devDependencies"].get("vitest").is_none());
    assert_eq!(package["scripts"]["lint"], "eslint --ext .ts src");
    assert!(package["devDependencies"].get("eslint").is_some());

    let readme = ctx.read("click-counter/README.md");
    assert!(readme.starts_with("# Click Counter"));
    assert!(readme.contains("- [x] find & replace `click-counter`"));
    assert!(!readme.contains("{{"));

    assert!(ctx.work_dir().join("click-counter/src/index.ts").is_file());
    assert!(!ctx.work_dir().join("click-counter/vitest.config.ts").exists());
    assert!(summary.skipped.contains(&PathBuf::from("vitest.config.ts")));
    assert!(fs::metadata(ctx.work_dir().join("click-counter/manifest.json")).is_ok());
}

#[test]
fn embedded_template_with_all_tools_keeps_every_script() {
    let ctx = TestContext::new();

    render_project(&config("Tool", "tool"), &EmbeddedTemplateSource::new(), ctx.work_dir())
        .unwrap();

    let package: serde_json::Value = serde_json::from_str(&ctx.read("tool/package.json")).unwrap();
    for script in ["build", "lint", "lint:fix", "format", "test", "test:dev"] {
        assert!(package["scripts"].get(script).is_some(), "missing script {script}");
    }
}

#[test]
fn rendering_twice_overwrites_in_place() {
    let ctx = TestContext::new();
    let tree = TemplateTree::new(vec![TemplateNode::file("README.md", "{{ description }}")]);
    let mut config = config("Tool", "tool");

    render_project(&config, &tree, ctx.work_dir()).unwrap();
    config.description = "Second pass".into();
    let summary = render_project(&config, &tree, ctx.work_dir()).unwrap();

    assert!(summary.reused_existing_dir);
    assert_eq!(ctx.read("tool/README.md"), "Second pass");
}
