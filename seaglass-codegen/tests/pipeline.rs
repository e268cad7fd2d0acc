//! End-to-end builds over a temporary project tree.

use std::{fs, path::Path, time::Duration};

use seaglass_codegen::pipeline::{
    GenerationContext, InputStylesheet, Pipeline, Severity, SnapshotPlugin,
};
use seaglass_manifest::{CONFIG_FILE, ConfigFile};
use seaglass_scan::ScanControl;
use tempfile::TempDir;

const CONFIG: &str = r##"
darkMode = "media"
plugins = ["forms"]

[content]
files = ["*.html", "src/**/*.rs"]

[theme.colors]
white = "#ffffff"

[theme.colors.teal]
500 = "var(--color-teal-500)"

[theme.extend.height]
108 = "26rem"
"##;

const INPUT_CSS: &str = "@tailwind base;
@tailwind components;
:root {
  --color-teal-400: #2dd4bf;
}

@tailwind utilities;
";

fn write(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), CONFIG_FILE, CONFIG);
    write(
        temp.path(),
        "index.html",
        r#"<div class="bg-teal-500 h-108 dark:text-white">my-bg-teal-500-var bg-purple-500</div>"#,
    );
    write(
        temp.path(),
        "src/app.rs",
        r#"view! { <p class="text-white">"hi"</p> }"#,
    );
    temp
}

fn context(root: &Path) -> GenerationContext {
    let config = ConfigFile::open(root.join(CONFIG_FILE)).unwrap();
    GenerationContext::new(config.manifest().clone(), config.base_dir())
}

#[test]
fn build_splices_rules_into_input() {
    let temp = project();
    let ctx = context(temp.path()).with_input(InputStylesheet::new("input.css", INPUT_CSS));

    let ctx = Pipeline::new().run(ctx).unwrap();

    let used: Vec<&str> = ctx.used.as_ref().unwrap().iter().map(String::as_str).collect();
    assert_eq!(used, vec!["bg-teal-500", "dark:text-white", "h-108", "text-white"]);
    assert_eq!(ctx.scanned_files.len(), 2);

    insta::assert_snapshot!(ctx.output.unwrap(), @r#"
    :root {
      --color-teal-400: #2dd4bf;
    }

    .h-108 {
      height: 26rem;
    }

    .bg-teal-500 {
      background-color: var(--color-teal-500);
    }

    .text-white {
      color: #ffffff;
    }

    @media (prefers-color-scheme: dark) {
      .dark\:text-white {
        color: #ffffff;
      }
    }
    "#);
}

#[test]
fn build_reports_warnings() {
    let temp = project();
    let ctx = context(temp.path()).with_input(InputStylesheet::new("input.css", INPUT_CSS));

    let ctx = Pipeline::new().run(ctx).unwrap();

    let warnings: Vec<(&str, &str)> = ctx
        .warnings()
        .map(|d| (d.phase.as_str(), d.message.as_str()))
        .collect();
    assert_eq!(
        warnings,
        vec![
            ("validate", "plugin 'forms' is not available and will be ignored"),
            (
                "emit",
                "custom property '--color-teal-500' is used but never defined"
            ),
        ]
    );
    assert!(!ctx.has_errors());
}

#[test]
fn build_without_input_emits_rules_only() {
    let temp = project();
    let ctx = Pipeline::new().run(context(temp.path())).unwrap();

    let output = ctx.output.unwrap();
    assert!(output.starts_with(".h-108 {\n"));
    assert!(!output.contains("my-bg-teal-500-var"));
    assert!(!output.contains("purple"));
    assert_eq!(ctx.stylesheet.unwrap().len(), 4);
}

#[test]
fn rebuilds_are_identical() {
    let temp = project();
    let first = Pipeline::new().run(context(temp.path())).unwrap();
    let second = Pipeline::new().run(context(temp.path())).unwrap();
    assert_eq!(first.output, second.output);
}

#[test]
fn undecodable_file_is_skipped_with_warning() {
    let temp = project();
    write(temp.path(), "broken.html", [0x68, 0x2d, 0x31, 0x30, 0x38, 0xff]);

    let ctx = Pipeline::new().run(context(temp.path())).unwrap();

    let scan_warnings: Vec<_> = ctx.warnings().filter(|d| d.phase == "scan").collect();
    assert_eq!(scan_warnings.len(), 1);
    assert!(
        scan_warnings[0]
            .location
            .as_deref()
            .unwrap()
            .ends_with("broken.html")
    );
    assert!(ctx.output.unwrap().contains(".bg-teal-500 {"));
}

#[test]
fn interrupted_scan_never_reaches_output() {
    let temp = project();
    let control = ScanControl::new();
    control.interrupt();
    let mut ctx = context(temp.path()).with_control(control);

    let err = Pipeline::new().run_in(&mut ctx).unwrap_err();

    assert!(format!("{err:#}").contains("interrupted"));
    assert!(ctx.candidates.is_none());
    assert!(ctx.registry.is_none());
    assert!(ctx.output.is_none());
}

#[test]
fn expired_deadline_aborts_build() {
    let temp = project();
    let control = ScanControl::new().with_timeout(Duration::ZERO);
    let mut ctx = context(temp.path()).with_control(control);

    let err = Pipeline::new().run_in(&mut ctx).unwrap_err();

    assert!(format!("{err:#}").contains("deadline exceeded"));
    assert!(ctx.output.is_none());
}

#[test]
fn snapshot_plugin_writes_every_phase() {
    let temp = project();
    let debug_dir = temp.path().join(".seaglass/debug");

    let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    pipeline.run(context(temp.path())).unwrap();

    for phase in ["validate", "scan", "resolve", "filter", "emit"] {
        assert!(debug_dir.join(format!("{phase}.json")).exists(), "{phase}");
    }
    let emit = fs::read_to_string(debug_dir.join("emit.json")).unwrap();
    assert!(emit.contains("\"selector\": \".bg-teal-500\""));
}

#[test]
fn check_pipeline_skips_content() {
    let temp = project();
    write(
        temp.path(),
        CONFIG_FILE,
        r#"
        [theme.colors.teal]
        500 = "var(--brand-teal)"
        "#,
    );

    let ctx = Pipeline::check().run(context(temp.path())).unwrap();

    assert!(ctx.candidates.is_none());
    assert!(ctx.registry.is_some());
    let messages: Vec<&str> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "color 'teal-500' references '--brand-teal', expected '--color-teal-500'",
            "no content files configured, the generated stylesheet will be empty",
        ]
    );
}
