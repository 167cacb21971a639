use atomic_css_gen::{generate, run, CompressionOutcome, GenerateArgs, GeneratorConfig, RunOptions};
use regex::Regex;
use std::fs;
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    config.output.base_dir = Some(dir.to_path_buf());
    config.compression.enabled = false;
    config
}

#[test]
fn test_end_to_end_generation() {
    let temp_dir = tempdir().unwrap();
    let config = config_in(temp_dir.path());

    let report = run(&config, &RunOptions::default()).unwrap();

    let css_path = temp_dir.path().join("static/css/generated.css");
    let docs_path = temp_dir.path().join("static/css/style-guide.md");
    assert_eq!(report.css_path, css_path);
    assert!(css_path.exists());
    assert!(docs_path.exists());

    let css = fs::read_to_string(&css_path).unwrap();
    assert_eq!(css, report.css_content);
    assert!(css.starts_with(".p-0{padding:0;}.m-0{margin:0;}"));
    assert!(css.contains(".text-start{text-align:start;}"));
    assert!(css.contains(".fs-1{font-size:2.5rem;}"));
    assert!(css.contains(".fw-700-imp{font-weight:700 !important;}"));
    assert!(css.contains(".rotate-n90{transform:rotate(-90deg);}"));
    assert!(css.contains(".gap-4{gap:1.0rem;}"));
    assert!(css.ends_with(".not-sr-only-imp{position:static !important;width:auto !important;height:auto !important;padding:0 !important;margin:0 !important;overflow:visible !important;clip:auto !important;white-space:normal !important;}"));

    let docs = fs::read_to_string(&docs_path).unwrap();
    assert!(docs.starts_with("# CSS Utility Classes"));

    assert_eq!(report.compression, CompressionOutcome::Skipped);
}

#[test]
fn test_minified_output_shape() {
    let temp_dir = tempdir().unwrap();
    let report = run(&config_in(temp_dir.path()), &RunOptions::default()).unwrap();
    let css = report.css_content;

    assert!(!css.contains(": "));
    assert!(!css.contains("; "));
    assert!(!css.contains(" {"));
    assert!(!css.contains("} "));
    assert!(!css.contains('\n'));

    let block = Regex::new(r"\.[a-z0-9-]+\{[^{}]+\}").unwrap();
    let blocks = block.find_iter(&css).count();
    assert_eq!(blocks, report.total_rules);
}

#[test]
fn test_generation_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    let config = config_in(temp_dir.path());

    run(&config, &RunOptions::default()).unwrap();
    let first = fs::read(config.css_path()).unwrap();
    let first_docs = fs::read(config.docs_path()).unwrap();

    run(&config, &RunOptions::default()).unwrap();
    let second = fs::read(config.css_path()).unwrap();
    let second_docs = fs::read(config.docs_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_docs, second_docs);
}

#[test]
fn test_jobs_do_not_change_output() {
    let temp_dir = tempdir().unwrap();
    let config = config_in(temp_dir.path());

    let single = run(&config, &RunOptions { jobs: Some(1), dry_run: true, ..RunOptions::default() }).unwrap();
    let many = run(&config, &RunOptions { jobs: Some(4), dry_run: true, ..RunOptions::default() }).unwrap();
    assert_eq!(single.css_content, many.css_content);
}

#[test]
fn test_pretty_output() {
    let temp_dir = tempdir().unwrap();
    let mut config = config_in(temp_dir.path());
    config.output.pretty = true;

    let report = run(&config, &RunOptions::default()).unwrap();
    let lines: Vec<_> = report.css_content.lines().collect();
    assert_eq!(lines.len(), report.total_rules);
    assert_eq!(lines[0], ".p-0 {padding: 0;}");
}

#[test]
fn test_manifest_written() {
    let temp_dir = tempdir().unwrap();
    let mut config = config_in(temp_dir.path());
    config.output.manifest = Some("manifest.json".into());

    let report = run(&config, &RunOptions::default()).unwrap();
    let manifest_path = temp_dir.path().join("manifest.json");
    assert_eq!(report.manifest_path.as_deref(), Some(manifest_path.as_path()));

    let raw = fs::read_to_string(&manifest_path).unwrap();
    assert!(raw.find("\"spacing\"").unwrap() < raw.find("\"accessibility\"").unwrap());

    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(manifest["metadata"]["total_rules"].as_u64().unwrap() as usize, report.total_rules);
    assert_eq!(manifest["families"]["accessibility"]["normal"], 2);
    assert_eq!(manifest["families"]["accessibility"]["important"], 2);
    assert_eq!(
        manifest["statistics"]["css_size_bytes"].as_u64().unwrap() as usize,
        report.css_content.len()
    );

    let families = manifest["families"].as_object().unwrap();
    assert_eq!(families.keys().next().map(String::as_str), Some("spacing"));
}

#[test]
fn test_generate_from_args() {
    let temp_dir = tempdir().unwrap();
    let args = GenerateArgs {
        base_dir: Some(temp_dir.path().to_path_buf()),
        output_dir: Some("public".into()),
        css_name: Some("utilities.css".to_string()),
        no_compress: true,
        ..GenerateArgs::default()
    };

    let report = generate(args).unwrap();
    assert_eq!(report.css_path, temp_dir.path().join("public/utilities.css"));
    assert!(report.css_path.exists());
    assert!(temp_dir.path().join("public/style-guide.md").exists());
}

#[test]
fn test_missing_compressor_does_not_fail_the_run() {
    let temp_dir = tempdir().unwrap();
    let mut config = config_in(temp_dir.path());
    config.compression.enabled = true;
    config.compression.command = "atomic-css-gen-missing-compressor".to_string();

    let report = run(&config, &RunOptions::default()).unwrap();
    assert!(matches!(report.compression, CompressionOutcome::Failed(_)));
    assert!(report.css_path.exists());
    assert!(report.docs_path.exists());
}

#[test]
fn test_default_output_ignores_working_directory() {
    let config = GeneratorConfig::default();
    let before = config.css_path();

    let original = std::env::current_dir().unwrap();
    let elsewhere = tempdir().unwrap();
    std::env::set_current_dir(elsewhere.path()).unwrap();
    let after = config.css_path();
    let report = run(&config, &RunOptions { dry_run: true, ..RunOptions::default() }).unwrap();
    std::env::set_current_dir(original).unwrap();

    assert_eq!(before, after);
    assert_eq!(report.css_path, before);
    assert!(!before.starts_with(elsewhere.path()));
    assert!(!elsewhere.path().join("static").exists());
}
