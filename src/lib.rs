pub mod args;
pub mod config;
pub mod errors;
pub mod families;
pub mod manifest;
pub mod rule;
pub mod serializer;
pub mod style_guide;
pub mod tables;
pub mod writer;

pub use args::{Cli, Commands, FamiliesArgs, GenerateArgs};
pub use config::{CompressionConfig, GeneratorConfig, OutputConfig};
pub use errors::{GeneratorError, Result};
pub use families::{registry, UtilityFamily};
pub use manifest::{FamilyCounts, Manifest, ManifestBuilder};
pub use rule::{Importance, Rule, RuleSheet};
pub use writer::CompressionOutcome;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Runtime switches that are not part of the configuration file
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub verbose: bool,
    pub jobs: Option<usize>,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl From<&GenerateArgs> for RunOptions {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            verbose: args.verbose,
            jobs: args.jobs,
            progress: !args.verbose,
        }
    }
}

/// Result of a generation run
#[derive(Debug)]
pub struct GenerationReport {
    pub css_path: PathBuf,
    pub docs_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub css_content: String,
    pub docs_content: String,
    pub total_rules: usize,
    pub compression: CompressionOutcome,
    pub duration: Duration,
}

/// Emit every family for one variant, in registry order.
///
/// Families are emitted in parallel into their own sheets and concatenated
/// afterwards, so the result is identical to a sequential pass.
pub fn emit_variant(importance: Importance) -> RuleSheet {
    let sheets: Vec<RuleSheet> = registry()
        .par_iter()
        .map(|family| family.rules(importance))
        .collect();

    let mut sheet = RuleSheet::new();
    for part in sheets {
        sheet.extend(part);
    }
    sheet
}

/// The complete rule sequence: all normal rules, then all important ones.
pub fn build_sheet() -> RuleSheet {
    let mut sheet = RuleSheet::new();
    for importance in Importance::ALL {
        sheet.extend(emit_variant(importance));
    }
    sheet
}

/// The minified (or pretty) stylesheet text.
pub fn build_stylesheet(pretty: bool) -> String {
    serializer::serialize(&build_sheet(), pretty)
}

/// Rule counts per family, in registry order.
pub fn family_counts() -> Vec<(&'static str, FamilyCounts)> {
    registry()
        .iter()
        .map(|family| {
            let counts = FamilyCounts {
                normal: family.rules(Importance::Normal).len(),
                important: family.rules(Importance::Important).len(),
            };
            (family.name(), counts)
        })
        .collect()
}

/// Main entry point: resolve configuration from `args` and run the pipeline
pub fn generate(args: GenerateArgs) -> Result<GenerationReport> {
    args.validate().map_err(GeneratorError::InvalidInput)?;
    let config = GeneratorConfig::resolve(&args)?;
    run(&config, &RunOptions::from(&args))
}

/// Run the full generate-and-write pipeline with an explicit configuration
pub fn run(config: &GeneratorConfig, options: &RunOptions) -> Result<GenerationReport> {
    let start_time = Instant::now();

    let css_path = config.css_path();
    let docs_path = config.docs_path();
    if css_path == docs_path {
        return Err(GeneratorError::InvalidInput(
            "Stylesheet and guide paths must be different".to_string(),
        ));
    }

    tracing::debug!(
        css = %css_path.display(),
        docs = %docs_path.display(),
        families = registry().len(),
        "starting generation"
    );

    let progress_bar = stage_progress(options.progress);

    progress_bar.set_message("Emitting rules...");
    let sheet = match options.jobs {
        Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(build_sheet),
            Err(e) => {
                tracing::warn!("could not build a {}-thread pool, using the global one: {}", jobs, e);
                build_sheet()
            }
        },
        None => build_sheet(),
    };
    progress_bar.inc(1);

    progress_bar.set_message("Serializing...");
    let css_content = serializer::serialize(&sheet, config.output.pretty);
    let docs_content = style_guide::render();
    progress_bar.inc(1);

    let mut compression = CompressionOutcome::Skipped;
    let mut manifest_path = None;

    if !options.dry_run {
        progress_bar.set_message("Writing stylesheet...");
        writer::write_output(&css_path, &css_content)?;
        progress_bar.inc(1);

        progress_bar.set_message("Compressing...");
        compression = writer::compress(&css_path, &config.compressed_path(), &config.compression);
        progress_bar.inc(1);

        progress_bar.set_message("Writing guide...");
        writer::write_output(&docs_path, &docs_content)?;
        progress_bar.inc(1);

        if let Some(path) = config.manifest_path() {
            let manifest = ManifestBuilder::new()
                .started_at(start_time)
                .with_minified(!config.output.pretty)
                .with_families(family_counts())
                .build(css_content.len(), docs_content.len(), compression.compressed_size());
            writer::write_output(&path, &manifest.to_pretty_json()?)?;
            manifest_path = Some(path);
        }
    } else {
        progress_bar.inc(3);
    }

    progress_bar.finish_with_message(format!("✓ {} rules", sheet.len()));

    let report = GenerationReport {
        css_path,
        docs_path,
        manifest_path,
        css_content,
        docs_content,
        total_rules: sheet.len(),
        compression,
        duration: start_time.elapsed(),
    };

    if options.verbose {
        tracing::info!(
            rules = report.total_rules,
            css_bytes = report.css_content.len(),
            docs_bytes = report.docs_content.len(),
            elapsed_ms = report.duration.as_millis() as u64,
            "generation complete"
        );
    }

    Ok(report)
}

/// Progress bar over the pipeline stages
fn stage_progress(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::with_draw_target(Some(5), ProgressDrawTarget::hidden());
    }

    let pb = ProgressBar::new(5);
    match ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
    {
        Ok(style) => pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  ")),
        Err(e) => tracing::debug!("falling back to the default progress style: {}", e),
    }
    pb
}
