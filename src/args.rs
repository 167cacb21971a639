use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atomic CSS generator - builds the utility stylesheet and its reference guide
#[derive(Parser, Debug)]
#[command(name = "atomic-css-gen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the stylesheet, the guide and (optionally) the compressed file
    Generate(GenerateArgs),
    /// List every utility family with its rule counts
    Families(FamiliesArgs),
}

impl Cli {
    /// The command to run; no subcommand means a default `generate`
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Base directory relative output paths are resolved against
    #[arg(
        long = "base-dir",
        value_name = "PATH",
        env = "ATOMIC_CSS_BASE_DIR",
        help = "Directory the output directory is resolved against (defaults to the directory holding the executable)"
    )]
    pub base_dir: Option<PathBuf>,

    /// Output directory
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "PATH",
        help = "Directory for the stylesheet and guide (default: static/css)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Stylesheet file name
    #[arg(
        long = "css-name",
        value_name = "FILE",
        help = "File name of the generated stylesheet (default: generated.css)"
    )]
    pub css_name: Option<String>,

    /// Guide file name
    #[arg(
        long = "docs-name",
        value_name = "FILE",
        help = "File name of the Markdown guide (default: style-guide.md)"
    )]
    pub docs_name: Option<String>,

    /// Manifest output path (JSON)
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "PATH",
        help = "Also write a JSON manifest with per-family rule counts"
    )]
    pub manifest: Option<PathBuf>,

    /// Skip the external compressor
    #[arg(
        long = "no-compress",
        default_value_t = false,
        help = "Do not run the external compressor on the stylesheet"
    )]
    pub no_compress: bool,

    /// Unminified output
    #[arg(
        long = "pretty",
        default_value_t = false,
        help = "Write one rule per line instead of minified output"
    )]
    pub pretty: bool,

    /// Dry run (don't write output files)
    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Generate everything but don't write output files"
    )]
    pub dry_run: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of threads used to emit families (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,
}

/// Arguments for the families command
#[derive(Parser, Debug, Clone, Default)]
pub struct FamiliesArgs {
    /// Print as JSON
    #[arg(
        long = "json",
        default_value_t = false,
        help = "Print the family list as JSON"
    )]
    pub json: bool,
}

impl GenerateArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(css), Some(docs)) = (&self.css_name, &self.docs_name) {
            if css == docs {
                return Err("Stylesheet and guide file names must be different".to_string());
            }
        }

        for name in [&self.css_name, &self.docs_name].into_iter().flatten() {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(format!("Invalid output file name: '{}'", name));
            }
        }

        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err("Number of jobs must be at least 1".to_string());
            }
        }

        Ok(())
    }
}
