use anyhow::Context;
use clap::Parser;
use atomic_css_gen::{family_counts, generate, Cli, Commands, FamiliesArgs, GenerateArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();
    let command = cli.into_command();

    let verbose = matches!(&command, Commands::Generate(args) if args.verbose);
    init_tracing(verbose);

    match command {
        Commands::Generate(args) => run_generate(args),
        Commands::Families(args) => list_families(&args),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    println!("Generating CSS...");
    let dry_run = args.dry_run;

    match generate(args) {
        Ok(report) if dry_run => {
            println!("Dry run: {} rules ({} bytes), nothing written", report.total_rules, report.css_content.len());
            Ok(())
        }
        Ok(report) => {
            println!("Generated {} rules into {}", report.total_rules, report.css_path.display());
            println!("{}", report.compression);
            println!("Generated documentation at {}", report.docs_path.display());
            if let Some(path) = &report.manifest_path {
                println!("Wrote manifest to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn list_families(args: &FamiliesArgs) -> anyhow::Result<()> {
    let counts = family_counts();

    if args.json {
        let listing: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(name, counts)| {
                let value = serde_json::to_value(counts).context("Failed to serialize family counts")?;
                Ok((name.to_string(), value))
            })
            .collect::<anyhow::Result<_>>()?;
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for (name, counts) in &counts {
        println!("{:<22} {:>6} {:>6}", name, counts.normal, counts.important);
    }
    let total: usize = counts.iter().map(|(_, c)| c.total()).sum();
    println!("{:<22} {:>13}", "total", total);
    Ok(())
}
