use ant2maven_core::{convert, is_ant_project};
use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;

/// ant2maven - Convert NetBeans Ant projects to the Maven layout
#[derive(Parser)]
#[command(name = "ant2maven")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Convert a NetBeans Ant project folder to the Maven directory convention", long_about = None)]
struct Cli {
    /// Path to the NetBeans Ant project folder
    project_dir: PathBuf,

    /// Also print the conversion report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Validate before touching the filesystem at all.
    if !is_ant_project(&cli.project_dir) {
        bail!("Invalid NetBeans Ant project folder.");
    }

    println!("Project path: {}", cli.project_dir.display());

    // Stream each progress line to stdout as it is emitted.
    let mut sink = |line: &str| println!("{line}");
    let report = match convert(&cli.project_dir, &mut sink) {
        Ok(report) => report,
        Err(err) => bail!("Error during conversion: {err}"),
    };

    if !report.is_clean() {
        eprintln!("{} file(s) could not be copied", report.failures.len());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize conversion report")?;
        println!("{json}");
    }

    Ok(())
}
