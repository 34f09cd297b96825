use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use torstats::analysis::{analyze_directories, ScanConfig};
use torstats::descriptor::LavaProvider;
use torstats::report::{render_interactive, write_batch, Report};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = torstats::parse_args();

    let roots: Vec<PathBuf> = matches
        .get_many::<String>("dirs")
        .expect("at least one directory is required")
        .map(PathBuf::from)
        .collect();

    let config = ScanConfig {
        size_quantum_mib: *matches
            .get_one::<u64>("size_quantum")
            .expect("has a default"),
        quiet: matches.get_flag("quiet"),
    };

    let stats = analyze_directories(&roots, &LavaProvider, &config)?;

    // Terminate the spinner line before printing tables
    if !config.quiet {
        eprintln!();
    }

    let report = Report::from_stats(&stats, config.size_quantum_mib);
    if matches.get_flag("batch") {
        let output_dir = PathBuf::from(
            matches
                .get_one::<String>("output_dir")
                .expect("has a default"),
        );
        write_batch(&report, &output_dir).context("failed to write batch output")?;
    } else {
        let stdout = std::io::stdout();
        render_interactive(&report, &mut stdout.lock()).context("failed to write report")?;
    }

    Ok(())
}
