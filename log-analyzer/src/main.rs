use clap::Parser;
use log_analyzer::{
    AnalyzeError,
    ingest::{Inputs, analyze_file, resolve_inputs},
    report::{ConsoleReport, write_json},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Analyze access.log files", long_about = None)]
struct Args {
    /// Path to the log file or directory
    log_path: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "stats.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Each file gets its own report and rewrites the same output path, so after a
// directory run only the last file's JSON remains.
fn run(args: &Args) -> Result<(), AnalyzeError> {
    let files = match resolve_inputs(&args.log_path)? {
        Inputs::Files(files) => files,
        Inputs::Unsupported => {
            warn!(path = %args.log_path.display(), "not a file or directory, nothing to analyze");
            return Ok(());
        }
    };
    for path in files {
        let (report, summary) = analyze_file(&path)?;
        info!(
            file = %path.display(),
            accepted = summary.accepted,
            rejected = summary.rejected,
            "analyzed log file"
        );
        write_json(&report, &args.output)?;
        print!("{}", ConsoleReport(&report));
    }
    Ok(())
}
