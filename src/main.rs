use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use matlang::{interpreter::evaluator::output::Stdout, run};
use tracing_subscriber::EnvFilter;

mod repl;

/// matlang is a small language for matrix arithmetic: declare matrices,
/// multiply, add, transpose and invert them, and print the results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Without a script (and without --eval) an interactive
    /// session is started.
    file: Option<PathBuf>,

    /// Runs the given source text instead of a script file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Logs every matrix operation to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = match (args.file, args.eval) {
        (Some(path), _) => match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, Some(source)) => source,
        (None, None) => return repl::run(),
    };

    match run(&source, &mut Stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG`
/// decides, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("matlang=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}
