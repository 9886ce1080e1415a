use std::{io, path::PathBuf};

use clap::Parser;
use numscript::{run_file, run_source};
use tracing_subscriber::{EnvFilter, fmt};

/// numscript runs small integer programs made of assignments, single-parameter
/// functions, `read` and `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs this program text instead of reading a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// The program file to run.
    #[arg(default_value = "program.txt")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls the log level; logs go to stderr so they never mix
    // with program output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let stdout = io::stdout();
    let stdin = io::stdin();

    let result = match &args.eval {
        Some(source) => run_source(source, stdout.lock(), stdin.lock()),
        None => run_file(&args.path, stdout.lock(), stdin.lock()),
    };

    // Errors are part of the program's visible output.
    if let Err(e) = result {
        println!("{e}");
    }
}
