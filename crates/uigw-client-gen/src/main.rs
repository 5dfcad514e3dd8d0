//! # uigw-client-gen entry point
//!
//! Parses flags, resolves the project root, and runs one generation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uigw_client_gen::{run, CliArgs, DockerGenerator, FileArgsStore, GeneratorPaths};

/// Generate the Python client from an OpenAPI document.
///
/// Without `--file`, the arguments of the previous run are reused.
#[derive(Parser, Debug)]
#[command(name = "uigw-client-gen", version, about, long_about = None)]
struct Cli {
    /// OpenAPI document: a local file path or an http(s) URL.
    #[arg(long)]
    file: Option<String>,

    /// Generate the asyncio flavor of the client.
    #[arg(long)]
    asyncio: bool,

    /// Project root. Defaults to the nearest ancestor containing
    /// `tools/client_generator`.
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = uigw_client_gen::paths::resolve_project_root(cli.project_root, &cwd);
    tracing::debug!(root = %root.display(), "resolved project root");

    let paths = GeneratorPaths::from_root(&root);
    let store = FileArgsStore::new(paths.args_file.clone());
    let temp_root = paths.temp_root.clone();
    let generator = DockerGenerator::from_env(paths);
    let args = CliArgs {
        file: cli.file,
        asyncio: cli.asyncio,
    };

    match run(&args, &store, &generator, &temp_root) {
        Ok(()) => {
            println!("Successfully finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
