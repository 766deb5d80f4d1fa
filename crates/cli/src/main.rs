use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use s6_matrix::commands::{generate_command, validate_command, OutputTarget, PathArgs};
use tracing_subscriber::EnvFilter;

/// Build a CI job matrix from image metadata and s6 architecture mappings.
///
/// This CLI is a thin wrapper around `s6-matrix-core` (exposed in code as
/// `s6_matrix_core`). All substantive logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "s6-matrix",
    version,
    about = "Build a CI job matrix from image metadata and s6 architecture mappings",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Enable debug logging (stderr). `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Arguments for the default `generate` command.
    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the matrix (default when no subcommand is given).
    ///
    /// Writes `matrix.json` under the root unless `--print` is given.
    Generate(GenerateArgs),

    /// Load both inputs and report architecture keys that have no mapping.
    Validate {
        #[command(flatten)]
        paths: PathOpts,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
struct PathOpts {
    /// Directory holding the input files. Defaults to the current working directory.
    #[arg(long, default_value = ".")]
    root: String,

    /// Image metadata file (JSON or YAML). Defaults to `official_image_metadata.json`.
    #[arg(long, env = "S6_MATRIX_IMAGES")]
    images: Option<PathBuf>,

    /// Architecture mappings file (JSON or YAML). Defaults to `s6_architecture_mappings.json`.
    #[arg(long, env = "S6_MATRIX_ARCHITECTURES")]
    architectures: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    paths: PathOpts,

    /// Output file. Defaults to `matrix.json` under the root.
    #[arg(long, env = "S6_MATRIX_OUTPUT")]
    output: Option<PathBuf>,

    /// Print to stdout instead of writing the file; repeat (`-pp`) for indented JSON.
    #[arg(short, long, action = ArgAction::Count)]
    print: u8,

    /// Indent the JSON written to the output file.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Fail instead of skipping when an architecture key has no mapping.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

impl PathOpts {
    fn into_path_args(self, output: Option<PathBuf>) -> PathArgs {
        PathArgs {
            root: self.root,
            images: self.images,
            architectures: self.architectures,
            output,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to the Generate command if none is provided.
    match cli.command.unwrap_or(Command::Generate(cli.generate)) {
        Command::Generate(args) => {
            let target = OutputTarget::from_flags(args.print, args.pretty);
            let paths = args.paths.into_path_args(args.output);
            generate_command(&paths, target, args.strict)?
        }
        Command::Validate { paths, json } => validate_command(&paths.into_path_args(None), json)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for the printed matrix.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
