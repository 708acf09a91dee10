use std::path::PathBuf;

use board_tools::flatten::LabelMode;
use board_tools::sync;
use board_tools::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert(args) => execute_convert(args),
    }
}

fn execute_convert(args: ConvertArgs) -> Result<()> {
    let input = sync::dataset_path(&args.dir, &args.board);
    if !input.exists() {
        return Err(ToolError::MissingInput(input));
    }

    let mode = if args.strict_labels {
        LabelMode::Strict
    } else {
        LabelMode::Legacy
    };
    sync::convert_board(&input, &args.dir, &args.board, mode)
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert an exported project board into hierarchy and table reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one board dataset into its three report artifacts.
    Convert(ConvertArgs),
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Board name selecting which dataset to load.
    #[arg(long, env = "TRELLO_BOARD_NAME")]
    board: String,

    /// Working directory holding the dataset and the generated reports.
    #[arg(long, default_value = "tmp")]
    dir: PathBuf,

    /// Suppress repeated labels by originating tree node instead of by name
    /// equality with the previous row.
    #[arg(long)]
    strict_labels: bool,
}
