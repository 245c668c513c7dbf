//! Generate a maze, optionally with its solution drawn in a second image

use std::process::ExitCode;

use clap::Parser;
use maze_pgm::cli::{self, Command, CommonArgs};

/// Generate a random perfect maze as a .pgm image.
///
/// With no values, every setting is asked for interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// SCALE ROWS COLUMNS UNSOLVED_OUTPUT, optionally followed by
    /// START_ROW START_COL END_ROW END_COL SOLVED_OUTPUT
    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    values: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::run(Command::Maze, &args.common, &args.values)
}
