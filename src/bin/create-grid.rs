//! Draw the layout of an uncarved maze grid

use std::process::ExitCode;

use clap::Parser;
use maze_pgm::cli::{self, Command, CommonArgs};

/// Draw a grid of isolated maze cells as a .pgm image.
///
/// With no values, every setting is asked for interactively.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// SCALE ROWS COLUMNS OUTPUT
    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    values: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::run(Command::Grid, &args.common, &args.values)
}
