//! Command-line wiring shared by the `create-maze` and `create-grid` binaries.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use crossterm::{
    queue,
    style::{self, Color, Stylize},
};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    app::{self, prompt::Prompter},
    config::MazeConfig,
    generators::get_rng,
};

/// Options accepted by every binary, on top of the positional values.
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Random seed, for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Which front-end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Maze,
    Grid,
}

impl Command {
    fn usage(self) -> &'static str {
        match self {
            Command::Maze => {
                "usage: create-maze [SCALE ROWS COLUMNS UNSOLVED_OUTPUT \
[START_ROW START_COL END_ROW END_COL SOLVED_OUTPUT]]"
            }
            Command::Grid => "usage: create-grid [SCALE ROWS COLUMNS OUTPUT]",
        }
    }
}

/// Installs the global subscriber. Logs go to stderr, or through a non-blocking
/// writer to `--log-file`; the returned guard must be held until exit so buffered
/// lines are flushed.
pub fn init_logging(args: &CommonArgs) -> anyhow::Result<Option<WorkerGuard>> {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match &args.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file {} has no file name", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Prints an error, with its whole context chain, to stderr.
pub fn report_error(err: &anyhow::Error) {
    let mut stderr = io::stderr();
    // ignore failures, there is nowhere left to report them
    let _ = queue!(
        stderr,
        style::PrintStyledContent(format!("ERROR: {err:#}").with(Color::Red)),
        style::Print("\n")
    );
    let _ = stderr.flush();
}

fn execute(command: Command, common: &CommonArgs, values: &[String]) -> anyhow::Result<()> {
    let config = if values.is_empty() {
        let mut prompter = Prompter::stdio();
        let collected = match command {
            Command::Maze => prompter.collect_maze_config()?,
            Command::Grid => prompter.collect_grid_config()?,
        };
        match collected {
            Some(config) => config,
            None => {
                tracing::info!("Input ended before the configuration was complete");
                return Ok(());
            }
        }
    } else {
        match command {
            Command::Maze => MazeConfig::from_maze_args(values),
            Command::Grid => MazeConfig::from_grid_args(values),
        }
        .map_err(|e| anyhow::anyhow!("{e:#}\n{}", command.usage()))?
    };

    tracing::debug!(?config, "Running");
    match command {
        Command::Maze => app::run_maze(&config, &mut get_rng(common.seed)),
        Command::Grid => app::run_grid(&config),
    }
}

/// Runs a front-end to completion, reporting any failure exactly once.
pub fn run(command: Command, common: &CommonArgs, values: &[String]) -> ExitCode {
    let _guard = match init_logging(common) {
        Ok(guard) => guard,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match execute(command, common, values) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
