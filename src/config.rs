//! Run configuration shared by the batch and interactive front-ends.

use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::{maze::CellCoord, render::image_size};

/// A request to draw the path between two cells into a second image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub start: CellCoord,
    pub end: CellCoord,
    pub output: PathBuf,
}

/// Everything needed to produce the images for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Pixels per side of a cell
    pub scale: usize,
    pub rows: usize,
    pub columns: usize,
    /// Where the unsolved maze (or the bare grid) is written
    pub unsolved_output: PathBuf,
    pub solve: Option<SolveRequest>,
}

/// Parses a non-negative decimal integer made of ASCII digits only.
///
/// Signs, whitespace and anything that does not fit in `usize` are rejected.
pub fn parse_unsigned(field: &str, value: &str) -> anyhow::Result<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        bail!("{field} must be an unsigned integer, got {value:?}");
    }
    value
        .parse::<usize>()
        .with_context(|| format!("{field} is too large: {value}"))
}

/// Parses the pixel scale, which must be at least 1.
pub fn parse_scale(value: &str) -> anyhow::Result<usize> {
    match parse_unsigned("pixel scale", value)? {
        0 => bail!("pixel scale must be at least 1"),
        scale => Ok(scale),
    }
}

/// Rejects dimensions whose image cannot be sized without overflowing.
pub fn check_size(scale: usize, rows: usize, columns: usize) -> anyhow::Result<()> {
    if image_size(rows, columns, scale).is_none() {
        bail!("a {rows}x{columns} maze at pixel scale {scale} is too large to draw");
    }
    Ok(())
}

impl MazeConfig {
    /// Builds a maze configuration from positional arguments, either
    /// `scale rows columns unsolved_output` or
    /// `scale rows columns unsolved_output start_row start_col end_row end_col solved_output`.
    pub fn from_maze_args(args: &[String]) -> anyhow::Result<Self> {
        match args {
            [scale, rows, columns, output] => Self::base(scale, rows, columns, output),
            [
                scale,
                rows,
                columns,
                output,
                start_row,
                start_col,
                end_row,
                end_col,
                solved_output,
            ] => {
                let mut config = Self::base(scale, rows, columns, output)?;
                config.solve = Some(SolveRequest {
                    start: CellCoord::new(
                        parse_unsigned("start row", start_row)?,
                        parse_unsigned("start column", start_col)?,
                    ),
                    end: CellCoord::new(
                        parse_unsigned("end row", end_row)?,
                        parse_unsigned("end column", end_col)?,
                    ),
                    output: PathBuf::from(solved_output),
                });
                Ok(config)
            }
            _ => bail!("invalid arguments: expected 0, 4 or 9, got {}", args.len()),
        }
    }

    /// Builds a grid configuration from `scale rows columns output`.
    pub fn from_grid_args(args: &[String]) -> anyhow::Result<Self> {
        match args {
            [scale, rows, columns, output] => Self::base(scale, rows, columns, output),
            _ => bail!("invalid arguments: expected 0 or 4, got {}", args.len()),
        }
    }

    fn base(scale: &str, rows: &str, columns: &str, output: &str) -> anyhow::Result<Self> {
        let scale = parse_scale(scale)?;
        let rows = parse_unsigned("row size", rows)?;
        let columns = parse_unsigned("column size", columns)?;
        check_size(scale, rows, columns)?;
        Ok(MazeConfig {
            scale,
            rows,
            columns,
            unsolved_output: PathBuf::from(output),
            solve: None,
        })
    }
}
