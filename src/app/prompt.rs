use std::{
    io::{self, BufRead, Stdout, StdinLock, Write},
    path::PathBuf,
};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::{
    config::{MazeConfig, SolveRequest, check_size, parse_scale, parse_unsigned},
    maze::CellCoord,
};

/// Line-oriented question/answer session over any input and output.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Reads the next non-blank line, trimmed. `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
        }
    }

    /// Get user input, re-prompting with the validation error until it is accepted.
    /// Returns None if the input ends before a valid answer is given.
    pub fn prompt_with_validation<F, T>(
        &mut self,
        prompt: &str,
        validate: F,
    ) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            queue!(
                self.output,
                style::PrintStyledContent(prompt.with(Color::Cyan).attribute(Attribute::Bold))
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                queue!(self.output, style::Print("\n"))?;
                self.output.flush()?;
                return Ok(None);
            };

            match validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => {
                    queue!(
                        self.output,
                        style::PrintStyledContent(format!("ERROR: {msg}").with(Color::Red)),
                        style::Print("\n")
                    )?;
                }
            }
        }
    }

    /// Asks for a dimension, rejecting values for which `fits` fails.
    fn ask_dimension<F>(&mut self, prompt: &str, field: &str, fits: F) -> io::Result<Option<usize>>
    where
        F: Fn(usize) -> anyhow::Result<()>,
    {
        self.prompt_with_validation(prompt, |s| {
            let n = parse_unsigned(field, s).map_err(|e| e.to_string())?;
            fits(n).map_err(|e| e.to_string())?;
            Ok(n)
        })
    }

    fn ask_index(&mut self, prompt: &str, field: &str, bound: usize) -> io::Result<Option<usize>> {
        self.prompt_with_validation(prompt, |s| match parse_unsigned(field, s) {
            Ok(n) if n < bound => Ok(n),
            _ => Err(format!(
                "{field} must be an unsigned integer within bounds of maze (below {bound})"
            )),
        })
    }

    fn ask_path(&mut self, prompt: &str) -> io::Result<Option<PathBuf>> {
        self.prompt_with_validation(prompt, |s| Ok(PathBuf::from(s)))
    }

    /// Scale, dimensions and output file, common to both flows.
    fn ask_base(&mut self, output_prompt: &str) -> io::Result<Option<MazeConfig>> {
        let Some(scale) = self.prompt_with_validation(
            "Enter the scale (number of pixels per side of a maze cell): ",
            |s| parse_scale(s).map_err(|e| e.to_string()),
        )?
        else {
            return Ok(None);
        };
        let Some(rows) = self.ask_dimension("Enter the row size: ", "row size", |rows| {
            check_size(scale, rows, 0)
        })?
        else {
            return Ok(None);
        };
        let Some(columns) =
            self.ask_dimension("Enter the column size: ", "column size", |columns| {
                check_size(scale, rows, columns)
            })?
        else {
            return Ok(None);
        };
        let Some(unsolved_output) = self.ask_path(output_prompt)? else {
            return Ok(None);
        };
        Ok(Some(MazeConfig {
            scale,
            rows,
            columns,
            unsolved_output,
            solve: None,
        }))
    }

    /// Asks for everything a grid run needs.
    pub fn collect_grid_config(&mut self) -> io::Result<Option<MazeConfig>> {
        self.ask_base("Enter grid output file: ")
    }

    /// Asks for everything a maze run needs, including the path end points and the
    /// solved output file. End points are only asked for when the maze has cells.
    pub fn collect_maze_config(&mut self) -> io::Result<Option<MazeConfig>> {
        let Some(mut config) = self.ask_base("Enter unsolved maze output file: ")? else {
            return Ok(None);
        };
        if config.rows == 0 || config.columns == 0 {
            return Ok(Some(config));
        }

        let (rows, columns) = (config.rows, config.columns);
        let Some(start_row) = self.ask_index("Enter the start row index: ", "start row", rows)?
        else {
            return Ok(None);
        };
        let Some(start_col) =
            self.ask_index("Enter the start column index: ", "start column", columns)?
        else {
            return Ok(None);
        };
        let Some(end_row) = self.ask_index("Enter the end row index: ", "end row", rows)? else {
            return Ok(None);
        };
        let Some(end_col) = self.ask_index("Enter the end column index: ", "end column", columns)?
        else {
            return Ok(None);
        };
        let Some(output) = self.ask_path("Enter the solved maze output file: ")? else {
            return Ok(None);
        };

        config.solve = Some(SolveRequest {
            start: CellCoord::new(start_row, start_col),
            end: CellCoord::new(end_row, end_col),
            output,
        });
        Ok(Some(config))
    }
}
