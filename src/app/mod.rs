pub mod prompt;

use std::path::Path;

use anyhow::Context;
use rand::Rng;

use crate::{
    config::{MazeConfig, check_size},
    generators::generate_maze,
    image::{Image, write_pgm},
    maze::Maze,
    render::{grid_image, maze_image, solved_image},
};

fn write_image(path: &Path, image: &Image) -> anyhow::Result<()> {
    write_pgm(path, image).with_context(|| format!("can't write to file {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        height = image.rows(),
        width = image.columns(),
        "Image written"
    );
    Ok(())
}

/// Generates a maze, writes the unsolved image and, if requested, the solved one.
///
/// The unsolved image is written before the path end points are checked, so a bad
/// solve request still leaves a usable maze behind.
pub fn run_maze<R: Rng + ?Sized>(config: &MazeConfig, rng: &mut R) -> anyhow::Result<()> {
    check_size(config.scale, config.rows, config.columns)?;
    let mut maze = Maze::new(config.rows, config.columns);
    generate_maze(&mut maze, rng)?;
    write_image(&config.unsolved_output, &maze_image(&maze, config.scale))?;

    if let Some(solve) = &config.solve {
        let solved = solved_image(&maze, solve.start, solve.end, config.scale)
            .context("solved maze not generated")?;
        write_image(&solve.output, &solved)?;
    }
    Ok(())
}

/// Writes the image of an uncarved grid, showing how cells are laid out.
pub fn run_grid(config: &MazeConfig) -> anyhow::Result<()> {
    check_size(config.scale, config.rows, config.columns)?;
    write_image(
        &config.unsolved_output,
        &grid_image(config.rows, config.columns, config.scale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SolveRequest,
        generators::get_rng,
        image::read_pgm,
        maze::CellCoord,
        render::{END_SHADE, START_SHADE},
        test_utils::TempDir,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new("app")
    }

    fn config(
        tmp: &TempDir,
        rows: usize,
        columns: usize,
        solve: Option<SolveRequest>,
    ) -> MazeConfig {
        MazeConfig {
            scale: 2,
            rows,
            columns,
            unsolved_output: tmp.path().join("maze.pgm"),
            solve,
        }
    }

    fn solve(tmp: &TempDir, start: CellCoord, end: CellCoord) -> Option<SolveRequest> {
        Some(SolveRequest {
            start,
            end,
            output: tmp.path().join("solved.pgm"),
        })
    }

    #[rstest]
    fn test_maze_with_solution(tmp: TempDir) {
        let config = config(
            &tmp,
            4,
            6,
            solve(&tmp, CellCoord::new(0, 0), CellCoord::new(3, 5)),
        );
        run_maze(&config, &mut get_rng(Some(3))).unwrap();

        let unsolved = read_pgm(&config.unsolved_output).unwrap();
        assert_eq!((unsolved.rows(), unsolved.columns()), (18, 26));
        let solved = read_pgm(tmp.path().join("solved.pgm")).unwrap();
        assert_eq!(solved.get_pixel(2, 2), START_SHADE);
        assert_eq!(solved.get_pixel(14, 22), END_SHADE);
    }

    #[rstest]
    fn test_out_of_bounds_keeps_unsolved(tmp: TempDir) {
        let config = config(
            &tmp,
            3,
            3,
            solve(&tmp, CellCoord::new(0, 0), CellCoord::new(3, 0)),
        );
        let err = run_maze(&config, &mut get_rng(Some(0))).unwrap_err();
        assert!(format!("{err:#}").contains("out of bounds"));
        assert!(config.unsolved_output.exists());
        assert!(!tmp.path().join("solved.pgm").exists());
    }

    #[rstest]
    fn test_empty_maze_writes_nothing(tmp: TempDir) {
        let config = config(&tmp, 0, 5, None);
        assert!(run_maze(&config, &mut get_rng(Some(0))).is_err());
        assert!(!config.unsolved_output.exists());
    }

    #[rstest]
    fn test_unwritable_output_names_path(tmp: TempDir) {
        let mut config = config(&tmp, 2, 2, None);
        config.unsolved_output = tmp.path().join("missing").join("maze.pgm");
        let err = run_maze(&config, &mut get_rng(Some(0))).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[rstest]
    fn test_oversized_config_is_an_error(tmp: TempDir) {
        let mut config = config(&tmp, 1, 1, None);
        config.scale = usize::MAX;
        assert!(run_grid(&config).is_err());
        assert!(run_maze(&config, &mut get_rng(Some(0))).is_err());
        assert!(!config.unsolved_output.exists());
    }

    #[rstest]
    fn test_grid(tmp: TempDir) {
        let config = config(&tmp, 2, 3, None);
        run_grid(&config).unwrap();
        let image = read_pgm(&config.unsolved_output).unwrap();
        assert_eq!(image, grid_image(2, 3, 2));
    }
}
