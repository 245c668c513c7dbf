//! Rasterization of mazes into gray-level images.
//!
//! A maze of `rows` x `columns` cells becomes an image of `2 * rows + 1` by
//! `2 * columns + 1` square units, each `scale` pixels wide. Cells sit on the odd
//! unit positions; the units between them are walls, and the outermost ring is a
//! border. Every shape is painted one `scale` x `scale` block at a time.

use anyhow::bail;

use crate::{
    image::Image,
    maze::{CellCoord, Maze, Orientation},
    solvers::solve_maze,
};

/// Gray level ceiling of every rendered image.
pub const GRAY_LEVELS: u8 = 255;
/// Background and standing walls.
pub const WALL_SHADE: u8 = 130;
/// Cell interiors, carved passages, entrance and exit.
pub const OPEN_SHADE: u8 = 255;
/// Solution path overlay.
pub const PATH_SHADE: u8 = 200;
pub const START_SHADE: u8 = 90;
pub const END_SHADE: u8 = 0;

/// Direction of travel between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Left,
    Up,
    Right,
    Down,
}

impl Step {
    /// Infers the step from `from` to `to` out of the index difference.
    /// Vertical moves are tested first: in a single-column maze `+1` means down.
    fn between(from: usize, to: usize, columns: usize) -> Option<Step> {
        if to == from + columns {
            Some(Step::Down)
        } else if to + columns == from {
            Some(Step::Up)
        } else if to == from + 1 {
            Some(Step::Right)
        } else if to + 1 == from {
            Some(Step::Left)
        } else {
            None
        }
    }
}

/// Sets the `scale` x `scale` block whose top-left pixel is `(row, col)` to `value`.
///
/// # Panics
/// If the block does not fit inside the image
pub fn set_scaled_block(image: &mut Image, row: usize, col: usize, scale: usize, value: u8) {
    for y in row..row + scale {
        for x in col..col + scale {
            image.set_pixel(y, x, value);
        }
    }
}

/// Unit position of a cell's interior.
fn cell_unit(coord: CellCoord) -> (usize, usize) {
    (2 * coord.row + 1, 2 * coord.col + 1)
}

fn paint_unit(image: &mut Image, unit: (usize, usize), scale: usize, value: u8) {
    set_scaled_block(image, unit.0 * scale, unit.1 * scale, scale, value);
}

/// Pixel height and width of the image of a `rows` x `columns` maze, or `None` if the
/// image (or its pixel count) does not fit in `usize`.
pub fn image_size(rows: usize, columns: usize, scale: usize) -> Option<(usize, usize)> {
    let units = |cells: usize| cells.checked_mul(2)?.checked_add(1)?.checked_mul(scale);
    let (height, width) = (units(rows)?, units(columns)?);
    height.checked_mul(width)?;
    Some((height, width))
}

/// Image of `rows` x `columns` isolated cells: every wall standing, no entrance or exit.
///
/// # Panics
/// If [`image_size`] overflows for these dimensions
pub fn grid_image(rows: usize, columns: usize, scale: usize) -> Image {
    let mut image = Image::new(
        scale * (2 * rows + 1),
        scale * (2 * columns + 1),
        GRAY_LEVELS,
    );
    image.fill(WALL_SHADE);
    for row in 0..rows {
        for col in 0..columns {
            paint_unit(
                &mut image,
                cell_unit(CellCoord::new(row, col)),
                scale,
                OPEN_SHADE,
            );
        }
    }
    image
}

/// Image of the maze in its current state.
///
/// The entrance is opened in the top border above the first cell, and the exit in the
/// bottom border below the last cell.
pub fn maze_image(maze: &Maze, scale: usize) -> Image {
    let mut image = grid_image(maze.rows(), maze.columns(), scale);
    if maze.is_empty() {
        return image;
    }

    set_scaled_block(&mut image, 0, scale, scale, OPEN_SHADE);
    let (height, width) = (image.rows(), image.columns());
    set_scaled_block(
        &mut image,
        height - scale,
        width - 2 * scale,
        scale,
        OPEN_SHADE,
    );

    for &wall in maze.walls() {
        if maze.is_wall_standing(wall) {
            continue;
        }
        let (row, col) = cell_unit(maze.coord_of(wall.cell));
        let gap = match wall.orientation {
            Orientation::Right => (row, col + 1),
            Orientation::Bottom => (row + 1, col),
        };
        paint_unit(&mut image, gap, scale, OPEN_SHADE);
    }
    image
}

/// Image of the maze with the shortest path from `start` to `end` drawn over it.
///
/// Path cells and the wall gaps between them are shaded, then the start and end cells
/// get their own markers. Fails if either end point is outside the maze or no path
/// exists.
pub fn solved_image(
    maze: &Maze,
    start: CellCoord,
    end: CellCoord,
    scale: usize,
) -> anyhow::Result<Image> {
    let (Some(start_index), Some(end_index)) = (maze.index_of(start), maze.index_of(end)) else {
        tracing::warn!(
            %start,
            %end,
            rows = maze.rows(),
            columns = maze.columns(),
            "Path end points out of bounds"
        );
        bail!("starting or ending index out of bounds");
    };

    let path = solve_maze(maze, start_index, end_index);
    if path.is_empty() {
        bail!("no path from {start} to {end}");
    }

    let mut image = maze_image(maze, scale);
    let columns = maze.columns();
    for (i, &index) in path.iter().enumerate() {
        let (row, col) = cell_unit(maze.coord_of(index));
        paint_unit(&mut image, (row, col), scale, PATH_SHADE);

        // Also shade the gap toward the next cell so the path looks continuous
        let Some(&next) = path.get(i + 1) else {
            continue;
        };
        let gap = match Step::between(index, next, columns) {
            Some(Step::Left) => (row, col - 1),
            Some(Step::Up) => (row - 1, col),
            Some(Step::Right) => (row, col + 1),
            Some(Step::Down) => (row + 1, col),
            None => bail!("path cells {index} and {next} are not adjacent"),
        };
        paint_unit(&mut image, gap, scale, PATH_SHADE);
    }

    paint_unit(&mut image, cell_unit(start), scale, START_SHADE);
    paint_unit(&mut image, cell_unit(end), scale, END_SHADE);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate_maze, get_rng};
    use rstest::rstest;

    fn generated(rows: usize, columns: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(rows, columns);
        generate_maze(&mut maze, &mut get_rng(Some(seed))).unwrap();
        maze
    }

    #[test]
    fn test_one_by_one_pixels() {
        let image = maze_image(&generated(1, 1, 0), 1);
        assert_eq!((image.rows(), image.columns()), (3, 3));
        assert_eq!(image.gray_levels(), 255);
        #[rustfmt::skip]
        let expected = [
            130, 255, 130,
            130, 255, 130,
            130, 255, 130,
        ];
        assert_eq!(image.pixels(), &expected);
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(3, 5, 2)]
    #[case(4, 1, 3)]
    fn test_dimensions(#[case] rows: usize, #[case] columns: usize, #[case] scale: usize) {
        let image = maze_image(&generated(rows, columns, 1), scale);
        assert_eq!(image.rows(), scale * (2 * rows + 1));
        assert_eq!(image.columns(), scale * (2 * columns + 1));
    }

    #[test]
    fn test_grid_image_has_no_openings() {
        let image = grid_image(2, 3, 2);
        assert_eq!((image.rows(), image.columns()), (10, 14));
        // Border stays intact
        assert!((0..14).all(|x| image.get_pixel(0, x) == WALL_SHADE));
        assert!((0..14).all(|x| image.get_pixel(9, x) == WALL_SHADE));
        // Cell (1, 2) interior starts at unit (3, 5)
        assert_eq!(image.get_pixel(6, 10), OPEN_SHADE);
        assert_eq!(image.get_pixel(7, 11), OPEN_SHADE);
        // Wall unit between cells (0, 0) and (0, 1)
        assert_eq!(image.get_pixel(2, 4), WALL_SHADE);
        let open = image.pixels().iter().filter(|&&p| p == OPEN_SHADE).count();
        assert_eq!(open, 6 * 4);
    }

    #[test]
    fn test_carved_walls_are_open() {
        let scale = 2;
        let maze = generated(5, 6, 4);
        let image = maze_image(&maze, scale);
        for &wall in maze.walls() {
            let coord = maze.coord_of(wall.cell);
            let (row, col) = (2 * coord.row + 1, 2 * coord.col + 1);
            let (row, col) = match wall.orientation {
                Orientation::Right => (row, col + 1),
                Orientation::Bottom => (row + 1, col),
            };
            let expected = if maze.is_wall_standing(wall) {
                WALL_SHADE
            } else {
                OPEN_SHADE
            };
            assert_eq!(image.get_pixel(row * scale, col * scale), expected);
        }
        // Open units: every cell, every carved wall, entrance and exit
        let open = image.pixels().iter().filter(|&&p| p == OPEN_SHADE).count();
        assert_eq!(open, (30 + 29 + 2) * scale * scale);
    }

    #[rstest]
    #[case(2, 3, 2, Some((10, 14)))]
    #[case(0, 0, 1, Some((1, 1)))]
    #[case(usize::MAX, 1, 1, None)]
    #[case(1, 1, usize::MAX, None)]
    #[case(1 << 31, 1 << 31, 1, None)]
    fn test_image_size(
        #[case] rows: usize,
        #[case] columns: usize,
        #[case] scale: usize,
        #[case] expected: Option<(usize, usize)>,
    ) {
        assert_eq!(image_size(rows, columns, scale), expected);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let maze = generated(7, 9, 8);
        assert_eq!(maze_image(&maze, 3), maze_image(&maze, 3));
    }

    #[test]
    fn test_solved_overlay() {
        let scale = 2;
        let maze = generated(6, 6, 9);
        let (start, end) = (CellCoord::new(0, 0), CellCoord::new(5, 5));
        let image = solved_image(&maze, start, end, scale).unwrap();
        let path = solve_maze(&maze, 0, 35);

        assert_eq!(image.get_pixel(scale, scale), START_SHADE);
        assert_eq!(image.get_pixel(11 * scale, 11 * scale), END_SHADE);
        for &index in &path[1..path.len() - 1] {
            let coord = maze.coord_of(index);
            let (row, col) = (2 * coord.row + 1, 2 * coord.col + 1);
            assert_eq!(image.get_pixel(row * scale, col * scale), PATH_SHADE);
        }
        // n cells and n - 1 gaps, two of the cells carry the end markers instead
        let shaded = image.pixels().iter().filter(|&&p| p == PATH_SHADE).count();
        assert_eq!(shaded, (2 * path.len() - 3) * scale * scale);
    }

    #[test]
    fn test_solved_single_column_paints_vertical_gaps() {
        let maze = generated(3, 1, 0);
        let image = solved_image(&maze, CellCoord::new(0, 0), CellCoord::new(2, 0), 1).unwrap();
        #[rustfmt::skip]
        let expected = [
            130, 255, 130,
            130,  90, 130,
            130, 200, 130,
            130, 200, 130,
            130, 200, 130,
            130,   0, 130,
            130, 255, 130,
        ];
        assert_eq!(image.pixels(), &expected);
    }

    #[test]
    fn test_solved_out_of_bounds() {
        let maze = generated(3, 3, 0);
        assert!(solved_image(&maze, CellCoord::new(0, 0), CellCoord::new(3, 0), 1).is_err());
        assert!(solved_image(&maze, CellCoord::new(0, 3), CellCoord::new(0, 0), 1).is_err());
    }

    #[test]
    fn test_solved_unreachable() {
        let maze = Maze::new(2, 2);
        assert!(solved_image(&maze, CellCoord::new(0, 0), CellCoord::new(1, 1), 1).is_err());
    }

    #[test]
    fn test_step_between() {
        assert_eq!(Step::between(5, 6, 4), Some(Step::Right));
        assert_eq!(Step::between(5, 4, 4), Some(Step::Left));
        assert_eq!(Step::between(5, 9, 4), Some(Step::Down));
        assert_eq!(Step::between(5, 1, 4), Some(Step::Up));
        assert_eq!(Step::between(1, 2, 1), Some(Step::Down));
        assert_eq!(Step::between(5, 7, 4), None);
    }
}
