pub mod cell;

pub use cell::{Cell, Orientation, Wall};

/// Row/column position of a cell in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        CellCoord { row, col }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular maze of cells stored row-major, together with every internal wall
/// that could be knocked down to connect two adjacent cells.
pub struct Maze {
    cells: Box<[Cell]>,
    walls: Box<[Wall]>,
    rows: usize,
    columns: usize,
}

impl Maze {
    /// Creates a new maze with the given number of rows and columns.
    /// Every cell starts fully walled, and the internal walls are enumerated in cell order:
    /// the right wall of a cell (unless it is in the last column) followed by its bottom wall
    /// (unless it is in the last row).
    pub fn new(rows: usize, columns: usize) -> Self {
        let cells = vec![Cell::WALLED; rows * columns].into_boxed_slice();
        let walls = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (row, col)))
            .flat_map(|(row, col)| {
                let index = row * columns + col;
                [
                    (col + 1 < columns).then(|| Wall::new(index, Orientation::Right)),
                    (row + 1 < rows).then(|| Wall::new(index, Orientation::Bottom)),
                ]
            })
            .flatten()
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Maze {
            cells,
            walls,
            rows,
            columns,
        }
    }

    /// Returns the number of rows of cells.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of cells.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks if the maze has no cells (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All internal walls, in enumeration order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.col < self.columns
    }

    /// Linear index of a coordinate, or `None` if it lies outside the maze.
    pub fn index_of(&self, coord: CellCoord) -> Option<usize> {
        self.is_in_bounds(coord)
            .then_some(coord.row * self.columns + coord.col)
    }

    /// Coordinate of a linear cell index.
    pub fn coord_of(&self, index: usize) -> CellCoord {
        CellCoord::new(index / self.columns, index % self.columns)
    }

    /// Puts every wall back up.
    pub fn fill_walls(&mut self) {
        self.cells.fill(Cell::WALLED);
    }

    /// Knocks down the given wall.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if it was already down
    ///
    /// # Panics
    /// If the wall's cell is out of bounds
    pub fn break_wall(&mut self, wall: Wall) -> bool {
        self.cells[wall.cell].break_wall(wall.orientation)
    }

    /// Checks whether the given wall is still standing.
    pub fn is_wall_standing(&self, wall: Wall) -> bool {
        self.cells[wall.cell].has_wall(wall.orientation)
    }

    /// Number of internal walls that have been knocked down.
    pub fn broken_wall_count(&self) -> usize {
        self.walls
            .iter()
            .filter(|&&wall| !self.is_wall_standing(wall))
            .count()
    }
}

impl std::ops::Index<usize> for Maze {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}
