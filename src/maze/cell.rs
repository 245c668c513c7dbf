use std::fmt;

/// Which side of a cell a wall sits on.
///
/// Only right and bottom walls are stored. The left wall of a cell is the right wall
/// of its left neighbor, and the top wall is the bottom wall of the neighbor above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wall between the cell and the cell to its right
    Right,
    /// Wall between the cell and the cell below it
    Bottom,
}

/// A single maze cell, holding the state of its right and bottom walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    has_right_wall: bool,
    has_bottom_wall: bool,
}

impl Cell {
    /// A fully walled cell.
    pub const WALLED: Cell = Cell {
        has_right_wall: true,
        has_bottom_wall: true,
    };

    pub fn has_right_wall(&self) -> bool {
        self.has_right_wall
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.has_bottom_wall
    }

    pub fn has_wall(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Right => self.has_right_wall,
            Orientation::Bottom => self.has_bottom_wall,
        }
    }

    /// Knocks down the wall on the given side.
    /// Returns `true` if a wall was standing there.
    pub fn break_wall(&mut self, orientation: Orientation) -> bool {
        let wall = match orientation {
            Orientation::Right => &mut self.has_right_wall,
            Orientation::Bottom => &mut self.has_bottom_wall,
        };
        std::mem::replace(wall, false)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R:{} B:{}",
            self.has_right_wall as u8, self.has_bottom_wall as u8
        )
    }
}

/// A candidate passage between two adjacent cells, identified by the cell that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub cell: usize,
    pub orientation: Orientation,
}

impl Wall {
    pub fn new(cell: usize, orientation: Orientation) -> Self {
        Wall { cell, orientation }
    }

    /// Index of the cell on the other side of this wall in a maze `columns` cells wide.
    pub fn neighbor(&self, columns: usize) -> usize {
        match self.orientation {
            Orientation::Right => self.cell + 1,
            Orientation::Bottom => self.cell + columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_wall() {
        let mut cell = Cell::default();
        assert!(cell.has_right_wall() && cell.has_bottom_wall());
        assert!(cell.break_wall(Orientation::Right));
        assert!(!cell.has_right_wall());
        assert!(cell.has_bottom_wall());
        // Breaking the same wall twice reports nothing was there
        assert!(!cell.break_wall(Orientation::Right));
        assert_eq!(cell.to_string(), "R:0 B:1");
    }

    #[test]
    fn test_wall_neighbor() {
        assert_eq!(Wall::new(4, Orientation::Right).neighbor(5), 5);
        assert_eq!(Wall::new(4, Orientation::Bottom).neighbor(5), 9);
    }
}
