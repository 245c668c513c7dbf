mod bfs;

pub use bfs::solve_bfs;

use crate::maze::Maze;

/// Finds a shortest path between two cells, given as linear indices.
///
/// An empty result means an end point is out of bounds or the end cannot be reached.
/// The latter never happens on a generated maze and is logged as an error.
pub fn solve_maze(maze: &Maze, start: usize, end: usize) -> Vec<usize> {
    if start >= maze.len() || end >= maze.len() {
        tracing::warn!(start, end, cells = maze.len(), "Solve request out of bounds");
        return Vec::new();
    }

    let path = solve_bfs(maze, start, end);
    if path.is_empty() {
        tracing::error!(start, end, "End cell unreachable, maze is not fully connected");
    } else {
        tracing::debug!(start, end, length = path.len(), "Solved maze");
    }
    path
}
