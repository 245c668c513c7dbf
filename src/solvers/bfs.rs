use std::collections::VecDeque;

use crate::maze::Maze;

/// Open neighbors of `current`, in the fixed order left, up, right, down.
///
/// Left and up are open when the neighbor's right or bottom wall is down; right and down
/// are open when the current cell's own right or bottom wall is down.
fn open_neighbors(maze: &Maze, current: usize) -> impl Iterator<Item = usize> {
    let columns = maze.columns();
    let (row, col) = (current / columns, current % columns);
    let cell = maze[current];
    [
        // Left
        (col > 0 && !maze[current - 1].has_right_wall()).then(|| current - 1),
        // Up
        (row > 0 && !maze[current - columns].has_bottom_wall()).then(|| current - columns),
        // Right
        (col + 1 < columns && !cell.has_right_wall()).then(|| current + 1),
        // Down
        (row + 1 < maze.rows() && !cell.has_bottom_wall()).then(|| current + columns),
    ]
    .into_iter()
    .flatten()
}

/// Breadth-first search from `start` to `end`.
///
/// Returns the cell indices of a shortest path, both ends included, or an empty vector
/// if either end is outside the maze or `end` cannot be reached.
pub fn solve_bfs(maze: &Maze, start: usize, end: usize) -> Vec<usize> {
    if start >= maze.len() || end >= maze.len() {
        return Vec::new();
    }

    // predecessor[i] is the cell from which i was first reached
    let mut predecessor: Vec<Option<usize>> = vec![None; maze.len()];
    let mut visited = vec![false; maze.len()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        if current == end {
            // Backtrack to the start, then flip into start-to-end order
            let mut path = vec![current];
            let mut cell = current;
            while let Some(previous) = predecessor[cell] {
                path.push(previous);
                cell = previous;
            }
            path.reverse();
            return path;
        }

        for neighbor in open_neighbors(maze, current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                predecessor[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}
