use rand::Rng;

use crate::{
    generators::{permutation::random_permutation, union_find::UnionFind},
    maze::Maze,
};

/// Carves a spanning tree into `maze` with randomized Kruskal.
///
/// Walls are visited once each in a random order. A wall is knocked down only when the
/// cells on either side are still in different sets, so the result is connected and
/// acyclic whatever order the walls come in. The forest is returned with every cell
/// in a single set.
///
/// The maze must not be empty.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> UnionFind {
    maze.fill_walls();

    // Initialize Union-Find for all cells
    let mut uf = UnionFind::new(maze.len());

    // Process walls in a random order rather than shuffling the list itself
    let order = random_permutation(maze.walls().len(), rng);

    let columns = maze.columns();
    let mut carved = 0usize;
    for wall_index in order {
        let wall = maze.walls()[wall_index];
        let current = uf.find_root_and_compress(wall.cell);
        let neighbor = uf.find_root_and_compress(wall.neighbor(columns));

        // If cells are not yet connected, remove the wall between them
        if current != neighbor {
            maze.break_wall(wall);
            uf.union_roots(current, neighbor);
            carved += 1;
        }
    }

    tracing::debug!(
        rows = maze.rows(),
        columns = maze.columns(),
        walls = maze.walls().len(),
        carved,
        "Carved maze with randomized Kruskal"
    );
    uf
}
