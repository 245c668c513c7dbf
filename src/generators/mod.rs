use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
pub mod permutation;
pub mod union_find;

pub use kruskal::randomized_kruskal;
pub use union_find::UnionFind;

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze in place: every pair of cells ends up joined by exactly one path.
///
/// Returns the disjoint-set forest left behind by generation, which holds a single set
/// covering every cell. Fails without touching the maze if it has no cells.
pub fn generate_maze<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> anyhow::Result<UnionFind> {
    if maze.is_empty() {
        tracing::warn!(
            rows = maze.rows(),
            columns = maze.columns(),
            "Refusing to generate an empty maze"
        );
        anyhow::bail!(
            "maze is empty ({} x {}), please initialize its dimensions",
            maze.rows(),
            maze.columns()
        );
    }
    Ok(randomized_kruskal(maze, rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_maze_is_rejected() {
        let mut rng = get_rng(Some(0));
        for (rows, columns) in [(0, 0), (0, 3), (3, 0)] {
            let mut maze = Maze::new(rows, columns);
            assert!(generate_maze(&mut maze, &mut rng).is_err());
        }
    }

    #[test]
    fn test_one_by_one() {
        let mut maze = Maze::new(1, 1);
        let uf = generate_maze(&mut maze, &mut get_rng(Some(0))).unwrap();
        assert!(maze.walls().is_empty());
        assert_eq!(uf.count_roots(), 1);
        assert!(maze[0].has_right_wall() && maze[0].has_bottom_wall());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut first = Maze::new(9, 13);
        let mut second = Maze::new(9, 13);
        generate_maze(&mut first, &mut get_rng(Some(5))).unwrap();
        generate_maze(&mut second, &mut get_rng(Some(5))).unwrap();
        assert_eq!(first.cells(), second.cells());
    }
}
