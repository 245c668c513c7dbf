use std::time::Instant;

use maze_pgm::{
    generators::{generate_maze, get_rng},
    maze::Maze,
    solvers::solve_maze,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let mut rng = get_rng(Some(0));
    for iteration in 0..num_iters {
        let started = Instant::now();
        let mut maze = Maze::new(1000, 1000);
        generate_maze(&mut maze, &mut rng)?;
        let generated = started.elapsed();
        let path = solve_maze(&maze, 0, maze.len() - 1);
        tracing::info!(
            iteration,
            ?generated,
            solved = ?(started.elapsed() - generated),
            path_len = path.len(),
            "Profiled run"
        );
    }
    Ok(())
}
