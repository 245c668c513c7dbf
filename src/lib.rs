pub mod app;
pub mod cli;
pub mod config;
pub mod generators;
pub mod image;
pub mod maze;
pub mod render;
pub mod solvers;

#[cfg(test)]
mod test_utils;
