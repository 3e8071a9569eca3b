//! Procedural maze generation with exactly one solution.
//!
//! A maze is a square wall/route grid. Generation carves a single
//! randomized boundary-to-boundary solution path, then decorates the grid
//! with dead-end "fake" branches until a configured fraction of cells is
//! route. Branches join existing paths by adjacency and never reach the
//! boundary, so no second way through can ever form.
//!
//! ```no_run
//! use mazegen::maze::{Generator, MazeConfig};
//!
//! let mut gen = Generator::new(MazeConfig::new(25))?;
//! let maze = gen.generate()?;
//! println!("entrance {:?}, exit {:?}", maze.entrance(), maze.exit());
//! # Ok::<(), mazegen::maze::MazeError>(())
//! ```

pub mod branch;
pub mod carver;
pub mod geometry;
pub mod grid;
pub mod maze;
pub mod prng;
