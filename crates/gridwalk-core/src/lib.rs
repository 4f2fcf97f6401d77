//! **gridwalk-core**: grid types shared by the gridwalk search crates.
//!
//! This crate provides the passive data the pathfinders operate on:
//! integer [`Point`]s, [`Cell`]s carrying the BFS visited flag, and the
//! [`Grid`] that exclusively owns one cell per position.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{DIRS_4, Point};
pub use grid::{Grid, GridError};
