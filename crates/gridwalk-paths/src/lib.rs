//! Path search over [`gridwalk_core::Grid`].
//!
//! Two interchangeable algorithms implement the [`Pathfinder`] contract:
//!
//! - **BFS** flood search ([`Bfs`]): floods reachability from the start, then
//!   walks greedily toward the end through visited cells. A predecessor-tracked
//!   mode yields true shortest paths.
//! - **A\*** heuristic search ([`Astar`]): Manhattan heuristic, Euclidean step
//!   cost, over the 4-neighbourhood. Shortest on fully populated grids; around
//!   removed cells it can return a longer path (see [`Astar`]).
//!
//! Both return a [`Path`] of cells from start to end inclusive; an empty path
//! means the end is unreachable. Pick the algorithm up front with a
//! [`SearchConfig`] and run searches through a [`Session`].
//!
//! | Type | Role |
//! |---|---|
//! | [`SearchNode`] / [`PriorityQueue`] | A* frontier |
//! | [`CancelToken`] | optional cooperative cancellation |
//! | [`PathError`] | failure taxonomy |

mod astar;
mod bfs;
mod cancel;
mod config;
mod distance;
mod error;
mod node;
mod path;
mod queue;
mod session;
mod traits;

pub use astar::Astar;
pub use bfs::Bfs;
pub use cancel::CancelToken;
pub use config::{BfsReconstruction, FloodStrategy, PathfinderKind, SearchConfig};
pub use distance::{euclidean, manhattan};
pub use error::PathError;
pub use node::SearchNode;
pub use path::Path;
pub use queue::PriorityQueue;
pub use session::Session;
pub use traits::Pathfinder;
