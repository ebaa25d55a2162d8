//! Resumable grid traversals for the pathviz visualizer.
//!
//! This crate provides the three search strategies and the priority queue
//! the heuristic one depends on:
//!
//! - **Breadth-first** ([`BreadthFirst`]), a FIFO frontier
//! - **Depth-first** ([`DepthFirst`]), an explicit-stack walk
//! - **Best-first** ([`BestFirst`]), a [`PriorityQueue`] ranked by Manhattan
//!   distance to the end cell
//!
//! Every traversal implements [`Traversal`]: each [`step`](Traversal::step)
//! runs to the next suspension point and reports the cell it accepted, so a
//! driver can pace the run and edit the grid between steps.
//!
//! # Neighbour order
//!
//! All strategies expand neighbours up, right, down, left
//! ([`Direction::ALL`](pathviz_core::Direction::ALL)); this order decides
//! ties and therefore the exact visitation sequence.

mod best_first;
mod bfs;
mod dfs;
mod frontier;
pub mod heap;
mod strategy;
mod traversal;

pub use best_first::{BestFirst, Closer};
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use frontier::{Frontier, Sweep};
pub use heap::{MaxFirst, MinFirst, Priority, PriorityQueue, QueueError};
pub use strategy::{Search, Strategy, UnknownStrategy};
pub use traversal::{Outcome, SearchContext, Step, Traversal};
