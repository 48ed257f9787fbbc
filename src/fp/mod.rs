//! Compressed-tree (FP-Growth-style) frequent itemset miner.
//!
//! The tree is an arena of nodes indexed by `usize` handles: parents own
//! their children through the arena, while the header table holds
//! non-owning indices into it. Each mining call (top-level and every
//! conditional recursion) builds its own tree and discards it on return.

pub mod builder;
pub mod mining;
pub mod tree;

pub use mining::mine;
pub use tree::{FpNode, FpTree};
