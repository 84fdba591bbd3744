
pub mod dijkstra;
pub mod a_star;
mod path;

use path::reconstruct_path;

use crate::collections::FxIndexMap;

/// Type alias for the search bookkeeping map used by both solvers
/// N: Node - a position on the graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cumulative cost to reach this node from the start
/// A node absent from the map has an infinite (unknown) cost
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
