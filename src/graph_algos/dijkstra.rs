use crate::errors::RoutePlannerError;
use super::{reconstruct_path, GraphNodeMap};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use rustc_hash::FxHashSet;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the minimum-cost path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until the finish node is popped
/// Requires non-negative edge costs - optimality does not hold otherwise
/// Returns the ordered path from start to finish and its total cost
pub fn dijkstra<N, C, IT, NN>(start: N, finish: N, neighbors: NN) -> Result<(Vec<N>, C), RoutePlannerError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    // Traverse the graph - terminates when finish is popped from the frontier
    let (node_map, finish_index) = traverse(start, Some(&finish), neighbors);

    if let Some(finish_index) = finish_index {
        reconstruct_path(&node_map, finish_index)
    } else {
        Err(RoutePlannerError::NoPathFound)
    }
}


/// Returns the full traversal map: every node reachable from start with its
/// parent index and finalized cost
pub fn dijkstra_costs<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    let (node_map, _) = traverse(start, None, neighbors);

    node_map
}


/// Traverses the graph expanding the cheapest frontier node first
/// Returns the bookkeeping map along with the index of the finish node if reached
fn traverse<N, C, IT, NN>(start: N, finish: Option<&N>, neighbors: NN) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    // Frontier - binary heap popping the lowest (cost, node) entry first
    // Stale entries are tolerated and discarded lazily via the visited set
    let mut frontier: BinaryHeap<Candidate<N, C>> = BinaryHeap::new();

    // Bookkeeping map - one entry per discovered node
    // The tuple contains (parent_index, cost) where parent_index is the index
    // of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Finalized nodes by map index - once here, a node is never re-expanded
    let mut visited: FxHashSet<usize> = FxHashSet::default();

    // Add start node to the map and frontier
    node_map.insert_full(start.clone(), (usize::MAX, Zero::zero()));
    frontier.push(Candidate {
        cost: Zero::zero(), // This is the cost from the start node
        node: start,
    });

    // Loop over each frontier entry, removing the cheapest first
    while let Some(Candidate { cost, node }) = frontier.pop() {

        // every frontier node was inserted into the map before being pushed
        let (index, _, &(_, best)) = node_map.get_full(&node).unwrap();

        // Check if we've reached the finish - the popped cost is its true
        // shortest distance, so we can stop before exhausting the frontier
        if finish == Some(&node) {
            return (node_map, Some(index));
        }

        // A cheaper entry for this node was popped earlier - stale, discard
        if !visited.insert(index) {
            continue;
        }

        // entries are only pushed on strict improvement, so the first
        // non-stale pop carries the node's best recorded cost
        debug_assert_eq!(cost, best);

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node).into_iter() {

            // new cost to reach this neighbor = edge cost + node cost
            let new_cost = edge_cost + cost;

            match node_map.entry(neighbor.clone()) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // We've found a better path to this neighbor
                        e.insert((index, new_cost));
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            }

            // Only add to the frontier if we've found a better path
            frontier.push(Candidate {
                cost: new_cost,
                node: neighbor,
            });
        }
    }

    (node_map, None)
}


/// Frontier entry
/// Ordering is reversed so the BinaryHeap pops the minimum first
/// Ties in cost break on the node identifier for deterministic expansion
#[derive(Debug)]
struct Candidate<N, C> {
    cost: C,
    node: N,
}

impl<N: Ord, C: Ord> Ord for Candidate<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl<N: Ord, C: Ord> PartialOrd for Candidate<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: PartialEq, C: PartialEq> PartialEq for Candidate<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}
impl<N: Eq, C: Eq> Eq for Candidate<N, C> {}
