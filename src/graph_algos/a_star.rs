use crate::errors::RoutePlannerError;
use super::{reconstruct_path, GraphNodeMap};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use rustc_hash::FxHashSet;
use indexmap::map::Entry::{Occupied, Vacant};



/// Frontier entry on the A* graph
/// Ordering is reversed so the BinaryHeap pops the minimum first
/// Sorted by f_cost, with ties broken on the node identifier so expansion
/// order is deterministic
#[derive(Debug)]
struct Estimate<N, C> {
    f_cost: C, // Estimated total = cost + h(n)
    cost: C, // Confirmed cost to reach this node
    node: N,
}

impl<N: Ord, C: Ord> Ord for Estimate<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}
impl<N: Ord, C: Ord> PartialOrd for Estimate<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: PartialEq, C: PartialEq> PartialEq for Estimate<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.node == other.node
    }
}
impl<N: Eq, C: Eq> Eq for Estimate<N, C> {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until the finish node is popped
    /// The approach has 2 requirements:
    /// 1. The heuristic function must be admissible (never overestimates the
    ///    true remaining cost to the finish) and consistent
    /// 2. Edge costs are non-negative
    /// Returns the ordered path from start to finish and its total cost
    pub fn plan<N, C, IT, NN, H>(&self, start: N, finish: N, neighbors: NN, heuristic_fn: H) -> Result<(Vec<N>, C), RoutePlannerError>
    where
        N: Eq + Hash + Ord + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // estimated cost from a node to the finish
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        {

        let (node_map, finish_index) = self.build_graph(start, &finish, neighbors, heuristic_fn);

        match finish_index {
            Some(finish_index) => reconstruct_path(&node_map, finish_index),
            None => Err(RoutePlannerError::NoPathFound)
        }
    }


    /// Traverses the graph expanding the lowest estimated-total node first
    /// The bookkeeping map records confirmed costs only - the heuristic never
    /// leaks into recorded distances, so the reported total stays exact
    fn build_graph<N, C, IT, NN, H>(&self, start: N, finish: &N, neighbors: NN, heuristic_fn: H) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Ord + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> C, // estimated cost from a node to the finish
    {
        // Open list - frontier of nodes to be evaluated, cheapest f_cost first
        // Stale entries are tolerated and discarded lazily via the visited set
        let mut open_list: BinaryHeap<Estimate<N, C>> = BinaryHeap::new();

        // Bookkeeping map - one entry per discovered node
        // The tuple contains (parent_index, cost) where parent_index is the index
        // of the parent node in the map
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

        // Finalized nodes by map index - once here, a node is never re-expanded
        let mut visited: FxHashSet<usize> = FxHashSet::default();

        // Add the start node to the map and the open list
        let start_h = heuristic_fn(&start);
        node_map.insert_full(start.clone(), (usize::MAX, Zero::zero()));
        open_list.push(Estimate {
            f_cost: start_h, // cost + heuristic, cost is zero at the start
            cost: Zero::zero(),
            node: start,
        });

        while let Some(Estimate { cost, node, .. }) = open_list.pop() {

            // every frontier node was inserted into the map before being pushed
            let (index, _, &(_, best)) = node_map.get_full(&node).unwrap();

            // Check if we've reached the finish - with an admissible heuristic
            // the first pop of the finish carries its true shortest distance
            if node == *finish {
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
                // This is confirmed cost, not heuristic
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

                // Only add to the open list if we've found a better path
                let h_cost: C = heuristic_fn(&neighbor);
                open_list.push(Estimate {
                    f_cost: new_cost + h_cost,
                    cost: new_cost,
                    node: neighbor,
                });
            }
        }

        (node_map, None)
    }
}
