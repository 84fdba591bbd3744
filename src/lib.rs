//! Minimum-cost routing over geographically embedded road networks.
//!
//! A [`road::RoadNetwork`] describes nodes with coordinates and directed
//! edges with optional explicit lengths. It is adapted once per solve into a
//! weighted adjacency mapping and searched with either Dijkstra's algorithm
//! or A* guided by great-circle distance to the goal:
//!
//! ```
//! use wayfinder::road::{RoadNetwork, route};
//!
//! let mut network = RoadNetwork::new();
//! network.add_node(1, 29.6486, -82.3497);
//! network.add_node(2, 29.6490, -82.3480);
//! network.add_edge(1, 2, Some(180.0));
//!
//! let route = route::plan_dijkstra(&network, 1, 2).unwrap();
//! assert_eq!(route.nodes, vec![1, 2]);
//! ```
//!
//! The solvers in [`graph_algos`] are generic over node and cost types and
//! can be driven directly with a neighbor closure for graphs that do not
//! come from road data.

pub mod errors;
mod collections;
pub mod geometry;
pub mod graph_algos;
pub mod road;
