use ordered_float::OrderedFloat;

use crate::errors::RoutePlannerError;
use crate::geometry::great_circle;
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::dijkstra::dijkstra;
use super::{Adjacency, NodeId, RoadNetwork};


/// A solved route through the network
/// nodes runs from start to finish inclusive; a single node means
/// start == finish. cost is the sum of traversed edge weights in meters
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}


/// Plan a minimum-cost route with Dijkstra's algorithm
pub fn plan_dijkstra(network: &RoadNetwork, start: NodeId, finish: NodeId) -> Result<Route, RoutePlannerError> {

    check_endpoint(network, start)?;
    check_endpoint(network, finish)?;

    let adjacency = network.adjacency()?;

    let (nodes, cost) = dijkstra(start, finish, neighbor_fn(&adjacency))?;

    Ok(Route { nodes, cost: cost.into_inner() })
}


/// Plan a minimum-cost route with A*, guided by great-circle distance to the
/// finish coordinate
///
/// The heuristic shares the adjacency builder's distance metric: straight
/// line never exceeds road distance, so it is admissible as long as edge
/// lengths are real travel distances
pub fn plan_a_star(network: &RoadNetwork, start: NodeId, finish: NodeId) -> Result<Route, RoutePlannerError> {

    check_endpoint(network, start)?;
    check_endpoint(network, finish)?;

    let goal = match network.node(finish) {
        Some(point) => *point,
        None => return Err(RoutePlannerError::InvalidNode(finish)),
    };

    let adjacency = network.adjacency()?;

    // A node without a stored coordinate gets a zero estimate, which is
    // always admissible
    let heuristic = |id: &NodeId| {
        let distance = network.node(*id)
            .map(|point| great_circle(point, &goal))
            .unwrap_or(0.0);
        OrderedFloat(distance)
    };

    let a_star = AStar {};
    let (nodes, cost) = a_star.plan(start, finish, neighbor_fn(&adjacency), heuristic)?;

    Ok(Route { nodes, cost: cost.into_inner() })
}


/// Endpoints must exist in the node table - an absent endpoint is reported
/// as InvalidNode rather than masked as an unreachable-finish failure
fn check_endpoint(network: &RoadNetwork, id: NodeId) -> Result<(), RoutePlannerError> {
    if network.contains_node(id) {
        Ok(())
    } else {
        Err(RoutePlannerError::InvalidNode(id))
    }
}


/// Neighbor closure over the adjacency mapping for the generic solvers
/// An absent node has no neighbors, never an error
fn neighbor_fn(adjacency: &Adjacency) -> impl Fn(&NodeId) -> Vec<(NodeId, OrderedFloat<f64>)> + '_ {
    move |id: &NodeId| {
        adjacency.get(id)
            .map(|neighbors| {
                neighbors.iter()
                    .map(|(&neighbor, &weight)| (neighbor, OrderedFloat(weight)))
                    .collect()
            })
            .unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeoPoint;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Small network with all nodes at the same coordinate so the A*
    // heuristic is exactly zero and both solvers share the tie-break order
    fn flat_network(edges: &[(NodeId, NodeId, f64)]) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        for &(from, to, _) in edges {
            network.add_node(from, 0.0, 0.0);
            network.add_node(to, 0.0, 0.0);
        }
        for &(from, to, length) in edges {
            network.add_edge(from, to, Some(length));
        }
        network
    }

    #[test]
    fn test_plan_dijkstra_prefers_detour_over_direct_edge() {
        let network = flat_network(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);

        let route = plan_dijkstra(&network, 1, 3).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 3]);
        assert_eq!(route.cost, 2.0);
    }

    #[test]
    fn test_plan_a_star_prefers_detour_over_direct_edge() {
        let network = flat_network(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);

        let route = plan_a_star(&network, 1, 3).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 3]);
        assert_eq!(route.cost, 2.0);
    }

    #[test]
    fn test_plan_tie_breaks_on_lower_node_id() {
        // Two cost-3 paths: via 2 and via 3 - both solvers must pick 2
        let edges = [(1, 2, 2.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 1.0)];
        let network = flat_network(&edges);

        let route = plan_dijkstra(&network, 1, 4).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 4]);
        assert_eq!(route.cost, 3.0);

        let route = plan_a_star(&network, 1, 4).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 4]);
        assert_eq!(route.cost, 3.0);
    }

    #[test]
    fn test_plan_start_equals_finish() {
        let network = flat_network(&[(1, 2, 1.0)]);

        let route = plan_dijkstra(&network, 1, 1).unwrap();
        assert_eq!(route.nodes, vec![1]);
        assert_eq!(route.cost, 0.0);

        let route = plan_a_star(&network, 1, 1).unwrap();
        assert_eq!(route.nodes, vec![1]);
        assert_eq!(route.cost, 0.0);
    }

    #[test]
    fn test_plan_disconnected_node_is_no_path() {
        // Node 5 exists but nothing leads to it
        let mut network = flat_network(&[(1, 2, 1.0), (2, 3, 1.0)]);
        network.add_node(5, 0.0, 0.0);

        let result = plan_dijkstra(&network, 1, 5);
        assert!(matches!(result, Err(RoutePlannerError::NoPathFound)));

        let result = plan_a_star(&network, 1, 5);
        assert!(matches!(result, Err(RoutePlannerError::NoPathFound)));
    }

    #[test]
    fn test_plan_start_without_outgoing_edges_is_no_path() {
        let mut network = flat_network(&[(1, 2, 1.0)]);
        network.add_node(5, 0.0, 0.0);

        // Node 5 has no outgoing edges at all
        let result = plan_dijkstra(&network, 5, 1);
        assert!(matches!(result, Err(RoutePlannerError::NoPathFound)));
    }

    #[test]
    fn test_plan_unknown_endpoint_is_invalid_node() {
        let network = flat_network(&[(1, 2, 1.0)]);

        let result = plan_dijkstra(&network, 9, 2);
        assert!(matches!(result, Err(RoutePlannerError::InvalidNode(9))));

        let result = plan_a_star(&network, 1, 9);
        assert!(matches!(result, Err(RoutePlannerError::InvalidNode(9))));
    }

    #[test]
    fn test_plan_is_idempotent() {
        let network = flat_network(&[(1, 2, 2.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 1.0)]);

        let first = plan_dijkstra(&network, 1, 4).unwrap();
        let second = plan_dijkstra(&network, 1, 4).unwrap();
        assert_eq!(first, second);

        let first = plan_a_star(&network, 1, 4).unwrap();
        let second = plan_a_star(&network, 1, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_a_star_matches_dijkstra_on_random_grid() {
        // 4x5 grid of real coordinates, edges in both directions between
        // orthogonal neighbors. Each edge length is the great-circle
        // distance inflated by a random factor, so the straight-line
        // heuristic never overestimates and both solvers must agree on cost
        let rows = 4;
        let cols = 5;
        let spacing = 0.01; // degrees

        let id = |r: i64, c: i64| r * cols + c + 1;
        let coord = |r: i64, c: i64| GeoPoint::new(29.0 + spacing * r as f64, -82.0 + spacing * c as f64);

        let mut rng = StdRng::seed_from_u64(7);
        let mut network = RoadNetwork::new();

        for r in 0..rows {
            for c in 0..cols {
                let point = coord(r, c);
                network.add_node(id(r, c), point.lat, point.lon);
            }
        }

        for r in 0..rows {
            for c in 0..cols {
                let mut connect = |r2: i64, c2: i64| {
                    let length = great_circle(&coord(r, c), &coord(r2, c2))
                        * rng.random_range(1.0..1.6);
                    network.add_edge(id(r, c), id(r2, c2), Some(length));
                    network.add_edge(id(r2, c2), id(r, c), Some(length));
                };
                if c + 1 < cols {
                    connect(r, c + 1);
                }
                if r + 1 < rows {
                    connect(r + 1, c);
                }
            }
        }

        let start = id(0, 0);
        let finish = id(rows - 1, cols - 1);

        let dijkstra_route = plan_dijkstra(&network, start, finish).unwrap();
        let a_star_route = plan_a_star(&network, start, finish).unwrap();

        assert!((dijkstra_route.cost - a_star_route.cost).abs() < 1e-9);
        assert_eq!(dijkstra_route.nodes.first(), Some(&start));
        assert_eq!(dijkstra_route.nodes.last(), Some(&finish));
        assert_eq!(a_star_route.nodes.first(), Some(&start));
        assert_eq!(a_star_route.nodes.last(), Some(&finish));
    }

    #[test]
    fn test_plan_with_great_circle_fallback_weights() {
        // No explicit lengths: every weight derives from coordinates
        let mut network = RoadNetwork::new();
        network.add_node(1, 29.6486, -82.3497);
        network.add_node(2, 29.6496, -82.3497);
        network.add_node(3, 29.6506, -82.3497);
        network.add_edge(1, 2, None);
        network.add_edge(2, 3, None);

        let route = plan_dijkstra(&network, 1, 3).unwrap();
        assert_eq!(route.nodes, vec![1, 2, 3]);

        let expected = great_circle(network.node(1).unwrap(), network.node(2).unwrap())
            + great_circle(network.node(2).unwrap(), network.node(3).unwrap());
        assert!((route.cost - expected).abs() < 1e-9);

        let a_star_route = plan_a_star(&network, 1, 3).unwrap();
        assert_eq!(a_star_route.nodes, vec![1, 2, 3]);
        assert!((a_star_route.cost - expected).abs() < 1e-9);
    }
}
