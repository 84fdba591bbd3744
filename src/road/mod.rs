pub mod route;

use crate::collections::FxIndexMap;
use crate::errors::RoutePlannerError;
use crate::geometry::{great_circle, GeoPoint};


/// Opaque road-network node identifier (OSM-style)
pub type NodeId = i64;

/// Weighted adjacency mapping: node -> (neighbor -> edge weight in meters)
/// Built once per solve call and immutable thereafter
/// Nodes with no outgoing edges are simply absent
pub type Adjacency = FxIndexMap<NodeId, FxIndexMap<NodeId, f64>>;


/// Directed road segment
/// length is the physical length in meters; when absent, the weight falls
/// back to the great-circle distance between the endpoint coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct RoadEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub length: Option<f64>,
}


/// A directed road graph with geographic node coordinates
/// Built by an external graph provider and handed to the solvers as-is
#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    nodes: FxIndexMap<NodeId, GeoPoint>,
    edges: Vec<RoadEdge>,
}

impl RoadNetwork {

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with its coordinate in decimal degrees
    pub fn add_node(&mut self, id: NodeId, lat: f64, lon: f64) {
        self.nodes.insert(id, GeoPoint::new(lat, lon));
    }

    /// Register a directed edge
    /// length: explicit physical length in meters, or None to derive the
    /// weight from the endpoint coordinates
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: Option<f64>) {
        self.edges.push(RoadEdge { from, to, length });
    }

    pub fn node(&self, id: NodeId) -> Option<&GeoPoint> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Convert the network into a weighted adjacency mapping
    ///
    /// Weights are validated here, before any solver runs: a negative or
    /// non-finite weight would break the optimality guarantee of both
    /// solvers, so it is rejected as MalformedWeight rather than propagated
    /// into a degenerate search
    ///
    /// Parallel edges between the same ordered pair collapse to a single
    /// entry, last write wins
    pub fn adjacency(&self) -> Result<Adjacency, RoutePlannerError> {

        let mut adjacency = Adjacency::default();

        for edge in &self.edges {

            // Use the explicit length when present, otherwise straight line
            let weight = match edge.length {
                Some(length) => length,
                None => {
                    let from = self.nodes.get(&edge.from)
                        .ok_or(RoutePlannerError::InvalidNode(edge.from))?;
                    let to = self.nodes.get(&edge.to)
                        .ok_or(RoutePlannerError::InvalidNode(edge.to))?;
                    great_circle(from, to)
                }
            };

            if !weight.is_finite() || weight < 0.0 {
                return Err(RoutePlannerError::MalformedWeight {
                    from: edge.from,
                    to: edge.to,
                    weight,
                });
            }

            adjacency.entry(edge.from).or_default().insert(edge.to, weight);
        }

        Ok(adjacency)
    }
}
