use crate::road::NodeId;


#[derive(Debug)]
pub enum RoutePlannerError {
    NoPathFound, // Finish is unreachable from start; deterministic, not worth retrying
    MalformedWeight { from: NodeId, to: NodeId, weight: f64 }, // Negative or non-finite edge weight
    InvalidNode(NodeId), // Node missing from the network's node table
}
