use crate::errors::RoutePlannerError;
use super::GraphNodeMap;

/// Construct the path from start to goal out of the traversal bookkeeping
/// Walks parent indices backwards from the goal, then reverses
/// Returns the ordered node sequence together with the goal's total cost
/// node_map: map of nodes with their parent index and cumulative cost
/// goal_index: index of the goal node in the node_map
pub(crate) fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<(Vec<N>, C), RoutePlannerError>
where
    N: Clone,
    C: Copy,
{

    let total_cost = match node_map.get_index(goal_index) {
        Some((_, &(_, cost))) => cost,
        None => return Err(RoutePlannerError::NoPathFound),
    };

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start - the start node's parent is usize::MAX
    while current_index != usize::MAX {
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(RoutePlannerError::NoPathFound);
        }
    }

    // The walk produced goal-to-start order
    path.reverse();

    Ok((path, total_cost))
}
