use super::flow::{FlowEdge, FlowNetwork};

// mock network generation functions

/// two vertices and no edge, nothing can flow
pub fn mock_flow_network_a() -> FlowNetwork<i32> {
    FlowNetwork::new(2, vec![])
}

/// 2 units via 0 -> 2 -> 3 and 1 unit via 0 -> 1 -> 3, max flow 3 and min cost 10
pub fn mock_flow_network_b() -> FlowNetwork<i32> {
    FlowNetwork::new(
        4,
        vec![
            FlowEdge::new(0, 1, 3, 1),
            FlowEdge::new(0, 2, 2, 2),
            FlowEdge::new(1, 2, 1, 1),
            FlowEdge::new(1, 3, 1, 3),
            FlowEdge::new(2, 3, 2, 1),
        ],
    )
}

/// single edge that gets saturated
pub fn mock_flow_network_c() -> FlowNetwork<i32> {
    FlowNetwork::new(2, vec![FlowEdge::new(0, 1, 5, 2)])
}

/// parallel edges with different costs, the cheaper one is saturated first
pub fn mock_parallel_edge_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        3,
        vec![
            FlowEdge::new(0, 1, 4, 1),
            FlowEdge::new(1, 2, 2, 5),
            FlowEdge::new(1, 2, 1, 2),
            FlowEdge::new(1, 2, 3, 5),
        ],
    )
}

/// negative costs without negative cycle, max flow 3 and min cost 4
pub fn mock_negative_cost_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        4,
        vec![
            FlowEdge::new(0, 1, 2, 2),
            FlowEdge::new(0, 2, 2, -1),
            FlowEdge::new(2, 1, 1, 4),
            FlowEdge::new(1, 3, 2, -1),
            FlowEdge::new(2, 3, 1, 3),
        ],
    )
}

/// negative cost cycle 1 -> 2 -> 1 reachable from the source
pub fn mock_negative_cycle_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        4,
        vec![
            FlowEdge::new(0, 1, 1, 0),
            FlowEdge::new(1, 2, 5, -3),
            FlowEdge::new(2, 1, 5, 1),
            FlowEdge::new(2, 3, 1, 0),
        ],
    )
}

/// sink 4 is only reachable through a branch that is cut off from the source
pub fn mock_disconnected_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        5,
        vec![
            FlowEdge::new(0, 1, 3, 1),
            FlowEdge::new(1, 2, 3, 1),
            FlowEdge::new(3, 4, 3, 1),
        ],
    )
}

///
/// Flow has to be rerouted through a reverse edge to reach the optimum.
///
/// The first augmenting path 0 -> 1 -> 2 -> 3 (cost 2) blocks both
/// 0 -> 2 -> 3 and 0 -> 1 -> 3; the second one, 0 -> 2 -> 1 -> 3 (cost 4),
/// cancels the flow on 1 -> 2. Max flow 2, min cost 6.
///
pub fn mock_rerouting_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        4,
        vec![
            FlowEdge::new(0, 1, 1, 1),
            FlowEdge::new(0, 2, 1, 2),
            FlowEdge::new(1, 2, 1, 0),
            FlowEdge::new(1, 3, 1, 2),
            FlowEdge::new(2, 3, 1, 1),
        ],
    )
}

/// self loop and a zero capacity edge, both inert
pub fn mock_inert_edges_network() -> FlowNetwork<i32> {
    FlowNetwork::new(
        3,
        vec![
            FlowEdge::new(0, 0, 10, 5),
            FlowEdge::new(0, 1, 2, 3),
            FlowEdge::new(1, 1, 4, 0),
            FlowEdge::new(1, 2, 0, 1),
            FlowEdge::new(0, 2, 1, 7),
        ],
    )
}
