//! 内置样例图
//!
//! 7 个配送点的参考网络，以及一个小型回归图

use crate::graph::WeightedGraph;

/// 参考配送网络的边：(from, to, distance)
pub const DEPOT_EDGES: &[(&str, &str, f64)] = &[
    ("1", "2", 13.0),
    ("1", "4", 23.0),
    ("1", "7", 14.0),
    ("2", "7", 21.0),
    ("2", "5", 11.0),
    ("2", "1", 17.0),
    ("3", "7", 5.0),
    ("3", "6", 23.0),
    ("3", "2", 21.0),
    ("4", "3", 41.0),
    ("4", "6", 21.0),
    ("5", "3", 13.0),
    ("5", "6", 12.0),
    ("6", "4", 17.0),
    ("6", "1", 13.0),
    ("6", "7", 23.0),
    ("7", "3", 16.0),
];

/// 7 个配送点的参考网络（顶点 "1" 到 "7"）
pub fn depot_network() -> WeightedGraph<String, f64> {
    let mut graph = WeightedGraph::new();

    for v in 1..=7 {
        graph.add_vertex(v.to_string());
    }
    for &(from, to, d) in DEPOT_EDGES {
        graph.add_edge(from.to_string(), to.to_string(), d);
    }

    graph
}

/// 回归图：顶点 0..=4，删除 4 后加入边 0->1, 1->2, 1->3, 2->3，再删除 1->2
pub fn regression_graph() -> WeightedGraph<i32, i32> {
    let mut graph = WeightedGraph::new();

    for v in 0..5 {
        graph.add_vertex(v);
    }
    graph.remove_vertex(&4);

    graph.add_edge(0, 1, 1);
    graph.add_edge(1, 2, 10);
    graph.add_edge(1, 3, 20);
    graph.add_edge(2, 3, 5);
    graph.remove_edge(&1, &2);

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_network_shape() {
        let graph = depot_network();
        assert_eq!(graph.order(), 7);
        assert_eq!(graph.edge_count(), DEPOT_EDGES.len());
        assert_eq!(graph.degree(&"6".to_string()), 3);
        assert_eq!(graph.degree(&"7".to_string()), 1);
    }

    #[test]
    fn test_regression_graph_shape() {
        let graph = regression_graph();
        assert_eq!(graph.order(), 4);
        assert!(!graph.has_vertex(&4));
        assert!(graph.has_edge(&1, &3));
        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&3, &1));
        assert_eq!(graph.degree(&2), 1);
        assert_eq!(graph.degree(&3), 0);
    }
}
