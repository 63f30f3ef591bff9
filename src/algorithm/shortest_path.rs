//! 最短路径算法
//!
//! 基于二叉堆的 Dijkstra 实现，要求边权非负

use crate::graph::{Edge, WeightedGraph};
use crate::types::Distance;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use tracing::trace;

/// 优先队列条目
///
/// 按距离升序出队；距离相同时先入队者先出。
struct QueueEntry<D> {
    distance: D,
    seq: usize,
    vertex: usize,
}

impl<D: PartialOrd> PartialEq for QueueEntry<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<D: PartialOrd> Eq for QueueEntry<D> {}

impl<D: PartialOrd> PartialOrd for QueueEntry<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: PartialOrd> Ord for QueueEntry<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap 是最大堆，这里反转得到最小堆
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// 单源最短路径树（以邻接表位置为下标）
pub(crate) struct ShortestPathTree<D> {
    /// 暂定距离，不可达为无穷大
    pub(crate) distance: Vec<D>,
    /// 前驱边：(前驱顶点位置, 该边在前驱出边列表中的位置)
    pub(crate) previous: Vec<Option<(usize, usize)>>,
}

impl<V, D> WeightedGraph<V, D>
where
    V: Eq + Hash + Clone,
    D: Distance,
{
    /// Dijkstra 主循环
    ///
    /// 给定 `target` 时，目标出队即停止。
    pub(crate) fn dijkstra(&self, source: usize, target: Option<usize>) -> ShortestPathTree<D> {
        let n = self.order();
        let mut distance = vec![D::infinity(); n];
        let mut previous = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut seq = 0;

        distance[source] = D::zero();
        heap.push(QueueEntry {
            distance: D::zero(),
            seq,
            vertex: source,
        });

        while let Some(QueueEntry { vertex: current, .. }) = heap.pop() {
            if settled[current] {
                continue;
            }
            settled[current] = true;

            if Some(current) == target {
                trace!(vertex = current, "目标顶点已出队，提前结束");
                break;
            }

            let Some(from) = self.vertex_at(current) else {
                continue;
            };

            for (pos, edge) in self.outgoing(from).iter().enumerate() {
                let Some(next) = self.index_of(edge.to()) else {
                    continue;
                };
                let new_distance = distance[current].saturating_sum(edge.distance());
                if new_distance < distance[next] {
                    distance[next] = new_distance;
                    previous[next] = Some((current, pos));
                    seq += 1;
                    heap.push(QueueEntry {
                        distance: new_distance,
                        seq,
                        vertex: next,
                    });
                }
            }
        }

        ShortestPathTree { distance, previous }
    }

    /// 最短路径（按顺序排列的边）
    ///
    /// 不可达、`from == to`、或任一顶点不存在时返回空序列。
    /// 等长路径之间选哪一条不作保证。
    pub fn shortest_path(&self, from: &V, to: &V) -> Vec<Edge<V, D>> {
        let (Some(source), Some(target)) = (self.index_of(from), self.index_of(to)) else {
            return Vec::new();
        };
        if source == target {
            return Vec::new();
        }

        let tree = self.dijkstra(source, Some(target));

        // 沿前驱边回溯
        let mut path = Vec::new();
        let mut current = target;
        while current != source {
            let Some((prev, pos)) = tree.previous[current] else {
                return Vec::new();
            };
            let edge = self
                .vertex_at(prev)
                .and_then(|v| self.outgoing(v).get(pos));
            match edge {
                Some(edge) => path.push(edge.clone()),
                None => return Vec::new(),
            }
            current = prev;
        }

        path.reverse();
        path
    }

    /// 从 `from` 出发到所有可达顶点的最短距离（包含 `from` 自身，距离为零）
    ///
    /// 顺序与 `vertices()` 一致；`from` 不存在时为空。
    pub fn distances(&self, from: &V) -> IndexMap<V, D> {
        let Some(source) = self.index_of(from) else {
            return IndexMap::new();
        };

        let tree = self.dijkstra(source, None);
        tree.distance
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite_distance())
            .filter_map(|(i, &d)| self.vertex_at(i).map(|v| (v.clone(), d)))
            .collect()
    }
}

/// 路径总长度
pub fn path_distance<V, D: Distance>(path: &[Edge<V, D>]) -> D {
    path.iter()
        .fold(D::zero(), |acc, e| acc.saturating_sum(e.distance()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_chained<V: PartialEq + std::fmt::Debug, D: Copy>(
        path: &[Edge<V, D>],
        from: &V,
        to: &V,
    ) {
        assert_eq!(path.first().map(|e| e.from()), Some(from));
        assert_eq!(path.last().map(|e| e.to()), Some(to));
        for pair in path.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
    }

    #[test]
    fn test_shortest_path_basic() {
        let mut graph: WeightedGraph<u32, u32> = WeightedGraph::new();
        graph.add_edge(1, 2, 7);
        graph.add_edge(1, 3, 9);
        graph.add_edge(1, 6, 14);
        graph.add_edge(2, 3, 10);
        graph.add_edge(2, 4, 15);
        graph.add_edge(3, 4, 11);
        graph.add_edge(3, 6, 2);
        graph.add_edge(4, 5, 6);
        graph.add_edge(6, 5, 9);

        let path = graph.shortest_path(&1, &5);
        assert_chained(&path, &1, &5);
        assert_eq!(path_distance(&path), 20);
        assert_eq!(
            path,
            vec![Edge::new(1, 3, 9), Edge::new(3, 6, 2), Edge::new(6, 5, 9)]
        );
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        let graph = sample::depot_network();
        for v in graph.vertices() {
            assert!(graph.shortest_path(&v, &v).is_empty());
        }
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = sample::regression_graph();
        // 3 没有出边
        assert!(graph.shortest_path(&3, &0).is_empty());
        assert!(graph.shortest_path(&2, &1).is_empty());
    }

    #[test]
    fn test_shortest_path_unknown_vertices() {
        let graph = sample::regression_graph();
        assert!(graph.shortest_path(&42, &1).is_empty());
        assert!(graph.shortest_path(&0, &42).is_empty());
    }

    #[test]
    fn test_regression_graph_path() {
        let graph = sample::regression_graph();
        let path = graph.shortest_path(&1, &3);
        assert_eq!(path, vec![Edge::new(1, 3, 20)]);

        let path = graph.shortest_path(&0, &3);
        assert_chained(&path, &0, &3);
        assert_eq!(path_distance(&path), 21);
    }

    #[test]
    fn test_parallel_edges_pick_cheapest() {
        let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
        graph.add_edge("a", "b", 5.0);
        graph.add_edge("a", "b", 2.0);
        graph.add_edge("a", "b", 3.0);

        let path = graph.shortest_path(&"a", &"b");
        assert_eq!(path, vec![Edge::new("a", "b", 2.0)]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph: WeightedGraph<u8, u32> = WeightedGraph::new();
        graph.add_edge(0, 1, 0);
        graph.add_edge(1, 2, 0);
        graph.add_edge(0, 2, 1);

        let path = graph.shortest_path(&0, &2);
        assert_eq!(path_distance(&path), 0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_distances() {
        let graph = sample::regression_graph();
        let d = graph.distances(&0);
        assert_eq!(d.get(&0), Some(&0));
        assert_eq!(d.get(&1), Some(&1));
        assert_eq!(d.get(&3), Some(&21));
        // 2 只能通过已删除的边 1 -> 2 到达
        assert_eq!(d.get(&2), None);

        assert!(graph.distances(&99).is_empty());
    }

    fn floyd_warshall(n: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<Option<u64>>> {
        let mut dist = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for &(a, b, w) in edges {
            let cur = dist[a][b];
            if cur.map_or(true, |c| w < c) {
                dist[a][b] = Some(w);
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                        if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                            dist[i][j] = Some(ik + kj);
                        }
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn test_matches_floyd_warshall_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let n = rng.gen_range(1..9);
            let m = rng.gen_range(0..n * 3);
            let mut graph: WeightedGraph<usize, u64> = WeightedGraph::new();
            for v in 0..n {
                graph.add_vertex(v);
            }

            let mut edges = Vec::with_capacity(m);
            for _ in 0..m {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                let w = rng.gen_range(0..20);
                graph.add_edge(a, b, w);
                edges.push((a, b, w));
            }

            let expected = floyd_warshall(n, &edges);
            for a in 0..n {
                let all = graph.distances(&a);
                for b in 0..n {
                    assert_eq!(all.get(&b).copied(), expected[a][b]);

                    let path = graph.shortest_path(&a, &b);
                    if a == b {
                        assert!(path.is_empty());
                        continue;
                    }
                    match expected[a][b] {
                        Some(d) => {
                            assert_chained(&path, &a, &b);
                            assert_eq!(path_distance(&path), d);
                        }
                        None => assert!(path.is_empty()),
                    }
                }
            }
        }
    }
}
