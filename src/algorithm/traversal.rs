//! 可达性遍历
//!
//! 沿出边方向的广度优先遍历

use crate::graph::WeightedGraph;
use crate::types::Distance;
use std::collections::VecDeque;
use std::hash::Hash;

impl<V, D> WeightedGraph<V, D>
where
    V: Eq + Hash + Clone,
    D: Distance,
{
    /// BFS，返回访问到的顶点位置（按访问顺序）
    fn bfs_order(&self, start: usize) -> Vec<usize> {
        let mut seen = vec![false; self.order()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        seen[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            let Some(vertex) = self.vertex_at(current) else {
                continue;
            };
            for edge in self.outgoing(vertex) {
                if let Some(next) = self.index_of(edge.to()) {
                    if !seen[next] {
                        seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        order
    }

    /// 从 `start` 出发的广度优先遍历
    ///
    /// 每个可达顶点恰好出现一次；同层邻居按出边顺序访问。
    /// `start` 不存在时返回空序列。
    pub fn walk(&self, start: &V) -> Vec<V> {
        let Some(start) = self.index_of(start) else {
            return Vec::new();
        };

        self.bfs_order(start)
            .into_iter()
            .filter_map(|i| self.vertex_at(i).cloned())
            .collect()
    }

    /// 从 `v` 沿出边能否到达图中所有顶点
    pub fn is_connected(&self, v: &V) -> bool {
        match self.index_of(v) {
            Some(start) => self.bfs_order(start).len() == self.order(),
            None => false,
        }
    }
}
