//! 图数据结构
//!
//! 内存中的有向带权图，邻接表按顶点插入顺序保存

use super::edge::Edge;
use crate::types::Distance;
use indexmap::IndexMap;
use std::hash::Hash;

/// 有向带权图
///
/// `V` 为顶点标识（外部提供，需可比较、可哈希），`D` 为边权类型。
/// 所有查询均为只读；对不存在的顶点查询时返回 `false`/`0`/空序列。
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, D = f64> {
    /// 邻接表：顶点 -> 出边列表
    adjacency: IndexMap<V, Vec<Edge<V, D>>>,
}

impl<V, D> Default for WeightedGraph<V, D> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V, D> WeightedGraph<V, D>
where
    V: Eq + Hash + Clone,
    D: Distance,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 顶点是否存在
    pub fn has_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// 添加顶点（已存在时不做任何事）
    pub fn add_vertex(&mut self, v: V) {
        self.adjacency.entry(v).or_default();
    }

    /// 删除顶点及所有以它为端点的边
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if self.adjacency.shift_remove(v).is_none() {
            return false;
        }

        for edges in self.adjacency.values_mut() {
            edges.retain(|e| e.to() != v && e.from() != v);
        }

        true
    }

    /// 所有顶点（按插入顺序）
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// 顶点数量
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// 出度；顶点不存在时为 0
    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map(Vec::len).unwrap_or(0)
    }

    // ==================== 边操作 ====================

    /// 添加有向边，缺失的端点会自动添加
    pub fn add_edge(&mut self, from: V, to: V, distance: D) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge::new(from, to, distance));
        }
    }

    /// 删除 from -> to 的所有边（包括平行边）
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        self.remove_edges_where(from, |e| e.to() == to)
    }

    /// 删除与给定边目标顶点和边权都相同的所有边
    pub fn remove_edge_exact(&mut self, edge: &Edge<V, D>) -> bool {
        self.remove_edges_where(edge.from(), |e| {
            e.to() == edge.to() && e.distance() == edge.distance()
        })
    }

    fn remove_edges_where<F>(&mut self, from: &V, mut matches: F) -> bool
    where
        F: FnMut(&Edge<V, D>) -> bool,
    {
        match self.adjacency.get_mut(from) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|e| !matches(e));
                edges.len() != before
            }
            None => false,
        }
    }

    /// 是否存在 from -> to 的边（不考虑边权）
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing(from).iter().any(|e| e.to() == to)
    }

    /// 是否存在与给定边目标顶点和边权都相同的边
    pub fn has_edge_exact(&self, edge: &Edge<V, D>) -> bool {
        self.outgoing(edge.from())
            .iter()
            .any(|e| e.to() == edge.to() && e.distance() == edge.distance())
    }

    /// 顶点出边的副本；顶点不存在时为空
    pub fn edges(&self, v: &V) -> Vec<Edge<V, D>> {
        self.outgoing(v).to_vec()
    }

    /// 边总数
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// 出边切片（内部遍历用，不复制）
    pub(crate) fn outgoing(&self, v: &V) -> &[Edge<V, D>] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 顶点在邻接表中的位置（用于稠密数组下标）
    pub(crate) fn index_of(&self, v: &V) -> Option<usize> {
        self.adjacency.get_index_of(v)
    }

    /// 按位置取顶点
    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(v, _)| v)
    }
}
