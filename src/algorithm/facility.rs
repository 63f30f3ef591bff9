//! 仓库选址
//!
//! 仓库应放在离心率最小的顶点（图的 minimax 中心）。
//! 只有沿出边能到达所有顶点的顶点才是候选。

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::types::Distance;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

impl<V, D> WeightedGraph<V, D>
where
    V: Eq + Hash + Clone + Debug,
    D: Distance,
{
    /// 离心率：到所有可达顶点最短距离的最大值
    ///
    /// 不可达顶点不计入；`v` 不存在或没有出边时为零。
    pub fn eccentricity(&self, v: &V) -> D {
        self.distances(v)
            .into_values()
            .fold(D::zero(), |max, d| if d > max { d } else { max })
    }

    /// 每个顶点的离心率；不能到达所有顶点的顶点为 `None`
    pub fn eccentricities(&self) -> Vec<(V, Option<D>)> {
        self.vertices()
            .into_iter()
            .map(|v| {
                let e = self.is_connected(&v).then(|| self.eccentricity(&v));
                (v, e)
            })
            .collect()
    }

    /// 最优仓库位置：离心率最小的候选顶点
    ///
    /// 离心率相同时取顶点顺序中的第一个。没有任何顶点能到达全图
    /// （包括空图）时返回 [`Error::NoCentralVertex`]。
    pub fn find_optimal_warehouse(&self) -> Result<V> {
        let mut best: Option<(V, D)> = None;

        for v in self.vertices() {
            if !self.is_connected(&v) {
                debug!(vertex = ?v, "顶点无法到达全图，跳过");
                continue;
            }

            let e = self.eccentricity(&v);
            debug!(vertex = ?v, eccentricity = %e, "计算离心率");

            let better = match &best {
                Some((_, min)) => e < *min,
                None => true,
            };
            if better {
                best = Some((v, e));
            }
        }

        best.map(|(v, _)| v).ok_or(Error::NoCentralVertex)
    }
}
