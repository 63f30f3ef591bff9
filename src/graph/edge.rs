//! 边定义
//!
//! 有向带权边：from -> to，权重为 distance

use std::fmt;

/// 有向带权边
///
/// 同一对顶点之间允许存在多条边，每条边都是独立的值。
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, D> {
    /// 源顶点
    from: V,
    /// 目标顶点
    to: V,
    /// 边权
    distance: D,
}

impl<V, D: Copy> Edge<V, D> {
    /// 创建新边
    pub fn new(from: V, to: V, distance: D) -> Self {
        Self { from, to, distance }
    }

    /// 获取源顶点
    pub fn from(&self) -> &V {
        &self.from
    }

    /// 获取目标顶点
    pub fn to(&self) -> &V {
        &self.to
    }

    /// 获取边权
    pub fn distance(&self) -> D {
        self.distance
    }

    /// 拆分为 (from, to, distance)
    pub fn into_parts(self) -> (V, V, D) {
        (self.from, self.to, self.distance)
    }
}

impl<V: fmt::Display, D: fmt::Display> fmt::Display for Edge<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) ---[{}]---> ({})", self.from, self.distance, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let e = Edge::new("1", "2", 13.0);
        assert_eq!(e.from(), &"1");
        assert_eq!(e.to(), &"2");
        assert_eq!(e.distance(), 13.0);
        assert_eq!(e.to_string(), "(1) ---[13]---> (2)");
        assert_eq!(e.into_parts(), ("1", "2", 13.0));
    }
}
