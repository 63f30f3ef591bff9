//! 图核心模块
//!
//! 定义有向带权边和基于邻接表的图容器

mod edge;
mod graph;

pub use edge::Edge;
pub use graph::WeightedGraph;
