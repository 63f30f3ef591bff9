//! warehouse-graph - 内存带权图与仓库选址
//!
//! 泛型有向带权图，支持：
//! - 顶点和边的增量构建与删除
//! - 单源最短路径（Dijkstra）与路径重构
//! - 广度优先可达性遍历
//! - 最优仓库位置（离心率最小的顶点）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod sample;
pub mod types;

// 重导出常用类型
pub use algorithm::path_distance;
pub use error::{Error, Result};
pub use graph::{Edge, WeightedGraph};
pub use types::Distance;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
