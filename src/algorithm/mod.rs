//! 图算法模块
//!
//! 包含最短路径（Dijkstra）、可达性遍历（BFS）和仓库选址（最小离心率）

mod facility;
mod shortest_path;
mod traversal;

pub use shortest_path::path_distance;
