//! 结果打印器
//!
//! 只读取查询结果，负责把图和算法输出格式化为文本

use crate::algorithm::path_distance;
use crate::graph::{Edge, WeightedGraph};
use crate::types::Distance;
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Display;
use std::hash::Hash;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 邻接表
    pub fn format_adjacency<V, D>(&self, graph: &WeightedGraph<V, D>) -> String
    where
        V: Eq + Hash + Clone + Display,
        D: Distance,
    {
        let mut output = String::new();
        for v in graph.vertices() {
            output.push_str(&format!("Vertex {} is connected to:\n", v));
            for edge in graph.edges(&v) {
                output.push_str(&format!("  {}\n", edge));
            }
        }
        output
    }

    /// 路径（每条边一行，最后是总长度）
    pub fn format_path<V, D>(&self, path: &[Edge<V, D>]) -> String
    where
        V: Display,
        D: Distance,
    {
        if path.is_empty() {
            return "No path\n".to_string();
        }

        let mut output = String::new();
        for edge in path {
            output.push_str(&format!(
                "{} -> {} (Distance: {})\n",
                edge.from(),
                edge.to(),
                edge.distance()
            ));
        }
        output.push_str(&format!("Total: {}\n", path_distance(path)));
        output
    }

    /// 离心率表
    pub fn format_eccentricities<V, D>(&self, rows: &[(V, Option<D>)], warehouse: Option<&V>) -> String
    where
        V: Display + PartialEq,
        D: Distance,
    {
        let columns = ["Vertex", "Reaches All", "Eccentricity", "Warehouse"];
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|(v, e)| {
                vec![
                    v.to_string(),
                    if e.is_some() { "yes" } else { "no" }.to_string(),
                    e.as_ref().map(|e| e.to_string()).unwrap_or_else(|| "-".to_string()),
                    if warehouse == Some(v) { "*" } else { "" }.to_string(),
                ]
            })
            .collect();

        match self.mode {
            PrintMode::Table => self.format_table(&columns, &cells),
            PrintMode::Vertical => self.format_vertical(&columns, &cells),
        }
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 图统计信息
    pub fn print_stats(&self, order: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", order.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   warehouse-cli 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  stats, info                显示图统计信息
  print, p                   打印邻接表
  mode <table|vertical>      设置表格输出模式

图修改:
  add-vertex <v>             添加顶点
  remove-vertex <v>          删除顶点及相关边
  add-edge <a> <b> <d>       添加有向边 a -> b
  remove-edge <a> <b> [d]    删除 a -> b 的边（给出 d 时只删除该边权的边）

查询:
  vertices, vs               列出所有顶点
  edges <v>                  列出顶点的出边
  has-edge <a> <b> [d]       边是否存在
  degree <v>                 出度
  path <a> <b>               最短路径
  walk <v>                   广度优先遍历
  ecc <v>                    离心率
  ecc-table                  所有顶点的离心率
  warehouse                  最优仓库位置

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_format_adjacency() {
        let mut graph: WeightedGraph<u32, f64> = WeightedGraph::new();
        graph.add_edge(1, 2, 13.0);
        graph.add_edge(1, 4, 23.5);

        let out = Printer::default().format_adjacency(&graph);
        assert_eq!(
            out,
            "Vertex 1 is connected to:\n  (1) ---[13]---> (2)\n  (1) ---[23.5]---> (4)\n\
             Vertex 2 is connected to:\nVertex 4 is connected to:\n"
        );
    }

    #[test]
    fn test_format_path() {
        let graph = sample::regression_graph();
        let printer = Printer::default();

        let out = printer.format_path(&graph.shortest_path(&0, &3));
        assert_eq!(
            out,
            "0 -> 1 (Distance: 1)\n1 -> 3 (Distance: 20)\nTotal: 21\n"
        );
        assert_eq!(printer.format_path(&graph.shortest_path(&3, &0)), "No path\n");
    }

    #[test]
    fn test_format_eccentricities_vertical() {
        let rows = vec![("a", Some(3u32)), ("b", None)];
        let printer = Printer::new(PrintMode::Vertical);

        let out = printer.format_eccentricities(&rows, Some(&"a"));
        assert!(out.contains("1. row"));
        assert!(out.contains("Eccentricity: 3"));
        assert!(out.contains("Reaches All: no"));
        assert!(out.contains("   Warehouse: *"));
    }

    #[test]
    fn test_format_eccentricities_table() {
        let graph = sample::depot_network();
        let rows = graph.eccentricities();
        let warehouse = graph.find_optimal_warehouse().unwrap();

        let out = Printer::default().format_eccentricities(&rows, Some(&warehouse));
        assert!(out.contains("Eccentricity"));
        assert!(out.contains("34"));
        assert!(out.contains("58"));
    }

    #[test]
    fn test_print_stats() {
        let out = Printer::default().print_stats(7, 17);
        assert!(out.contains("Vertex Count"));
        assert!(out.contains("17"));
    }
}
