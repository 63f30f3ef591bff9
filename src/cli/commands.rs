//! 命令处理
//!
//! 解析并执行交互式命令，顶点为字符串，边权为 f64

use super::printer::{PrintMode, Printer};
use crate::error::{Error, Result};
use crate::graph::{Edge, WeightedGraph};

/// 命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 交互式会话状态
pub struct Shell {
    graph: WeightedGraph<String, f64>,
    printer: Printer,
}

impl Shell {
    pub fn new(graph: WeightedGraph<String, f64>) -> Self {
        Self {
            graph,
            printer: Printer::default(),
        }
    }

    pub fn graph(&self) -> &WeightedGraph<String, f64> {
        &self.graph
    }

    /// 执行一行命令
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(cmd) = parts.first() else {
            return CommandResult::Continue;
        };
        let args = &parts[1..];

        match self.dispatch(&cmd.to_lowercase(), args) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &[&str]) -> Result<CommandResult> {
        let result = match cmd {
            "quit" | "exit" | "q" => CommandResult::Exit,

            "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

            "stats" | "info" => CommandResult::Message(
                self.printer
                    .print_stats(self.graph.order(), self.graph.edge_count()),
            ),

            "print" | "p" => CommandResult::Message(self.printer.format_adjacency(&self.graph)),

            "mode" => {
                let mode = match arg(args, 0, "mode <table|vertical>")? {
                    "table" => PrintMode::Table,
                    "vertical" => PrintMode::Vertical,
                    other => return Err(Error::ParseError(format!("未知模式: {}", other))),
                };
                self.printer.set_mode(mode);
                CommandResult::Continue
            }

            "vertices" | "vs" => CommandResult::Message(self.graph.vertices().join(" ")),

            "edges" => {
                let v = vertex(args, 0, "edges <v>")?;
                let lines: Vec<String> = self
                    .graph
                    .edges(&v)
                    .iter()
                    .map(|e| e.to_string())
                    .collect();
                CommandResult::Message(lines.join("\n"))
            }

            "add-vertex" => {
                self.graph.add_vertex(vertex(args, 0, "add-vertex <v>")?);
                CommandResult::Continue
            }

            "remove-vertex" => {
                let v = vertex(args, 0, "remove-vertex <v>")?;
                CommandResult::Message(self.graph.remove_vertex(&v).to_string())
            }

            "add-edge" => {
                let usage = "add-edge <a> <b> <d>";
                let from = vertex(args, 0, usage)?;
                let to = vertex(args, 1, usage)?;
                let d = distance(arg(args, 2, usage)?)?;
                self.graph.add_edge(from, to, d);
                CommandResult::Continue
            }

            "remove-edge" => {
                let usage = "remove-edge <a> <b> [d]";
                let from = vertex(args, 0, usage)?;
                let to = vertex(args, 1, usage)?;
                let removed = match args.get(2) {
                    Some(d) => self.graph.remove_edge_exact(&Edge::new(from, to, distance(d)?)),
                    None => self.graph.remove_edge(&from, &to),
                };
                CommandResult::Message(removed.to_string())
            }

            "has-edge" => {
                let usage = "has-edge <a> <b> [d]";
                let from = vertex(args, 0, usage)?;
                let to = vertex(args, 1, usage)?;
                let found = match args.get(2) {
                    Some(d) => self.graph.has_edge_exact(&Edge::new(from, to, distance(d)?)),
                    None => self.graph.has_edge(&from, &to),
                };
                CommandResult::Message(found.to_string())
            }

            "degree" => {
                let v = vertex(args, 0, "degree <v>")?;
                CommandResult::Message(self.graph.degree(&v).to_string())
            }

            "path" | "shortest" => {
                let usage = "path <a> <b>";
                let from = vertex(args, 0, usage)?;
                let to = vertex(args, 1, usage)?;
                let path = self.graph.shortest_path(&from, &to);
                CommandResult::Message(self.printer.format_path(&path))
            }

            "walk" | "bfs" => {
                let v = vertex(args, 0, "walk <v>")?;
                CommandResult::Message(self.graph.walk(&v).join(" "))
            }

            "ecc" => {
                let v = vertex(args, 0, "ecc <v>")?;
                CommandResult::Message(self.graph.eccentricity(&v).to_string())
            }

            "ecc-table" => {
                let rows = self.graph.eccentricities();
                let warehouse = self.graph.find_optimal_warehouse().ok();
                CommandResult::Message(
                    self.printer
                        .format_eccentricities(&rows, warehouse.as_ref()),
                )
            }

            "warehouse" => {
                let v = self.graph.find_optimal_warehouse()?;
                CommandResult::Message(format!(
                    "The optimal location for the warehouse is: {}",
                    v
                ))
            }

            other => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", other)),
        };

        Ok(result)
    }
}

fn arg<'a>(args: &[&'a str], index: usize, usage: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| Error::ParseError(format!("用法: {}", usage)))
}

fn vertex(args: &[&str], index: usize, usage: &str) -> Result<String> {
    arg(args, index, usage).map(str::to_string)
}

fn distance(s: &str) -> Result<f64> {
    let d: f64 = s
        .parse()
        .map_err(|_| Error::ParseError(format!("无效的边权: {}", s)))?;
    if d.is_nan() || d < 0.0 {
        return Err(Error::ParseError(format!("边权必须为非负数: {}", s)));
    }
    Ok(d)
}
