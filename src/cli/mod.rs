//! 命令行交互
//!
//! 命令解析与结果格式化，供 `warehouse-cli` 使用

mod commands;
mod printer;

pub use commands::{CommandResult, Shell};
pub use printer::{PrintMode, Printer};
