//! warehouse-cli
//!
//! 加载边列表（或内置参考网络），计算最优仓库位置，并提供交互式命令行

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use warehouse_graph::cli::{CommandResult, Shell};
use warehouse_graph::import::{load_graph, EdgeListImporter};
use warehouse_graph::sample;

#[derive(Parser, Debug)]
#[command(name = "warehouse-cli")]
#[command(about = "带权图最短路径与仓库选址工具")]
struct Args {
    /// CSV 边列表 (from,to,distance)，缺省时使用内置 7 顶点参考网络
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV 分隔符
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// CSV 没有表头
    #[arg(long)]
    no_header: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志过滤器（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let delimiter = u8::try_from(args.delimiter)
        .context("分隔符必须是单字节字符")?;

    let graph = match &args.input {
        Some(path) => {
            let importer = EdgeListImporter::new()
                .with_delimiter(delimiter)
                .with_headers(!args.no_header);
            let (graph, stats) = load_graph(path, &importer)
                .with_context(|| format!("无法加载边列表: {}", path.display()))?;
            println!(
                "已导入 {} 个顶点, {} 条边 ({} 行错误, 耗时 {} ms)",
                stats.vertices_imported, stats.edges_imported, stats.errors, stats.duration_ms
            );
            graph
        }
        None => sample::depot_network(),
    };

    let mut shell = Shell::new(graph);

    // 单个命令模式
    if let Some(command) = args.execute {
        return match shell.execute(&command) {
            CommandResult::Error(e) => Err(anyhow::anyhow!(e)),
            result => {
                print_result(result);
                Ok(())
            }
        };
    }

    println!("warehouse-cli - 带权图与仓库选址");
    println!("=================================");
    println!("  顶点数: {}", shell.graph().order());
    println!("  边数: {}", shell.graph().edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("warehouse> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match shell.execute(line.trim()) {
            CommandResult::Exit => break,
            result => print_result(result),
        }
    }

    println!("再见！");
    Ok(())
}

fn print_result(result: CommandResult) {
    match result {
        CommandResult::Message(m) => println!("{}", m.trim_end()),
        CommandResult::Error(e) => println!("错误: {}", e),
        CommandResult::Continue | CommandResult::Exit => {}
    }
}
