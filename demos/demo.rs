//! 仓库选址演示
//!
//! 构建 7 个配送点的参考网络并计算最优仓库位置

use warehouse_graph::cli::Printer;
use warehouse_graph::sample;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("仓库选址演示");
    println!("============\n");

    let graph = sample::depot_network();
    let printer = Printer::default();

    println!("Initial Graph:");
    print!("{}", printer.format_adjacency(&graph));
    println!();

    let warehouse = graph.find_optimal_warehouse()?;
    print!(
        "{}",
        printer.format_eccentricities(&graph.eccentricities(), Some(&warehouse))
    );
    println!("The optimal location for the warehouse is: {}", warehouse);

    Ok(())
}
