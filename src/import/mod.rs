//! 数据导入模块
//!
//! 从 CSV 边列表（from,to,distance）构建图

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// CSV 行
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    distance: f64,
}

impl EdgeRecord {
    fn validate(&self) -> Result<()> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(Error::ImportError("顶点名称为空".to_string()));
        }
        if self.distance.is_nan() || self.distance < 0.0 {
            return Err(Error::ImportError(format!(
                "边权必须为非负数: {}",
                self.distance
            )));
        }
        Ok(())
    }
}

/// 导入选项
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 字段分隔符
    pub delimiter: u8,
    /// 第一行是否为表头
    pub has_headers: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// 边列表导入器
#[derive(Debug, Default)]
pub struct EdgeListImporter {
    options: ImportOptions,
}

impl EdgeListImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用给定选项创建导入器
    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    /// 设置分隔符
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// 设置是否有表头
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.options.has_headers = has_headers;
        self
    }

    /// 从文件导入
    pub fn import_path<P: AsRef<Path>>(
        &self,
        graph: &mut WeightedGraph<String, f64>,
        path: P,
    ) -> Result<ImportStats> {
        let file = File::open(path.as_ref())?;
        self.import_reader(graph, file)
    }

    /// 从任意输入流导入
    ///
    /// 格式错误或边权为负的行计入 `errors` 并跳过。
    pub fn import_reader<R: Read>(
        &self,
        graph: &mut WeightedGraph<String, f64>,
        input: R,
    ) -> Result<ImportStats> {
        let start = Instant::now();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_headers)
            .trim(csv::Trim::All)
            .from_reader(input);

        let order_before = graph.order();
        let mut stats = ImportStats::default();

        for (line, row) in reader.deserialize::<EdgeRecord>().enumerate() {
            let record = match row {
                Ok(record) => record,
                Err(e) => {
                    warn!(line = line + 1, error = %e, "跳过无法解析的行");
                    stats.errors += 1;
                    continue;
                }
            };

            if let Err(e) = record.validate() {
                warn!(line = line + 1, error = %e, "跳过无效的边");
                stats.errors += 1;
                continue;
            }

            graph.add_edge(record.from, record.to, record.distance);
            stats.edges_imported += 1;
        }

        stats.vertices_imported = graph.order() - order_before;
        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            errors = stats.errors,
            "边列表导入完成"
        );

        Ok(stats)
    }
}

/// 从文件加载一个新图
pub fn load_graph<P: AsRef<Path>>(
    path: P,
    importer: &EdgeListImporter,
) -> Result<(WeightedGraph<String, f64>, ImportStats)> {
    let mut graph = WeightedGraph::new();
    let stats = importer.import_path(&mut graph, path)?;
    Ok((graph, stats))
}
