//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("没有可以到达所有顶点的顶点，无法确定仓库位置")]
    NoCentralVertex,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
