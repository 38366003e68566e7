//! 错误类型定义
//!
//! 定义了转换过程中可能出现的所有错误类型。

use thiserror::Error;

/// 转换错误类型
///
/// 分为两类：软停止（输入文件无法打开、行超长）和致命错误（其余变体）。
/// 两者都会终止本次转换，区别只在于命令行的退出码，见 [`ConvertError::is_fatal`]。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// 输入文件无法打开
    #[error("failed to open input file {path}: {reason}")]
    Open {
        /// 文件路径
        path: String,
        /// 底层 I/O 错误描述
        reason: String,
    },

    /// 行长度超过缓冲区上限
    #[error("line {line} is too long: no line terminator within {limit} bytes")]
    LineTooLong {
        /// 行号（从 1 开始）
        line: usize,
        /// 行缓冲区上限（字节）
        limit: usize,
    },

    /// `` ` VALUES `` 分隔符没有恰好出现一次
    #[error("line {line}: expected exactly one '` VALUES ' marker, found {occurrences}")]
    ValuesMarker {
        /// 实际出现次数
        occurrences: usize,
        /// 行号（从 1 开始，纯解析层报告 0）
        line: usize,
    },

    /// 行块为空，字段读取器无法读出任何记录
    #[error("line {line}: row chunk #{index} is empty")]
    EmptyRowChunk {
        /// 行号（从 1 开始，纯解析层报告 0）
        line: usize,
        /// 行块在 value-list 中的序号（从 0 开始）
        index: usize,
    },

    /// 读取输入失败
    #[error("failed to read input: {0}")]
    Read(String),

    /// 写出 CSV 失败
    #[error("failed to write csv output: {0}")]
    Write(String),

    /// 配置不可用
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    /// 是否为致命错误
    ///
    /// 输入文件无法打开和行超长属于软停止，其余都是致命错误。
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Open { .. } | Self::LineTooLong { .. })
    }

    /// 为纯解析层产生的错误补上行号
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::ValuesMarker { occurrences, .. } => Self::ValuesMarker {
                occurrences,
                line: line_no,
            },
            Self::EmptyRowChunk { index, .. } => Self::EmptyRowChunk {
                line: line_no,
                index,
            },
            other => other,
        }
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        Self::Write(err.to_string())
    }
}
