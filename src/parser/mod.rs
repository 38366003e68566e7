//! Parser 模块 - 解析 mysqldump 中的 INSERT 语句
//!
//! 此模块提供了完整的转换功能,包括:
//! - 带长度上限的按行读取
//! - value-list 提取和解码
//! - 驱动整个流程的便捷 API 函数

mod api;
pub mod constants;
pub mod line_reader;
pub(crate) mod parse_functions;

pub use api::{ConvertSummary, convert, convert_bytes, convert_file};
pub use line_reader::LineReader;
pub use parse_functions::{extract_values, parse_value_list};
