//! # mysqldump to CSV
//!
//! 把 mysqldump 导出的文本逐行扫描，识别 `INSERT INTO` 行，把 `VALUES` 之后的元组列表
//! 逐个转换为 CSV 记录。
//!
//! ## 功能特性
//!
//! - **流式处理**: 逐行读取，单行长度有上限，不把整个文件载入内存
//! - **按字节处理**: 非 UTF-8 内容原样透传
//! - **SQL 引号规则**: `'` 作引号，`''` 表示一个 `'`，引号内的逗号和括号是数据
//! - **明确的错误类型**: 软停止与致命错误区分清楚，库代码从不直接退出进程
//!
//! ## 快速开始
//!
//! ### 解码 value-list
//!
//! ```rust
//! use mysqldump_to_csv::parse_value_list;
//!
//! let rows = parse_value_list(b"(1,'a,b'),(2,'c''d');").unwrap();
//!
//! for row in &rows {
//!     println!("字段: {:?}", row.to_strings());
//! }
//! assert_eq!(rows[1].to_strings(), vec!["2", "c'd"]);
//! ```
//!
//! ### 转换内存中的 dump
//!
//! ```rust
//! use mysqldump_to_csv::{ConverterConfig, convert_bytes};
//!
//! let dump = b"INSERT INTO `t` VALUES (1,'foo'),(2,'bar');\n";
//! let csv = convert_bytes(dump, &ConverterConfig::default()).unwrap();
//! assert_eq!(csv, b"1,foo\r\n2,bar\r\n");
//! ```
//!
//! ### 从文件流式转换
//!
//! ```rust,no_run
//! use mysqldump_to_csv::{ConverterConfig, convert_file};
//! use tokio_util::sync::CancellationToken;
//!
//! let cancel = CancellationToken::new();
//! let stdout = std::io::stdout();
//! let _summary = convert_file("dump.sql", stdout.lock(), &ConverterConfig::default(), &cancel);
//! ```
//!
//! ## 输入格式
//!
//! 只处理形如下面的行，其余行全部忽略：
//!
//! ```text
//! INSERT INTO `users` VALUES (1,'alice',NULL),(2,'bob','x, y');
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod row;
pub mod tools;
pub mod writer;

pub use config::ConverterConfig;
pub use error::ConvertError;
pub use parser::{
    ConvertSummary, LineReader, convert, convert_bytes, convert_file, extract_values,
    parse_value_list,
};
pub use row::Row;
pub use writer::{RowWriter, encode_value_list};
