//! 解析器使用的常量定义
//!
//! 定义了解析过程中使用的所有常量，包括语句前缀、分隔符、引号字符等。

use memchr::memmem::Finder;
use once_cell::sync::Lazy;

// 行相关常量

/// INSERT 语句的行首前缀（区分大小写）
pub const INSERT_PREFIX: &[u8] = b"INSERT INTO";

/// 行缓冲区默认上限：1 MiB
pub const DEFAULT_MAX_LINE_SIZE: usize = 1024 * 1024;

// value-list 相关常量

/// 表名与 value-list 之间的分隔标记
pub const VALUES_MARKER: &[u8] = b"` VALUES ";

/// 行块之间的文本分隔符（右括号 + 逗号）
pub const ROW_SEPARATOR: &[u8] = b"),";

/// 最后一个行块末尾的语句结束符（右括号 + 分号）
pub const STATEMENT_TERMINATOR: &[u8] = b");";

/// 行元组的起始字符
pub const OPEN_PAREN: u8 = b'(';

// 字段相关常量

/// SQL 字符串的引号字符，同时也是转义字符（`''` 表示一个 `'`）
pub const SQL_QUOTE: u8 = b'\'';

/// 字段分隔符
pub const FIELD_DELIMITER: u8 = b',';

// 预编译的查找器，避免每行重新构建

/// `` ` VALUES `` 标记查找器
pub static VALUES_MARKER_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(VALUES_MARKER));

/// `),` 行分隔符查找器
pub static ROW_SEPARATOR_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(ROW_SEPARATOR));
