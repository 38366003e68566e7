//! 便捷 API 函数
//!
//! 提供了驱动整个转换流程的高层 API：逐行读取、识别 INSERT 行、提取 value-list、
//! 编码为 CSV 写出。

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::parser::line_reader::LineReader;
use crate::parser::parse_functions::extract_values;
use crate::tools::{is_insert_line, values_sanity_check};
use crate::writer::{RowWriter, encode_value_list};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// 一次转换的统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertSummary {
    /// 读取的行数
    pub lines_read: usize,
    /// 以 `INSERT INTO` 开头的行数
    pub insert_lines: usize,
    /// 未通过 value-list 检查而被跳过的 INSERT 行数
    pub skipped_lines: usize,
    /// 写出的 CSV 记录数
    pub rows_written: usize,
    /// 是否因取消而提前结束
    pub cancelled: bool,
}

/// 从 Reader 读取 dump 内容并把 CSV 写入 Writer
///
/// 每读一行前检查一次 `cancel`，已取消时立即返回，`cancelled` 为 `true`。
///
/// # 参数
///
/// * `input` - dump 内容
/// * `output` - CSV 输出
/// * `config` - 转换器配置
/// * `cancel` - 取消令牌
///
/// # 返回
///
/// * `Ok(ConvertSummary)` - 读到输入结束或被取消
/// * `Err(ConvertError)` - 遇到行超长或致命错误，已写出的内容保留
///
/// # 示例
///
/// ```
/// use mysqldump_to_csv::{ConverterConfig, convert};
/// use tokio_util::sync::CancellationToken;
///
/// let dump = b"-- MySQL dump\nINSERT INTO `t` VALUES (1,'foo'),(2,'bar');\n";
/// let mut out = Vec::new();
///
/// let summary = convert(&dump[..], &mut out, &ConverterConfig::default(), &CancellationToken::new())?;
///
/// assert_eq!(summary.rows_written, 2);
/// assert_eq!(out, b"1,foo\r\n2,bar\r\n");
/// # Ok::<(), mysqldump_to_csv::ConvertError>(())
/// ```
pub fn convert<R, W>(
    input: R,
    output: W,
    config: &ConverterConfig,
    cancel: &CancellationToken,
) -> Result<ConvertSummary, ConvertError>
where
    R: Read,
    W: Write,
{
    config.validate()?;

    let mut lines = LineReader::with_max_line_size(input, config.max_line_size);
    let mut writer = RowWriter::new(output);
    let mut summary = ConvertSummary::default();

    loop {
        if cancel.is_cancelled() {
            info!(lines_read = summary.lines_read, "conversion cancelled");
            summary.cancelled = true;
            break;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        summary.lines_read += 1;

        if !is_insert_line(&line) {
            continue;
        }
        summary.insert_lines += 1;

        let line_no = lines.line_number();
        let values = extract_values(&line).map_err(|e| e.at_line(line_no))?;
        if !values_sanity_check(values) {
            debug!(line = line_no, "skipping INSERT without a tuple list");
            summary.skipped_lines += 1;
            continue;
        }

        let written = encode_value_list(values, &mut writer).map_err(|e| e.at_line(line_no))?;
        debug!(line = line_no, rows = written, "converted INSERT statement");
    }

    writer.flush()?;
    summary.rows_written = writer.rows_written();
    Ok(summary)
}

/// 从文件读取 dump 内容并把 CSV 写入 Writer
///
/// # 返回
///
/// * `Err(ConvertError::Open)` - 文件无法打开
/// * 其余同 [`convert`]
///
/// # 示例
///
/// ```no_run
/// use mysqldump_to_csv::{ConverterConfig, convert_file};
/// use tokio_util::sync::CancellationToken;
///
/// let stdout = std::io::stdout();
/// let summary = convert_file("dump.sql", stdout.lock(), &ConverterConfig::default(), &CancellationToken::new())?;
/// eprintln!("写出 {} 条记录", summary.rows_written);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_file<P, W>(
    path: P,
    output: W,
    config: &ConverterConfig,
    cancel: &CancellationToken,
) -> Result<ConvertSummary, ConvertError>
where
    P: AsRef<Path>,
    W: Write,
{
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| ConvertError::Open {
        path: path_ref.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path_ref.display(), "opened input file");
    convert(file, output, config, cancel)
}

/// 在内存中转换 dump 内容，返回 CSV 字节
///
/// # 示例
///
/// ```
/// use mysqldump_to_csv::{ConverterConfig, convert_bytes};
///
/// let csv = convert_bytes(b"INSERT INTO `t` VALUES (1,'a,b');", &ConverterConfig::default())?;
/// assert_eq!(csv, b"1,\"a,b\"\r\n");
/// # Ok::<(), mysqldump_to_csv::ConvertError>(())
/// ```
pub fn convert_bytes(input: &[u8], config: &ConverterConfig) -> Result<Vec<u8>, ConvertError> {
    let mut out = Vec::new();
    convert(input, &mut out, config, &CancellationToken::new())?;
    Ok(out)
}
