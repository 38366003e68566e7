//! CSV 输出
//!
//! 把解码后的 [`Row`] 写成标准 CSV：`"` 作引号，按需加引号，CRLF 结尾。

use crate::error::ConvertError;
use crate::parser::parse_value_list;
use crate::row::Row;
use csv::{Terminator, Writer, WriterBuilder};
use std::io::Write;

/// 以 CRLF 结尾写出 CSV 记录的写入器
///
/// 同一输出流上的记录字段数可以不同。
pub struct RowWriter<W: Write> {
    writer: Writer<W>,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    pub fn new(output: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_writer(output);
        Self {
            writer,
            rows_written: 0,
        }
    }

    /// 写出一行
    pub fn write_row(&mut self, row: &Row) -> Result<(), ConvertError> {
        self.writer.write_record(&row.fields)?;
        self.rows_written += 1;
        Ok(())
    }

    /// 刷新底层输出
    pub fn flush(&mut self) -> Result<(), ConvertError> {
        self.writer
            .flush()
            .map_err(|e| ConvertError::Write(e.to_string()))
    }

    /// 已写出的记录数
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// 刷新并取回底层输出
    pub fn into_inner(self) -> Result<W, ConvertError> {
        self.writer
            .into_inner()
            .map_err(|e| ConvertError::Write(e.error().to_string()))
    }
}

/// 把一个 value-list 编码为 CSV 记录写入 `out`
///
/// 先解码整行的所有行块，全部成功后才开始写出，写完后刷新输出。
///
/// # 返回
///
/// * `Ok(usize)` - 写出的记录数
/// * `Err(ConvertError)` - 解码或写出失败
///
/// # 示例
///
/// ```
/// use mysqldump_to_csv::writer::{RowWriter, encode_value_list};
///
/// let mut out = RowWriter::new(Vec::new());
/// let written = encode_value_list(b"(1,'a,b'),(2,'c''d');", &mut out).unwrap();
///
/// assert_eq!(written, 2);
/// assert_eq!(out.into_inner().unwrap(), b"1,\"a,b\"\r\n2,c'd\r\n");
/// ```
pub fn encode_value_list<W: Write>(values: &[u8], out: &mut RowWriter<W>) -> Result<usize, ConvertError> {
    let rows = parse_value_list(values)?;
    for row in &rows {
        out.write_row(row)?;
    }
    out.flush()?;
    Ok(rows.len())
}
