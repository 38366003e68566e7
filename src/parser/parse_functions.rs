//! 核心解析函数
//!
//! 包含了把 INSERT 语句的 value-list 解码成 [`Row`] 的全部步骤：
//! 提取 value-list、按 `),` 切分行块、去掉行元组的左括号、按 SQL 引号规则读取字段。

use crate::error::ConvertError;
use crate::parser::constants::*;
use crate::row::Row;
use memchr::memchr;

/// 从 INSERT 行中提取 value-list
///
/// 以 `` ` VALUES `` 为界把行切成两段，返回后一段（包含末尾的 `;`）。
///
/// # 参数
///
/// * `line` - 以 `INSERT INTO` 开头的一行
///
/// # 返回
///
/// * `Ok(&[u8])` - 标记之后的全部内容
/// * `Err(ConvertError::ValuesMarker)` - 标记没有恰好出现一次
///
/// # 示例
///
/// ```
/// use mysqldump_to_csv::parser::extract_values;
///
/// let values = extract_values(b"INSERT INTO `t` VALUES (1,'foo');").unwrap();
/// assert_eq!(values, b"(1,'foo');");
/// ```
pub fn extract_values(line: &[u8]) -> Result<&[u8], ConvertError> {
    let mut positions = VALUES_MARKER_FINDER.find_iter(line);

    let first = positions.next();
    let extra = positions.count();

    match first {
        Some(pos) if extra == 0 => Ok(&line[pos + VALUES_MARKER.len()..]),
        Some(_) => Err(ConvertError::ValuesMarker {
            occurrences: extra + 1,
            line: 0,
        }),
        None => Err(ConvertError::ValuesMarker {
            occurrences: 0,
            line: 0,
        }),
    }
}

/// 把 value-list 按 `),` 切分成行块
///
/// 切分是纯文本的，不识别引号。最后一个行块若以 `);` 结尾，去掉这两个字节。
pub(crate) fn split_row_chunks(values: &[u8]) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for pos in ROW_SEPARATOR_FINDER.find_iter(values) {
        chunks.push(&values[start..pos]);
        start = pos + ROW_SEPARATOR.len();
    }

    let last = &values[start..];
    chunks.push(last.strip_suffix(STATEMENT_TERMINATOR).unwrap_or(last));
    chunks
}

/// 以 SQL 引号规则读取一个行块中的字段
///
/// 规则与宽松引号模式的 CSV 读取器一致，只是引号字符为 `'`：
/// - 不以 `'` 开头的字段一直读到下一个 `,`，其中的引号按字面处理
/// - 以 `'` 开头的字段中，`''` 表示一个 `'`，`'` 后跟 `,` 或行块结束表示字段结束，
///   `'` 后跟其他字符时保留这个 `'` 并继续按引号字段读取
/// - 未闭合的引号字段读到行块结束
///
/// # 返回
///
/// * `Ok(Vec<Vec<u8>>)` - 至少包含一个字段
/// * `Err(ConvertError::EmptyRowChunk)` - 行块为空
pub(crate) fn read_chunk_fields(chunk: &[u8], index: usize) -> Result<Vec<Vec<u8>>, ConvertError> {
    let mut rest = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    if rest.is_empty() {
        return Err(ConvertError::EmptyRowChunk { line: 0, index });
    }

    let mut fields = Vec::new();
    'fields: loop {
        if rest.first() != Some(&SQL_QUOTE) {
            // 非引号字段
            match memchr(FIELD_DELIMITER, rest) {
                Some(i) => {
                    fields.push(rest[..i].to_vec());
                    rest = &rest[i + 1..];
                    continue 'fields;
                }
                None => {
                    fields.push(rest.to_vec());
                    break 'fields;
                }
            }
        }

        // 引号字段
        rest = &rest[1..];
        let mut field = Vec::new();
        loop {
            let Some(i) = memchr(SQL_QUOTE, rest) else {
                // 引号未闭合，读到行块结束
                field.extend_from_slice(rest);
                fields.push(field);
                break 'fields;
            };

            field.extend_from_slice(&rest[..i]);
            rest = &rest[i + 1..];
            match rest.first() {
                Some(&SQL_QUOTE) => {
                    field.push(SQL_QUOTE);
                    rest = &rest[1..];
                }
                Some(&FIELD_DELIMITER) => {
                    fields.push(field);
                    rest = &rest[1..];
                    continue 'fields;
                }
                None => {
                    fields.push(field);
                    break 'fields;
                }
                Some(_) => field.push(SQL_QUOTE),
            }
        }
    }

    Ok(fields)
}

/// 把一个行块读成一行
///
/// 行块开头的 `(` 是行元组的语法而不是数据，在读取字段前去掉，
/// 这样首字段是引号字符串时也能按引号规则读取。只有 `(` 的行块得到一个空字段。
/// 字段中间出现的 `(` 一律按数据保留。
pub(crate) fn read_row(chunk: &[u8], index: usize) -> Result<Row, ConvertError> {
    let fields = match chunk.strip_prefix(&[OPEN_PAREN]) {
        Some(body) if body.strip_suffix(b"\r").unwrap_or(body).is_empty() => vec![Vec::new()],
        Some(body) => read_chunk_fields(body, index)?,
        None => read_chunk_fields(chunk, index)?,
    };
    Ok(Row::from(fields))
}

/// 把 value-list 解码为行
///
/// 这是主要的解析函数。只应在通过 [`values_sanity_check`](crate::tools::values_sanity_check)
/// 的 value-list 上调用。
///
/// # 参数
///
/// * `values` - [`extract_values`] 返回的 value-list
///
/// # 返回
///
/// * `Ok(Vec<Row>)` - 每个行块对应一行，顺序与输入一致
/// * `Err(ConvertError)` - 任一行块无法读取时整体失败，不返回部分结果
///
/// # 示例
///
/// ```
/// use mysqldump_to_csv::parser::parse_value_list;
///
/// let rows = parse_value_list(b"(1,'foo'),(2,'bar');").unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].to_strings(), vec!["1", "foo"]);
/// assert_eq!(rows[1].to_strings(), vec!["2", "bar"]);
/// ```
pub fn parse_value_list(values: &[u8]) -> Result<Vec<Row>, ConvertError> {
    let chunks = split_row_chunks(values);
    let mut rows = Vec::with_capacity(chunks.len());

    for (index, chunk) in chunks.into_iter().enumerate() {
        rows.push(read_row(chunk, index)?);
    }

    Ok(rows)
}
