//! LineReader - 从 Reader 按行读取，行长度有上限
//!
//! 提供了一个迭代器，可以从任何实现了 `Read` trait 的源中逐行读取 dump 内容。

use crate::error::ConvertError;
use crate::parser::constants::DEFAULT_MAX_LINE_SIZE;
use std::{
    io::{BufRead, BufReader, Read},
    mem,
};

/// 带长度上限的按行读取迭代器
///
/// 每次最多读取 `max_line_size` 个字节寻找换行符。缓冲区填满仍未找到换行符时，
/// 产生一次 [`ConvertError::LineTooLong`]，之后迭代结束。
/// 返回的行不包含 `\n` 以及紧挨在它前面的 `\r`。
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    max_line_size: usize,
    line_no: usize,
    finished: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_line_size(reader, DEFAULT_MAX_LINE_SIZE)
    }

    pub fn with_max_line_size(reader: R, max_line_size: usize) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: Vec::new(),
            max_line_size,
            line_no: 0,
            finished: false,
        }
    }

    /// 最近一次读取的行号（从 1 开始，尚未读取时为 0）
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// 读取下一行
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, ConvertError> {
        self.buffer.clear();
        let bytes_read = (&mut self.reader)
            .take(self.max_line_size as u64)
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| ConvertError::Read(e.to_string()))?;

        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        } else if bytes_read == self.max_line_size {
            return Err(ConvertError::LineTooLong {
                line: self.line_no,
                limit: self.max_line_size,
            });
        }

        Ok(Some(mem::take(&mut self.buffer)))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<Vec<u8>, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
