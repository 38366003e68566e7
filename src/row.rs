/// 一个行元组解码后的字段
///
/// 每个行块都会产生一个新的 `Row`，字段以原始字节保存，
/// 因为 dump 文件里的字符串不保证是合法的 UTF-8。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// 按顺序排列的字段
    pub fields: Vec<Vec<u8>>,
}

impl Row {
    /// 所有字段的文本形式，非法 UTF-8 会被替换
    pub fn to_strings(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect()
    }
}

impl From<Vec<Vec<u8>>> for Row {
    fn from(fields: Vec<Vec<u8>>) -> Self {
        Self { fields }
    }
}

impl<'a> FromIterator<&'a [u8]> for Row {
    fn from_iter<I: IntoIterator<Item = &'a [u8]>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(<[u8]>::to_vec).collect(),
        }
    }
}
