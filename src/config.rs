//! 转换器配置模块
//!
//! 目前只有行缓冲区上限一项，其余行为由输入格式固定。

use crate::error::ConvertError;
use crate::parser::constants::DEFAULT_MAX_LINE_SIZE;

/// 转换器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// 单行最大字节数（含换行符），超出时转换提前结束
    pub max_line_size: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_line_size: DEFAULT_MAX_LINE_SIZE,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置单行最大字节数
    pub fn with_max_line_size(mut self, max_line_size: usize) -> Self {
        self.max_line_size = max_line_size;
        self
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.max_line_size == 0 {
            return Err(ConvertError::InvalidConfig(
                "max_line_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_mebibyte() {
        let config = ConverterConfig::default();
        assert_eq!(config.max_line_size, 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_limit() {
        let config = ConverterConfig::new().with_max_line_size(64);
        assert_eq!(config.max_line_size, 64);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = ConverterConfig::new().with_max_line_size(0).validate().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfig(_)));
    }
}
