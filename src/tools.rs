use crate::parser::constants::{INSERT_PREFIX, OPEN_PAREN};

/// 判断一行是否为 INSERT 语句的起始行。
///
/// 判断标准：行首恰好是 `INSERT INTO`，区分大小写，不容忍前导空白。
#[inline(always)]
pub fn is_insert_line(line: &[u8]) -> bool {
    line.starts_with(INSERT_PREFIX)
}

///
/// 对提取出的 value-list 做最基本的检查。
///
/// 判断标准
/// 1. value-list 非空。
/// 2. 第一个字节是 `(`。
///
/// 不满足时该行被静默跳过，这不是错误。
#[inline]
pub fn values_sanity_check(values: &[u8]) -> bool {
    values.first() == Some(&OPEN_PAREN)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod insert_line_tests {
        use super::*;

        #[test]
        fn test_valid_insert_lines() {
            let valid_cases: &[&[u8]] = &[
                b"INSERT INTO `t` VALUES (1,'foo');",
                b"INSERT INTO `users` VALUES (1,'alice'),(2,'bob');",
                b"INSERT INTO",
                b"INSERT INTOX",
            ];
            for line in valid_cases {
                assert!(is_insert_line(line), "Failed for: {:?}", line);
            }
        }

        #[test]
        fn test_wrong_case() {
            let invalid_cases: &[&[u8]] = &[
                b"insert into `t` VALUES (1);",
                b"Insert Into `t` VALUES (1);",
                b"INSERT into `t` VALUES (1);",
            ];
            for line in invalid_cases {
                assert!(!is_insert_line(line), "Should fail for: {:?}", line);
            }
        }

        #[test]
        fn test_leading_whitespace() {
            assert!(!is_insert_line(b" INSERT INTO `t` VALUES (1);"));
            assert!(!is_insert_line(b"\tINSERT INTO `t` VALUES (1);"));
        }

        #[test]
        fn test_other_statements() {
            let invalid_cases: &[&[u8]] = &[
                b"",
                b"INSERT",
                b"INSERT  INTO `t` VALUES (1);",
                b"REPLACE INTO `t` VALUES (1);",
                b"-- Dumping data for table `t`",
                b"CREATE TABLE `t` (",
                b"/*!40000 ALTER TABLE `t` DISABLE KEYS */;",
                b"LOCK TABLES `t` WRITE;",
            ];
            for line in invalid_cases {
                assert!(!is_insert_line(line), "Should fail for: {:?}", line);
            }
        }
    }

    mod sanity_check_tests {
        use super::*;

        #[test]
        fn test_accepts_tuple_lists() {
            assert!(values_sanity_check(b"(1,'a'),(2,'b');"));
            assert!(values_sanity_check(b"();"));
            assert!(values_sanity_check(b"("));
        }

        #[test]
        fn test_rejects_empty() {
            assert!(!values_sanity_check(b""));
        }

        #[test]
        fn test_rejects_non_paren_start() {
            let invalid_cases: &[&[u8]] = &[b" (1);", b"1,2;", b"SELECT 1;", b")"];
            for values in invalid_cases {
                assert!(!values_sanity_check(values), "Should fail for: {:?}", values);
            }
        }
    }
}
