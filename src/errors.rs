//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_resultboard_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ResultBoardError {
            $($variant(String),)*
        }

        impl ResultBoardError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ResultBoardError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ResultBoardError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ResultBoardError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ResultBoardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ResultBoardError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_resultboard_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
}

impl ResultBoardError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 非调试构建不输出颜色控制符
    #[cfg(not(debug_assertions))]
    pub fn format_colored(&self) -> String {
        format!("[ERROR] {} {}\n  {}", self.code(), self.error_type(), self.message())
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ResultBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ResultBoardError {}

pub type Result<T> = std::result::Result<T, ResultBoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ResultBoardError::database_config("test").code(), "E001");
        assert_eq!(ResultBoardError::database_operation("test").code(), "E003");
        assert_eq!(ResultBoardError::validation("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ResultBoardError::file_operation("test").error_type(),
            "File Operation Error"
        );
        assert_eq!(
            ResultBoardError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = ResultBoardError::validation("regno is required");
        let formatted = err.format_simple();
        assert_eq!(formatted, "Validation Error: regno is required");
    }

    #[test]
    fn test_format_colored_carries_code_and_message() {
        let formatted = ResultBoardError::file_operation("创建上传目录失败").format_colored();
        assert!(formatted.contains("E004"));
        assert!(formatted.contains("File Operation Error"));
        assert!(formatted.contains("创建上传目录失败"));
    }
}
