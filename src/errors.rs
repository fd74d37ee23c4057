use std::fmt;

#[derive(Debug, Clone)]
pub enum TermfolioError {
    Config(String),
    ContentLoad(String),
    Validation(String),
    RelayConfig(String),
    MailRelay(String),
    Clipboard(String),
    Terminal(String),
    Serialization(String),
}

impl TermfolioError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TermfolioError::Config(_) => "E001",
            TermfolioError::ContentLoad(_) => "E002",
            TermfolioError::Validation(_) => "E003",
            TermfolioError::RelayConfig(_) => "E004",
            TermfolioError::MailRelay(_) => "E005",
            TermfolioError::Clipboard(_) => "E006",
            TermfolioError::Terminal(_) => "E007",
            TermfolioError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TermfolioError::Config(_) => "Configuration Error",
            TermfolioError::ContentLoad(_) => "Content Load Error",
            TermfolioError::Validation(_) => "Validation Error",
            TermfolioError::RelayConfig(_) => "Relay Configuration Error",
            TermfolioError::MailRelay(_) => "Mail Relay Error",
            TermfolioError::Clipboard(_) => "Clipboard Error",
            TermfolioError::Terminal(_) => "Terminal Error",
            TermfolioError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TermfolioError::Config(msg) => msg,
            TermfolioError::ContentLoad(msg) => msg,
            TermfolioError::Validation(msg) => msg,
            TermfolioError::RelayConfig(msg) => msg,
            TermfolioError::MailRelay(msg) => msg,
            TermfolioError::Clipboard(msg) => msg,
            TermfolioError::Terminal(msg) => msg,
            TermfolioError::Serialization(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TermfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TermfolioError {}

// 便捷的构造函数
impl TermfolioError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        TermfolioError::Config(msg.into())
    }

    pub fn content_load<T: Into<String>>(msg: T) -> Self {
        TermfolioError::ContentLoad(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TermfolioError::Validation(msg.into())
    }

    pub fn relay_config<T: Into<String>>(msg: T) -> Self {
        TermfolioError::RelayConfig(msg.into())
    }

    pub fn mail_relay<T: Into<String>>(msg: T) -> Self {
        TermfolioError::MailRelay(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        TermfolioError::Clipboard(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        TermfolioError::Terminal(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TermfolioError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for TermfolioError {
    fn from(err: std::io::Error) -> Self {
        TermfolioError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for TermfolioError {
    fn from(err: serde_json::Error) -> Self {
        TermfolioError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for TermfolioError {
    fn from(err: toml::de::Error) -> Self {
        TermfolioError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for TermfolioError {
    fn from(err: toml::ser::Error) -> Self {
        TermfolioError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TermfolioError>;
