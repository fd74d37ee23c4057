//! 邮箱地址验证模块
//!
//! 轻量校验，不追求完整的 RFC 5322 语义

/// 邮箱验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum EmailValidationError {
    Empty,
    MissingAt,
    BadLocalPart,
    BadDomain,
}

impl std::fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Email cannot be empty"),
            Self::MissingAt => write!(f, "Email must contain a single @"),
            Self::BadLocalPart => write!(f, "Invalid characters before the @"),
            Self::BadDomain => write!(f, "Invalid domain after the @"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// 验证邮箱地址
///
/// 检查项目：
/// 1. 非空，无空白字符
/// 2. 恰好一个 @，两侧非空
/// 3. 域名含点号，且点号不在首尾
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(EmailValidationError::Empty);
    }

    if email.chars().any(char::is_whitespace) {
        return Err(EmailValidationError::BadLocalPart);
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(EmailValidationError::MissingAt),
    };

    if local.is_empty() {
        return Err(EmailValidationError::BadLocalPart);
    }

    if domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("..")
    {
        return Err(EmailValidationError::BadDomain);
    }

    Ok(())
}

/// 快捷判断，供表单实时校验使用
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
        assert!(validate_email("hyphen-ok@ex-ample.io").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(EmailValidationError::Empty));
        assert_eq!(validate_email("   "), Err(EmailValidationError::Empty));
    }

    #[test]
    fn test_missing_or_repeated_at() {
        assert_eq!(
            validate_email("no-at.example.com"),
            Err(EmailValidationError::MissingAt)
        );
        assert_eq!(
            validate_email("two@@example.com"),
            Err(EmailValidationError::MissingAt)
        );
    }

    #[test]
    fn test_bad_local_part() {
        assert_eq!(
            validate_email("@example.com"),
            Err(EmailValidationError::BadLocalPart)
        );
        assert_eq!(
            validate_email("with space@example.com"),
            Err(EmailValidationError::BadLocalPart)
        );
    }

    #[test]
    fn test_bad_domain() {
        assert_eq!(validate_email("user@"), Err(EmailValidationError::BadDomain));
        assert_eq!(
            validate_email("user@nodot"),
            Err(EmailValidationError::BadDomain)
        );
        assert_eq!(
            validate_email("user@.example.com"),
            Err(EmailValidationError::BadDomain)
        );
        assert_eq!(
            validate_email("user@example..com"),
            Err(EmailValidationError::BadDomain)
        );
        assert_eq!(
            validate_email("user@example.com."),
            Err(EmailValidationError::BadDomain)
        );
    }

    #[test]
    fn test_is_valid_email_shortcut() {
        assert!(is_valid_email("bob@example.com"));
        assert!(!is_valid_email("bob"));
    }
}
