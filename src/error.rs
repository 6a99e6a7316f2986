//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// actgate error type
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Admin server registration error
    #[error("Registration failed: {0}")]
    Registration(String),
}

/// Result type alias
pub type GateResult<T> = Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = GateError::Config("missing admin url".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing admin url");
    }

    #[test]
    fn test_registration_error_display() {
        let error = GateError::Registration("admin server returned 503".to_string());
        assert_eq!(
            error.to_string(),
            "Registration failed: admin server returned 503"
        );
    }

    #[test]
    fn test_http_error_from_conversion() {
        // 不正なURLでreqwestエラーを発生させる
        let request_error = reqwest::Client::new().get("not a url").build().unwrap_err();
        let error: GateError = request_error.into();
        assert!(matches!(error, GateError::Http(_)));
    }
}
