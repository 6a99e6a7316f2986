//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, plus typed getters for the
//! actuator-security and admin-client settings.

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns the default if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 真偽値として解釈する（`1/true/yes/on` を真とみなす）
fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// アクチュエーター認証用ユーザー名を取得
///
/// 環境変数 `ACTGATE_ADMIN_METADATA_USER_NAME`（旧: `ADMIN_METADATA_USER_NAME`）。
/// 未設定の場合は空文字列。
pub fn security_username() -> String {
    get_env_with_fallback_or("ACTGATE_ADMIN_METADATA_USER_NAME", "ADMIN_METADATA_USER_NAME", "")
}

/// アクチュエーター認証用パスワードを取得
///
/// 環境変数 `ACTGATE_ADMIN_METADATA_USER_PASSWORD`（旧: `ADMIN_METADATA_USER_PASSWORD`）。
pub fn security_password() -> String {
    get_env_with_fallback_or(
        "ACTGATE_ADMIN_METADATA_USER_PASSWORD",
        "ADMIN_METADATA_USER_PASSWORD",
        "",
    )
}

/// アクチュエーターセキュリティの有効/無効を取得
///
/// 環境変数 `ACTGATE_ACTUATOR_SECURITY`（旧: `ACTUATOR_SECURITY`）。
/// 明示的に偽を設定しない限り有効（デフォルト: true）。
pub fn actuator_security_enabled() -> bool {
    get_env_with_fallback("ACTGATE_ACTUATOR_SECURITY", "ACTUATOR_SECURITY")
        .map(|value| parse_bool(&value))
        .unwrap_or(true)
}

/// admin serverのURLを取得
///
/// 環境変数 `ACTGATE_ADMIN_URL`（旧: `ADMIN_URL`）。
/// 未設定の場合は登録機能そのものが無効になる。
pub fn admin_url() -> Option<String> {
    get_env_with_fallback("ACTGATE_ADMIN_URL", "ADMIN_URL")
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// アプリケーション名を取得
///
/// 環境変数 `ACTGATE_APP_NAME`（旧: `APP_NAME`）、デフォルト: `actgate`。
pub fn app_name() -> String {
    get_env_with_fallback_or("ACTGATE_APP_NAME", "APP_NAME", "actgate")
}

/// 外部から到達可能なベースURLの明示指定を取得
///
/// 環境変数 `ACTGATE_BASE_URL`（旧: `BASE_URL`）。
/// 未設定の場合はバインドアドレスから導出される。
pub fn base_url_override() -> Option<String> {
    get_env_with_fallback("ACTGATE_BASE_URL", "BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
}
