//! 認証・認可機能
//!
//! アクチュエーターエンドポイント向けのBasic認証とスコープベースの認可

use std::sync::{Arc, RwLock};

/// Basic認証ミドルウェア
pub mod basic;

/// アクチュエーター認可ポリシー
pub mod policy;

/// 保護されたアクチュエーターへのアクセスに必要なスコープ
pub const SCOPE_ACTUATORS: &str = "actuators";

/// アクチュエーターセキュリティ設定
///
/// プロセス起動時に環境から読み込まれ、`SecurityProvider` 経由で
/// リクエストごとにスナップショットとして参照される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuatorSecurityOptions {
    /// Basic認証のユーザー名
    pub username: String,
    /// Basic認証のパスワード
    pub password: String,
    /// 明示的に無効化しない限り有効
    pub enabled: bool,
}

impl Default for ActuatorSecurityOptions {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            enabled: true,
        }
    }
}

impl ActuatorSecurityOptions {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            username: crate::config::security_username(),
            password: crate::config::security_password(),
            enabled: crate::config::actuator_security_enabled(),
        }
    }
}

/// セキュリティ設定のスナップショット供給元
///
/// リクエスト処理側は毎回 `snapshot()` で現在値を読むため、
/// `replace()` / `reload_from_env()` による実行時の再設定が
/// 再起動なしで反映される。
#[derive(Clone)]
pub struct SecurityProvider {
    inner: Arc<RwLock<ActuatorSecurityOptions>>,
}

impl SecurityProvider {
    /// 指定した設定で供給元を作成
    pub fn new(options: ActuatorSecurityOptions) -> Self {
        Self {
            inner: Arc::new(RwLock::new(options)),
        }
    }

    /// 環境変数から設定を読み込んで供給元を作成
    pub fn from_env() -> Self {
        Self::new(ActuatorSecurityOptions::from_env())
    }

    /// 現在の設定のスナップショットを取得
    pub fn snapshot(&self) -> ActuatorSecurityOptions {
        self.inner
            .read()
            .expect("security options lock poisoned")
            .clone()
    }

    /// 設定を置き換える
    pub fn replace(&self, options: ActuatorSecurityOptions) {
        *self.inner.write().expect("security options lock poisoned") = options;
    }

    /// 環境変数から設定を再読み込みする
    pub fn reload_from_env(&self) {
        self.replace(ActuatorSecurityOptions::from_env());
    }
}

/// 認証済みリクエストに付与されるクレーム
///
/// 有効期間は1リクエスト（request extensionとして保持される）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    scopes: Vec<String>,
}

impl Claims {
    /// 単一スコープを持つクレームを作成
    pub fn with_scope(scope: &str) -> Self {
        Self {
            scopes: vec![scope.to_string()],
        }
    }

    /// 指定スコープを保持しているか
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}
