//! admin serverクライアント設定
//!
//! ダッシュボードURL・アプリケーション名・コールバックURLと、登録時に
//! 送信するメタデータ。アクチュエーター認証の資格情報は固定キー
//! `user.name` / `user.password` でメタデータに注入される（既存キーは
//! 上書きしない）。

use crate::error::{GateError, GateResult};
use crate::security::ActuatorSecurityOptions;
use std::collections::BTreeMap;

/// メタデータ内のユーザー名キー
pub const METADATA_USER_NAME: &str = "user.name";

/// メタデータ内のパスワードキー
pub const METADATA_USER_PASSWORD: &str = "user.password";

/// admin serverクライアント設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClientOptions {
    /// admin serverのベースURL
    pub url: String,
    /// 登録時に名乗るアプリケーション名
    pub app_name: String,
    /// このプロセスの外部到達可能なベースURL
    pub base_url: String,
    /// 登録時に送信するメタデータ
    pub metadata: BTreeMap<String, String>,
}

impl AdminClientOptions {
    /// 新しい設定を作成する
    ///
    /// `url` はhttp(s)スキームでなければならない。
    pub fn new(
        url: impl Into<String>,
        app_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> GateResult<Self> {
        let url = url.into();
        let url = url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(GateError::Config(format!(
                "admin server URL must be http(s): {url}"
            )));
        }

        Ok(Self {
            url,
            app_name: app_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            metadata: BTreeMap::new(),
        })
    }

    /// アクチュエーター認証の資格情報をメタデータに注入する
    ///
    /// 既にキーが存在する場合は何もしない。
    pub fn with_credentials(mut self, security: &ActuatorSecurityOptions) -> Self {
        self.metadata
            .entry(METADATA_USER_NAME.to_string())
            .or_insert_with(|| security.username.clone());
        self.metadata
            .entry(METADATA_USER_PASSWORD.to_string())
            .or_insert_with(|| security.password.clone());
        self
    }

    /// アクチュエーターのベースURL
    pub fn management_url(&self) -> String {
        format!("{}/actuator", self.base_url)
    }

    /// healthエンドポイントのURL
    pub fn health_url(&self) -> String {
        format!("{}/actuator/health", self.base_url)
    }

    /// サービスルートのURL
    pub fn service_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
