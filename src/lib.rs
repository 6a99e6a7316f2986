//! actgate server
//!
//! アクチュエーターエンドポイントをBasic認証で保護し、
//! 管理ダッシュボード（admin server）へのセルフ登録を行う

#![warn(missing_docs)]

/// アクチュエーターエンドポイント（health / info / env / metrics）
pub mod actuator;

/// admin serverクライアント（登録・登録解除）
pub mod admin;

/// HTTPアプリケーション組み立て
pub mod api;

/// サーバー初期化ロジック
pub mod bootstrap;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 認証・認可機能
pub mod security;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// Cooperative shutdown controller
pub mod shutdown;

#[cfg(test)]
pub(crate) mod test_util;

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// 実行中アプリケーションの自己記述情報
#[derive(Debug, Clone)]
pub struct AppInfo {
    /// アプリケーション名
    pub name: String,
    /// 外部から到達可能なベースURL
    pub base_url: String,
    /// プロセス起動時刻
    pub started_at: DateTime<Utc>,
}

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// セキュリティオプションのスナップショット供給元
    pub security: security::SecurityProvider,
    /// マウント済みアクチュエーターのレジストリ
    pub actuators: actuator::ActuatorRegistry,
    /// アプリケーション情報
    pub app: AppInfo,
    /// システム情報コレクター（healthエンドポイント用）
    pub system: Arc<Mutex<sysinfo::System>>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}
