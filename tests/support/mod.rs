//! テスト用ヘルパー

use actgate::actuator::ActuatorRegistry;
use actgate::security::{ActuatorSecurityOptions, SecurityProvider};
use actgate::shutdown::ShutdownController;
use actgate::{api, AppInfo, AppState};
use axum::Router;
use base64::Engine as _;
use chrono::Utc;
use std::sync::{Arc, Mutex};

/// テスト用のAppStateを作成する
#[allow(dead_code)]
pub fn test_state(options: ActuatorSecurityOptions) -> AppState {
    AppState {
        security: SecurityProvider::new(options),
        actuators: ActuatorRegistry::standard(),
        app: AppInfo {
            name: "actgate-test".to_string(),
            base_url: "http://127.0.0.1:8080".to_string(),
            started_at: Utc::now(),
        },
        system: Arc::new(Mutex::new(sysinfo::System::new())),
        shutdown: ShutdownController::default(),
    }
}

/// テスト用のアプリケーションルーターを作成する
#[allow(dead_code)]
pub fn test_app(options: ActuatorSecurityOptions) -> Router {
    api::create_app(test_state(options))
}

/// 資格情報が設定されたデフォルトのセキュリティオプション
#[allow(dead_code)]
pub fn secured_options(username: &str, password: &str) -> ActuatorSecurityOptions {
    ActuatorSecurityOptions {
        username: username.to_string(),
        password: password.to_string(),
        enabled: true,
    }
}

/// `Authorization: Basic` ヘッダー値を組み立てる
#[allow(dead_code)]
pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}
