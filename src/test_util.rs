//! ユニットテスト用ヘルパー
//!
//! 環境変数に依存しない固定のAppStateを提供する。

use crate::actuator::ActuatorRegistry;
use crate::security::{ActuatorSecurityOptions, SecurityProvider};
use crate::shutdown::ShutdownController;
use crate::{AppInfo, AppState};
use chrono::Utc;
use std::sync::{Arc, Mutex};

/// テスト用のAppStateを作成する（環境変数は読まない）
pub(crate) fn test_state() -> AppState {
    AppState {
        security: SecurityProvider::new(ActuatorSecurityOptions::default()),
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
