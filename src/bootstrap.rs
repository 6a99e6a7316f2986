//! サーバー初期化ロジック
//!
//! セキュリティ設定・アクチュエーターレジストリ・HTTPクライアント・
//! admin server登録ライフサイクルなど、サーバー起動に必要な
//! コンポーネントの初期化を担当する。

use crate::admin::{AdminClient, AdminClientOptions, AdminLifecycle, Registrar};
use crate::security::SecurityProvider;
use crate::shutdown::ShutdownController;
use crate::{actuator, config, AppInfo, AppState};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// サーバー初期化結果
pub struct InitContext {
    /// アプリケーション状態
    pub state: AppState,
    /// admin server登録ライフサイクル
    pub admin: AdminLifecycle,
}

/// サーバー初期化を実行する
pub fn initialize(host: &str, port: u16) -> InitContext {
    info!("actgate v{}", env!("CARGO_PKG_VERSION"));

    let security = SecurityProvider::from_env();
    let actuators = actuator::ActuatorRegistry::standard();
    let shutdown = ShutdownController::default();

    // HTTPクライアント（接続プーリング有効）を作成
    let http_client = reqwest::Client::builder()
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(std::time::Duration::from_secs(60))
        .tcp_keepalive(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client");

    let base_url = config::base_url_override()
        .unwrap_or_else(|| format!("http://{}:{}", local_host(host), port));

    let app = AppInfo {
        name: config::app_name(),
        base_url,
        started_at: Utc::now(),
    };

    let admin = build_admin_lifecycle(&security, &app, &http_client, shutdown.clone());
    if admin.is_enabled() {
        info!("Admin server registration enabled");
    } else {
        info!("Admin server registration disabled (no admin URL configured)");
    }

    let state = AppState {
        security,
        actuators,
        app,
        system: Arc::new(Mutex::new(sysinfo::System::new())),
        shutdown,
    };

    InitContext { state, admin }
}

/// admin server登録ライフサイクルを構築する
///
/// admin URLが未設定ならregistrarは束縛されず、ライフサイクルは
/// no-opになる。URLが不正な場合も登録は無効化される（警告のみ）。
fn build_admin_lifecycle(
    security: &SecurityProvider,
    app: &AppInfo,
    http_client: &reqwest::Client,
    shutdown: ShutdownController,
) -> AdminLifecycle {
    let Some(url) = config::admin_url() else {
        return AdminLifecycle::disabled(shutdown);
    };

    match AdminClientOptions::new(&url, &app.name, &app.base_url) {
        Ok(options) => {
            let options = options.with_credentials(&security.snapshot());
            let registrar: Arc<dyn Registrar> =
                Arc::new(AdminClient::new(options, http_client.clone()));
            AdminLifecycle::new(Some(registrar), url, shutdown)
        }
        Err(err) => {
            warn!(url = %url, error = %err, "Ignoring invalid admin server URL");
            AdminLifecycle::disabled(shutdown)
        }
    }
}

/// ワイルドカードバインドをループバックに読み替える
///
/// `0.0.0.0` や `::` のままではコールバックURLとして意味をなさない。
fn local_host(host: &str) -> String {
    match host {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1".to_string(),
        other => other.to_string(),
    }
}
