//! infoエンドポイント
//!
//! アプリケーション名・バージョン・起動時刻など。常に認証なしで公開される。

use crate::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct InfoResponse {
    app: AppDetail,
    pid: u32,
    started_at: DateTime<Utc>,
    uptime_secs: i64,
}

#[derive(Debug, Serialize)]
struct AppDetail {
    name: String,
    version: &'static str,
}

/// GET /actuator/info
pub async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let started_at = state.app.started_at;
    let response = InfoResponse {
        app: AppDetail {
            name: state.app.name.clone(),
            version: env!("CARGO_PKG_VERSION"),
        },
        pid: std::process::id(),
        started_at,
        uptime_secs: (Utc::now() - started_at).num_seconds(),
    };

    Json(serde_json::to_value(response).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::test_state;

    #[tokio::test]
    async fn test_info_reports_name_and_version() {
        let Json(body) = info(State(test_state())).await;

        assert_eq!(body["app"]["name"], "actgate-test");
        assert_eq!(body["app"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime_secs"].as_i64().unwrap_or(-1) >= 0);
        assert_eq!(body["pid"].as_u64(), Some(std::process::id() as u64));
    }
}
