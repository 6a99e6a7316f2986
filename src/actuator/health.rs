//! healthエンドポイント
//!
//! 稼働状況とメモリ詳細を返す。常に認証なしで公開される。

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    details: HealthDetails,
}

#[derive(Debug, Serialize)]
struct HealthDetails {
    memory: MemoryDetail,
}

#[derive(Debug, Serialize)]
struct MemoryDetail {
    total_bytes: u64,
    used_bytes: u64,
    available_bytes: u64,
}

/// GET /actuator/health
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let memory = {
        let mut system = state.system.lock().expect("system info lock poisoned");
        system.refresh_memory();
        MemoryDetail {
            total_bytes: system.total_memory(),
            used_bytes: system.used_memory(),
            available_bytes: system.available_memory(),
        }
    };

    let response = HealthResponse {
        status: "UP",
        details: HealthDetails { memory },
    };

    Json(serde_json::to_value(response).unwrap_or_default())
}
