//! metricsエンドポイント（Prometheus形式）
//!
//! HTTPリクエストカウンターとプロセス稼働時間をテキスト形式で公開する。
//! 認可ポリシーにより `actuators` スコープが必要。

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static HTTP_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new(
            "actgate_http_requests_total",
            "Total number of HTTP requests handled",
        ),
        &["path", "status"],
    )
    .expect("valid counter definition");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("http request counter registered once");
    counter
});

static UPTIME_SECONDS: Lazy<IntGauge> = Lazy::new(|| {
    let gauge = IntGauge::new("actgate_uptime_seconds", "Process uptime in seconds")
        .expect("valid gauge definition");
    REGISTRY
        .register(Box::new(gauge.clone()))
        .expect("uptime gauge registered once");
    gauge
});

/// HTTPリクエストをパス・ステータス別に計数するミドルウェア
pub async fn track_requests(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    HTTP_REQUESTS
        .with_label_values(&[path.as_str(), response.status().as_str()])
        .inc();

    response
}

/// GET /actuator/metrics
pub async fn metrics(State(state): State<AppState>) -> Response {
    // 一度も計数されていなくてもメトリクスファミリーが現れるよう登録を確定させる
    Lazy::force(&HTTP_REQUESTS);
    UPTIME_SECONDS.set((Utc::now() - state.app.started_at).num_seconds());

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", err);
        return (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response();
    }

    ([(header::CONTENT_TYPE, encoder.format_type())], buffer).into_response()
}
