//! アクチュエーター認可のエンドツーエンドテスト
//!
//! アプリケーション全体（認証・認可ミドルウェア込み）に対して
//! リクエストを流し、公開/保護の振り分けを検証する。

mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use support::{basic_auth, secured_options, test_app, test_state};
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn health_and_info_are_public_when_security_is_enabled() {
    for uri in ["/actuator/health", "/actuator/info"] {
        let app = test_app(secured_options("admin", "secret"));
        let response = app.oneshot(get(uri)).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    }
}

#[tokio::test]
async fn protected_actuators_are_denied_without_credentials() {
    for uri in ["/actuator/env", "/actuator/metrics"] {
        let app = test_app(secured_options("admin", "secret"));
        let response = app.oneshot(get(uri)).await.expect("response");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri: {uri}");
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Basic realm=\"actuator\""),
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn matching_credentials_grant_access_to_protected_actuators() {
    for uri in ["/actuator/env", "/actuator/metrics"] {
        let app = test_app(secured_options("admin", "secret"));
        let response = app
            .oneshot(get_with_auth(uri, &basic_auth("admin", "secret")))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    }
}

#[tokio::test]
async fn mismatched_credentials_are_denied() {
    let cases = [
        basic_auth("admin", "wrong"),
        basic_auth("intruder", "secret"),
        basic_auth("", ""),
        "Bearer some-token".to_string(),
    ];

    for authorization in &cases {
        let app = test_app(secured_options("admin", "secret"));
        let response = app
            .oneshot(get_with_auth("/actuator/env", authorization))
            .await
            .expect("response");

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "authorization: {authorization}"
        );
    }
}

#[tokio::test]
async fn disabled_security_allows_everything_without_credentials() {
    let mut options = secured_options("admin", "secret");
    options.enabled = false;

    for uri in [
        "/actuator/health",
        "/actuator/info",
        "/actuator/env",
        "/actuator/metrics",
    ] {
        let app = test_app(options.clone());
        let response = app.oneshot(get(uri)).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    }
}

#[tokio::test]
async fn security_toggle_applies_without_restart() {
    let state = test_state(secured_options("admin", "secret"));
    let app = actgate::api::create_app(state.clone());

    let response = app
        .clone()
        .oneshot(get("/actuator/env"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 実行時に無効化すると、同じアプリインスタンスで即座に通るようになる
    let mut disabled = state.security.snapshot();
    disabled.enabled = false;
    state.security.replace(disabled);

    let response = app.oneshot(get("/actuator/env")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn guarded_prefix_matches_whole_segments_only() {
    // `/actuator/envx` は登録されていないので保護対象にならず404
    let app = test_app(secured_options("admin", "secret"));
    let response = app.oneshot(get("/actuator/envx")).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // `/actuator/env/sub` は保護プレフィックスに一致するので認証が要る
    let app = test_app(secured_options("admin", "secret"));
    let response = app
        .oneshot(get("/actuator/env/sub"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 資格情報があればポリシーは通すが、ルートがないので404
    let app = test_app(secured_options("admin", "secret"));
    let response = app
        .oneshot(get_with_auth("/actuator/env/sub", &basic_auth("admin", "secret")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unregistered_actuator_paths_fall_through_to_not_found() {
    let app = test_app(secured_options("admin", "secret"));
    let response = app
        .oneshot(get("/actuator/loggers"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
