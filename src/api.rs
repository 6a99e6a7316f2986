//! HTTPアプリケーション組み立て
//!
//! アクチュエータールーターに認証・認可・計測のミドルウェアを重ねる。

use crate::{actuator, security, AppState};
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// アプリケーションルーターを構築する
///
/// ミドルウェアは外側から順に: トレース → リクエスト計測 → Basic認証 →
/// アクチュエーター認可。認可はホスト全域に適用されるため、レジストリに
/// 追加されたエンドポイントは個別の指定なしに保護される。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/actuator", state.actuators.router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(actuator::metrics::track_requests))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    security::basic::authenticate,
                ))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    security::policy::authorize_actuators,
                )),
        )
        .with_state(state)
}
