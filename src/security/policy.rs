//! アクチュエーター認可ポリシー
//!
//! リクエストごとに評価されるルール:
//!
//! 1. セキュリティが無効なら無条件で許可
//! 2. 登録済みアクチュエーターのうち `health` / `info` 以外のパスに
//!    一致するリクエストは `actuators` スコープを要求
//! 3. スコープを欠くリクエストは `401 Unauthorized` + Basicチャレンジ
//!
//! 未登録の `/actuator/...` パスはポリシーを素通りし、ルーティング側で
//! 404になる。

use crate::security::{Claims, SCOPE_ACTUATORS};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// 認証なしで常に公開されるアクチュエーター
const PUBLIC_ENDPOINTS: [&str; 2] = ["health", "info"];

/// アクチュエーター認可ミドルウェア
///
/// アクチュエータールーター全体に適用される（個別ルートではなく
/// ホスト全域で保護する）。
pub async fn authorize_actuators(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let options = state.security.snapshot();
    if !options.enabled {
        return Ok(next.run(request).await);
    }

    let path = request.uri().path();
    let is_guarded = state
        .actuators
        .ids()
        .iter()
        .copied()
        .filter(|id| !PUBLIC_ENDPOINTS.contains(id))
        .map(|id| format!("/actuator/{id}"))
        .any(|prefix| starts_with_segments(path, &prefix));

    if is_guarded {
        let has_scope = request
            .extensions()
            .get::<Claims>()
            .map(|claims| claims.has_scope(SCOPE_ACTUATORS))
            .unwrap_or(false);

        if !has_scope {
            debug!(path = %path, "Denying actuator request without scope");
            return Err(unauthorized());
        }
    }

    Ok(next.run(request).await)
}

/// パスセグメント単位の前方一致
///
/// `/actuator/env` は `/actuator/env` と `/actuator/env/x` に一致し、
/// `/actuator/envx` には一致しない。
pub(crate) fn starts_with_segments(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"actuator\"")],
        "Unauthorized",
    )
        .into_response()
}
