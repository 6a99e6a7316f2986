//! Basic認証ミドルウェア
//!
//! `Authorization: Basic` ヘッダーの資格情報を現在のセキュリティ設定と
//! 照合し、一致した場合のみ `actuators` スコープのクレームをリクエストに
//! 付与する。不一致・ヘッダーなしでも拒否はしない（拒否の判断は認可
//! ポリシー側の責務）。
//!
//! 資格情報は平文比較で、TLSなしの接続でも受け付ける（意図的な緩和）。

use crate::security::{Claims, SCOPE_ACTUATORS};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::Engine as _;

/// Basic認証ヘッダーから取り出した資格情報
#[derive(Debug, PartialEq, Eq)]
struct BasicCredentials {
    username: String,
    password: String,
}

/// Basic認証ミドルウェア
///
/// 資格情報がスナップショットと一致した場合、`actuators` スコープの
/// クレームをrequest extensionに格納して次へ進む。
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(credentials) = basic_credentials(request.headers()) {
        let options = state.security.snapshot();
        if credentials.username == options.username && credentials.password == options.password {
            request
                .extensions_mut()
                .insert(Claims::with_scope(SCOPE_ACTUATORS));
        }
    }

    next.run(request).await
}

/// `Authorization: Basic base64(user:pass)` をデコードする
///
/// 形式不正（Basic以外、base64不正、`:` 区切りなし）はNoneを返すだけで
/// エラーにはしない。
fn basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;
    let encoded = header.strip_prefix("Basic ")?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
