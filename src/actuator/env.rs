//! envエンドポイント
//!
//! プロセスの環境変数を返す。秘密情報らしいキーの値はマスクされる。
//! 認可ポリシーにより `actuators` スコープが必要。

use axum::Json;
use std::collections::BTreeMap;

/// マスク対象と判定するキーの部分文字列（小文字比較）
const SECRET_MARKERS: [&str; 4] = ["password", "secret", "token", "key"];

/// マスク値
const MASKED: &str = "******";

/// GET /actuator/env
pub async fn env() -> Json<BTreeMap<String, String>> {
    Json(masked_environment(std::env::vars()))
}

/// 環境変数の一覧をマスクして返す
fn masked_environment(vars: impl Iterator<Item = (String, String)>) -> BTreeMap<String, String> {
    vars.map(|(name, value)| {
        if is_secret_key(&name) {
            (name, MASKED.to_string())
        } else {
            (name, value)
        }
    })
    .collect()
}

fn is_secret_key(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SECRET_MARKERS.iter().any(|marker| lowered.contains(marker))
}
