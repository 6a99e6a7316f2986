//! アクチュエーターエンドポイント
//!
//! `/actuator/*` 配下の管理エンドポイント群と、マウント済み
//! エンドポイントIDのレジストリ。レジストリは認可ポリシーから
//! リクエストごとに参照されるため、ここに追加したエンドポイントは
//! 自動的に保護対象になる。

use crate::AppState;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::sync::Arc;

/// healthエンドポイント
pub mod health;

/// infoエンドポイント
pub mod info;

/// envエンドポイント
pub mod env;

/// metricsエンドポイント（Prometheus形式）
pub mod metrics;

/// マウントされる1つのアクチュエーターエンドポイント
pub struct ActuatorEndpoint {
    /// エンドポイントID（パスは `/actuator/{id}`）
    pub id: &'static str,
    routes: MethodRouter<AppState>,
}

impl ActuatorEndpoint {
    /// 新しいエンドポイント定義を作成
    pub fn new(id: &'static str, routes: MethodRouter<AppState>) -> Self {
        Self { id, routes }
    }
}

/// マウント済みアクチュエーターのレジストリ
#[derive(Clone)]
pub struct ActuatorRegistry {
    endpoints: Arc<Vec<ActuatorEndpoint>>,
}

impl ActuatorRegistry {
    /// 指定したエンドポイント群からレジストリを作成
    pub fn new(endpoints: Vec<ActuatorEndpoint>) -> Self {
        Self {
            endpoints: Arc::new(endpoints),
        }
    }

    /// 標準エンドポイント一式（health / info / env / metrics）
    pub fn standard() -> Self {
        Self::new(vec![
            ActuatorEndpoint::new("health", get(health::health)),
            ActuatorEndpoint::new("info", get(info::info)),
            ActuatorEndpoint::new("env", get(env::env)),
            ActuatorEndpoint::new("metrics", get(metrics::metrics)),
        ])
    }

    /// 登録済みエンドポイントIDの一覧
    pub fn ids(&self) -> Vec<&'static str> {
        self.endpoints.iter().map(|ep| ep.id).collect()
    }

    /// `/actuator` 配下にネストするルーターを構築
    pub fn router(&self) -> Router<AppState> {
        self.endpoints
            .iter()
            .fold(Router::new(), |router, endpoint| {
                router.route(&format!("/{}", endpoint.id), endpoint.routes.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_ids() {
        let registry = ActuatorRegistry::standard();
        assert_eq!(registry.ids(), vec!["health", "info", "env", "metrics"]);
    }

    #[test]
    fn test_registry_is_cheap_to_clone() {
        let registry = ActuatorRegistry::standard();
        let clone = registry.clone();
        assert_eq!(registry.ids(), clone.ids());
    }
}
