//! admin serverクライアント実装
//!
//! `POST {url}/instances` で登録し、返却されたインスタンスIDを保持、
//! `DELETE {url}/instances/{id}` で登録解除する。タイムアウトは共有
//! HTTPクライアントの設定をそのまま引き継ぐ。

use crate::admin::{AdminClientOptions, Registrar};
use crate::error::{GateError, GateResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// 登録リクエスト
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Registration<'a> {
    name: &'a str,
    management_url: String,
    health_url: String,
    service_url: String,
    metadata: &'a BTreeMap<String, String>,
}

/// 登録レスポンス
#[derive(Debug, Deserialize)]
struct RegistrationReply {
    id: String,
}

/// admin serverクライアント
pub struct AdminClient {
    options: AdminClientOptions,
    client: reqwest::Client,
    instance_id: RwLock<Option<String>>,
}

impl AdminClient {
    /// 新しいクライアントを作成
    pub fn new(options: AdminClientOptions, client: reqwest::Client) -> Self {
        Self {
            options,
            client,
            instance_id: RwLock::new(None),
        }
    }

    /// 直近の登録で割り当てられたインスタンスID
    pub async fn instance_id(&self) -> Option<String> {
        self.instance_id.read().await.clone()
    }
}

#[async_trait]
impl Registrar for AdminClient {
    async fn register(&self) -> GateResult<String> {
        let payload = Registration {
            name: &self.options.app_name,
            management_url: self.options.management_url(),
            health_url: self.options.health_url(),
            service_url: self.options.service_url(),
            metadata: &self.options.metadata,
        };

        let response = self
            .client
            .post(format!("{}/instances", self.options.url))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GateError::Registration(format!(
                "admin server returned {}",
                response.status()
            )));
        }

        let reply: RegistrationReply = response.json().await?;
        *self.instance_id.write().await = Some(reply.id.clone());

        Ok(reply.id)
    }

    async fn deregister(&self) -> GateResult<()> {
        let Some(id) = self.instance_id.read().await.clone() else {
            // 登録が成立していなければ解除するものもない
            debug!(url = %self.options.url, "No admin registration to remove");
            return Ok(());
        };

        let response = self
            .client
            .delete(format!("{}/instances/{}", self.options.url, id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GateError::Registration(format!(
                "admin server returned {}",
                response.status()
            )));
        }

        *self.instance_id.write().await = None;
        Ok(())
    }
}
