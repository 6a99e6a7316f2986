//! 安全な登録ライフサイクル
//!
//! admin serverへの登録は非本質的な副作用であり、到達不能な
//! ダッシュボードがホストプロセスを落とすことがあってはならない。
//! このライフサイクルは登録をデタッチされたバックグラウンドタスクとして
//! 起動し、結果を完了チャネル経由で受け取って自前のログに流す。
//! 失敗は警告、成功は情報ログ（いずれもダッシュボードURL付き）。

use crate::admin::Registrar;
use crate::shutdown::ShutdownController;
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tracing::{debug, info, warn};

/// 登録試行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// 登録成功（admin serverが割り当てたインスタンスID）
    Registered(String),
    /// 登録失敗（エラー内容）
    Failed(String),
    /// 完了前にシャットダウンされた
    Cancelled,
}

/// admin server登録のライフサイクル管理
///
/// registrarが束縛されていない場合（admin URL未設定の最小構成）、
/// `start` / `stop` は無害なno-opになる。
pub struct AdminLifecycle {
    registrar: Option<Arc<dyn Registrar>>,
    dashboard_url: String,
    shutdown: ShutdownController,
    outcome: watch::Sender<Option<RegistrationOutcome>>,
}

impl AdminLifecycle {
    /// 新しいライフサイクルを作成
    pub fn new(
        registrar: Option<Arc<dyn Registrar>>,
        dashboard_url: impl Into<String>,
        shutdown: ShutdownController,
    ) -> Self {
        let (outcome, _) = watch::channel(None);
        Self {
            registrar,
            dashboard_url: dashboard_url.into(),
            shutdown,
            outcome,
        }
    }

    /// registrarなしのno-opライフサイクルを作成
    pub fn disabled(shutdown: ShutdownController) -> Self {
        Self::new(None, String::new(), shutdown)
    }

    /// 登録機能が束縛されているか
    pub fn is_enabled(&self) -> bool {
        self.registrar.is_some()
    }

    /// 登録試行の結果を購読する
    pub fn subscribe(&self) -> watch::Receiver<Option<RegistrationOutcome>> {
        self.outcome.subscribe()
    }

    /// 登録をバックグラウンドで開始する
    ///
    /// 即座に戻り、ホストの起動を遅延・失敗させない。登録タスクは
    /// シャットダウンシグナルと競争し、シグナルが先なら中断される。
    pub fn start(&self) {
        let Some(registrar) = self.registrar.clone() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                result = registrar.register() => match result {
                    Ok(id) => RegistrationOutcome::Registered(id),
                    Err(err) => RegistrationOutcome::Failed(err.to_string()),
                },
                _ = shutdown.wait() => RegistrationOutcome::Cancelled,
            };
            let _ = tx.send(outcome);
        });

        // 完了チャネルを自前のログに排出する
        let url = self.dashboard_url.clone();
        let publisher = self.outcome.clone();
        tokio::spawn(async move {
            let outcome = rx.await.unwrap_or(RegistrationOutcome::Cancelled);
            match &outcome {
                RegistrationOutcome::Registered(id) => {
                    info!(url = %url, instance_id = %id, "Registered with admin server");
                }
                RegistrationOutcome::Failed(err) => {
                    warn!(url = %url, error = %err, "Can't connect to admin server");
                }
                RegistrationOutcome::Cancelled => {
                    debug!(url = %url, "Admin registration cancelled before completion");
                }
            }
            publisher.send_replace(Some(outcome));
        });
    }

    /// 登録を解除する
    ///
    /// 失敗しても伝播させず、警告ログに抑制する。registrar未束縛なら
    /// 何もしない。
    pub async fn stop(&self) {
        let Some(registrar) = &self.registrar else {
            return;
        };

        if let Err(err) = registrar.deregister().await {
            warn!(
                url = %self.dashboard_url,
                error = %err,
                "Can't connect to admin server"
            );
        }
    }
}
