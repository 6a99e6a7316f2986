//! admin serverクライアント（登録・登録解除）
//!
//! 中央監視ダッシュボード（Spring Boot Admin互換の `/instances` REST API）
//! への自己登録。登録はベストエフォートのバックグラウンド処理で、
//! 失敗してもホストの起動を妨げない（[`lifecycle::AdminLifecycle`] を参照）。

use crate::error::GateResult;
use async_trait::async_trait;

/// クライアント実装
pub mod client;

/// 安全な登録ライフサイクル
pub mod lifecycle;

/// クライアント設定
pub mod options;

pub use client::AdminClient;
pub use lifecycle::{AdminLifecycle, RegistrationOutcome};
pub use options::AdminClientOptions;

/// admin serverへの登録を担う能力
///
/// 実装が束縛されない（admin URL未設定）構成では、ライフサイクルは
/// 恒久的なno-opとして動作する。
#[async_trait]
pub trait Registrar: Send + Sync {
    /// 登録を実行し、admin serverが割り当てたインスタンスIDを返す
    async fn register(&self) -> GateResult<String>;

    /// 登録を解除する（未登録なら何もしない）
    async fn deregister(&self) -> GateResult<()>;
}
