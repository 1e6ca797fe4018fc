//! デプロイマニフェスト

use super::config::DefaultConfig;
use super::environment::EnvironmentResult;
use super::slack::NotificationResult;
use serde::{Deserialize, Serialize};

/// 1回のパイプライン実行に対するデプロイパラメータ
///
/// 環境の解決に失敗した場合、環境由来のフィールドは `None` になり、
/// シリアライズ時には出力されません。通知先も同様です。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// 設定ドキュメントからコピーしたデフォルト値
    #[serde(flatten)]
    pub defaults: DefaultConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_for_promotion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_gate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// コンテナイメージのタグ
    pub app_version: String,
    /// Helm チャートのバージョン
    pub chart_version: String,
    pub branch: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<NotificationResult>,
}

impl Manifest {
    /// デフォルト値をコピーし、環境由来のフィールドを空の状態で作成する
    pub fn from_defaults(defaults: DefaultConfig) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// 環境の解決結果を反映する
    pub fn apply_environment(&mut self, result: EnvironmentResult) {
        self.cluster = Some(result.cluster);
        self.approval_for_promotion = Some(result.approval_for_promotion);
        self.enabled = Some(result.enabled);
        self.environment = Some(result.environment);
        self.next_environment = Some(result.next_environment);
        self.aws_region = Some(result.aws_region);
        self.with_gate = Some(result.with_gate);
        self.aws_account_id = Some(result.aws_account_id);
        self.description = Some(result.description);
    }

    /// 環境由来のフィールドがそろっているか
    pub fn has_environment(&self) -> bool {
        self.environment.is_some()
    }
}

