//! 設定ドキュメント

use super::environment::{EnvironmentRecord, PromotionPhases};
use super::slack::SlackConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// アプリケーション共通のデフォルト値
///
/// 設定ドキュメントのトップレベルにあるスカラー値で、
/// マニフェストへそのままコピーされます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// App of Apps 名
    pub app_of_apps: String,
    /// App of Apps 内のサービス名
    pub app_of_apps_service_name: String,
    /// アプリケーションのリポジトリ名
    pub app_repo: String,
    /// ビルドに使う Dockerfile のパス
    pub dockerfile: String,
    /// ECR リポジトリ名
    pub ecr_repository_name: String,
    /// ビルド時にテストを実行するか
    pub enable_tests: bool,
    /// Helm チャートのリポジトリ
    pub helm_chart_repo: String,
    /// Helm チャート内のサービス名
    pub helm_chart_service_name: String,
    /// モノレポ構成か
    pub is_mono_repo: bool,
    /// アプリケーション名
    pub name: String,
    /// デプロイ対象のサービス名
    pub service: String,
}

/// GitOps 設定ドキュメント全体
///
/// 1回の実行の間は読み取り専用です。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// トップレベルのデフォルト値
    #[serde(flatten)]
    pub defaults: DefaultConfig,

    /// プロモーションフェーズ（ドキュメント上の順序を保持）
    pub environment_promotion_phases: PromotionPhases,

    /// 環境名 → 環境定義
    pub environments: BTreeMap<String, EnvironmentRecord>,

    /// Slack 通知設定
    pub slack: SlackConfig,
}
