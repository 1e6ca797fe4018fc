//! Slack 通知設定

use serde::{Deserialize, Serialize};

/// Slack チャンネル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackChannel {
    pub id: String,
    pub name: String,
}

/// CI / CD 用のチャンネルリスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackCiCdConfiguration {
    pub cd: Vec<SlackChannel>,
    pub ci: Vec<SlackChannel>,
}

/// 環境バケットごとのチャンネル設定（バケットは固定の4種類）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackChannels {
    pub default: SlackCiCdConfiguration,
    pub dev: SlackCiCdConfiguration,
    pub demo: SlackCiCdConfiguration,
    pub prod: SlackCiCdConfiguration,
}

impl SlackChannels {
    /// バケット名でチャンネル設定を取得する。未知のバケットは None
    pub fn get(&self, bucket: &str) -> Option<&SlackCiCdConfiguration> {
        match bucket {
            "default" => Some(&self.default),
            "dev" => Some(&self.dev),
            "demo" => Some(&self.demo),
            "prod" => Some(&self.prod),
            _ => None,
        }
    }
}

/// 設定ドキュメントの `slack` セクション
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// ワークスペースのベースURL
    pub url: String,
    pub channels: SlackChannels,
}

/// 1つの環境に対する通知先の解決結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub url: String,
    pub ci: Vec<SlackChannel>,
    pub cd: Vec<SlackChannel>,
}
