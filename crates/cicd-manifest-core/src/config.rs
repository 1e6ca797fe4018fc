//! 設定ドキュメントの読み書き
//!
//! リポジトリから取得した生テキストを [`Config`] に変換します。
//! YAML と JSON のどちらも受け付けます（JSON は YAML のサブセット）。

use crate::error::Result;
use crate::model::Config;

/// 構造化テキスト（YAML / JSON）を設定ドキュメントにパース
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(content)?;
    tracing::debug!(
        phases = config.environment_promotion_phases.len(),
        environments = config.environments.len(),
        "Parsed gitops configuration"
    );
    Ok(config)
}

/// 設定ドキュメントの JSON シリアライズ
pub struct ConfigManager<'a> {
    config: &'a Config,
}

impl<'a> ConfigManager<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 整形済み JSON に変換
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.config)?)
    }

    /// JSON 文字列から設定ドキュメントを復元
    pub fn deserialize(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }
}
