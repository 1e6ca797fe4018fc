//! 環境定義とプロモーションフェーズ

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// プロモーションフェーズ: 環境名と AWS アカウントの対応
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentPromotionPhase {
    /// AWS アカウントID（ゼロ埋めされた文字列表記も受け付ける）
    #[serde(deserialize_with = "deserialize_account_id")]
    pub aws_account_id: u64,
    /// 環境名（検索キーはマップのキーではなくこの値）
    pub environment: String,
    /// フェーズの説明
    pub description: String,
    /// フェーズが有効か
    pub enabled: bool,
}

/// 整数または数字のみの文字列として書かれたアカウントIDを読む
fn deserialize_account_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(AccountIdVisitor)
}

struct AccountIdVisitor;

impl<'de> Visitor<'de> for AccountIdVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an AWS account id as an integer or a string of digits")
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<u64, E> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(E::invalid_value(serde::de::Unexpected::Str(value), &self));
        }
        value
            .parse()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

/// 設定ドキュメント上の環境定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    pub cluster: String,
    pub approval_for_promotion: bool,
    pub enabled: bool,
    /// 環境名（マップのキーより優先）
    pub environment: String,
    /// 次の環境名。空文字列は終端
    pub next_environment: String,
    pub aws_region: String,
    #[serde(default)]
    pub additional_aws_regions: Vec<String>,
    pub with_gate: bool,
}

/// 環境定義から追加リージョンを除いたもの
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub cluster: String,
    pub approval_for_promotion: bool,
    pub enabled: bool,
    pub environment: String,
    pub next_environment: String,
    pub aws_region: String,
    pub with_gate: bool,
}

impl From<&EnvironmentRecord> for Environment {
    fn from(record: &EnvironmentRecord) -> Self {
        Self {
            cluster: record.cluster.clone(),
            approval_for_promotion: record.approval_for_promotion,
            enabled: record.enabled,
            environment: record.environment.clone(),
            next_environment: record.next_environment.clone(),
            aws_region: record.aws_region.clone(),
            with_gate: record.with_gate,
        }
    }
}

impl Environment {
    /// 後続環境がない（プロモーションの終端）か
    pub fn is_terminal(&self) -> bool {
        self.next_environment.is_empty()
    }
}

/// 環境定義とプロモーションフェーズを合わせた解決結果
///
/// 両方に存在するフィールド（`enabled`, `environment`）は
/// プロモーションフェーズ側の値を採用します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentResult {
    pub cluster: String,
    pub approval_for_promotion: bool,
    pub enabled: bool,
    pub environment: String,
    pub next_environment: String,
    pub aws_region: String,
    pub with_gate: bool,
    pub aws_account_id: u64,
    pub description: String,
}

impl EnvironmentResult {
    pub fn merge(environment: Environment, phase: EnvironmentPromotionPhase) -> Self {
        Self {
            cluster: environment.cluster,
            approval_for_promotion: environment.approval_for_promotion,
            next_environment: environment.next_environment,
            aws_region: environment.aws_region,
            with_gate: environment.with_gate,
            enabled: phase.enabled,
            environment: phase.environment,
            aws_account_id: phase.aws_account_id,
            description: phase.description,
        }
    }
}

/// プロモーションフェーズの順序付きマップ
///
/// ドキュメントに書かれた順序を保持します。YAML/JSON 上はマッピングとして
/// 読み書きされます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionPhases(Vec<(String, EnvironmentPromotionPhase)>);

impl PromotionPhases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, phase: EnvironmentPromotionPhase) {
        self.0.push((key.into(), phase));
    }

    /// (キー, フェーズ) をドキュメント順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvironmentPromotionPhase)> {
        self.0.iter().map(|(key, phase)| (key.as_str(), phase))
    }

    pub fn values(&self) -> impl Iterator<Item = &EnvironmentPromotionPhase> {
        self.0.iter().map(|(_, phase)| phase)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, EnvironmentPromotionPhase)> for PromotionPhases {
    fn from_iter<I: IntoIterator<Item = (K, EnvironmentPromotionPhase)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for PromotionPhases {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, phase)| (key, phase)))
    }
}

impl<'de> Deserialize<'de> for PromotionPhases {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PromotionPhasesVisitor)
    }
}

struct PromotionPhasesVisitor;

impl<'de> Visitor<'de> for PromotionPhasesVisitor {
    type Value = PromotionPhases;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of promotion phases")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut phases = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, phase)) = map.next_entry::<String, EnvironmentPromotionPhase>()? {
            phases.push((key, phase));
        }
        Ok(PromotionPhases(phases))
    }
}
