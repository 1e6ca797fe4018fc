//! 名前付き出力への平坦化
//!
//! マニフェスト・バージョン・リポジトリ情報を `(名前, 値)` の並びに変換します。
//! 値のないフィールドは出力しません。

use crate::error::Result;
use crate::model::Manifest;
use crate::version::Version;
use serde::Serialize;

/// パイプラインへ返す出力値一式
#[derive(Debug, Clone, Serialize)]
pub struct Outputs {
    pub gitops_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(flatten)]
    pub manifest: Manifest,
    #[serde(flatten)]
    pub version: Version,
}

/// 1つの出力値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedOutput {
    pub name: String,
    pub value: String,
}

impl Outputs {
    /// キー名順の出力リストに変換する
    ///
    /// 文字列はそのまま、真偽値・数値は JSON 表記、`slack` はコンパクトな
    /// JSON になります。`prefix` が空でなければ `{prefix}_{key}` と命名します。
    pub fn to_named(&self, prefix: &str) -> Result<Vec<NamedOutput>> {
        let value = serde_json::to_value(self)?;
        let serde_json::Value::Object(fields) = value else {
            return Ok(Vec::new());
        };

        let mut outputs: Vec<NamedOutput> = fields
            .into_iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Some(NamedOutput {
                    name: output_name(prefix, &key),
                    value,
                })
            })
            .collect();
        outputs.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(outputs)
    }
}

fn output_name(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}_{}", prefix, key)
    }
}
