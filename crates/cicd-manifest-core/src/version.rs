//! セマンティックバージョンのユーティリティ
//!
//! パイプラインから渡されるバージョン文字列（`1.2.3`, `v1.2.3-rc.1` など）を
//! 正規化・検証・分解します。

use crate::error::{ManifestError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?[0-9]+\.[0-9]+\.[0-9]+(?:-[0-9A-Za-z.-]+)?$").unwrap()
});

static VERSION_PATTERN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(v)?([0-9]+\.[0-9]+\.[0-9]+)").unwrap());

/// 先頭に `v` がなければ付与する
pub fn ensure_prefix(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    }
}

/// セマンティックバージョンとして妥当か
///
/// 先頭の `v` と `-` 以降のサフィックスは任意。正規化はしません。
pub fn validate(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}

/// `[major, minor, patch]` に分解する
///
/// 先頭の `v` を除き、最初の `-` 以降を捨ててから `.` で分割します。
pub fn split(version: &str) -> Result<[String; 3]> {
    let stripped = version.strip_prefix('v').unwrap_or(version);
    let core = stripped.split('-').next().unwrap_or_default();

    let parts: Vec<&str> = core.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(ManifestError::InvalidVersionFormat(version.to_string()));
    };

    for part in [major, minor, patch] {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ManifestError::InvalidVersionFormat(version.to_string()));
        }
    }

    Ok([major.to_string(), minor.to_string(), patch.to_string()])
}

/// 任意のテキストからバージョンを検出するパターン
///
/// キャプチャ1は任意の `v`、キャプチャ2は `x.y.z` 部分です。
/// 例: `application-v1.0.0` → キャプチャ2 = `1.0.0`
pub fn version_pattern() -> &'static Regex {
    &VERSION_PATTERN_RE
}

/// 分解済みのバージョン
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: String,
    pub minor: String,
    pub patch: String,
    /// `v` 付きのバージョン文字列
    pub sem_ver: String,
}

impl Version {
    /// バージョン文字列を正規化して分解する
    pub fn parse(version: &str) -> Result<Self> {
        let sem_ver = ensure_prefix(version);
        let [major, minor, patch] = split(&sem_ver)?;
        Ok(Self {
            major,
            minor,
            patch,
            sem_ver,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_prefix_adds_v() {
        assert_eq!(
            ensure_prefix("1.2.3-continuous-delivery.ci"),
            "v1.2.3-continuous-delivery.ci"
        );
        assert_eq!(ensure_prefix(""), "v");
    }

    #[test]
    fn test_ensure_prefix_is_idempotent() {
        for input in ["v1.0.0", "1.0.0", "vv", "main", ""] {
            let once = ensure_prefix(input);
            assert_eq!(ensure_prefix(&once), once);
        }
        assert_eq!(ensure_prefix("v1.0.0"), "v1.0.0");
    }

    #[test]
    fn test_validate() {
        assert!(validate("v1.2.3-continuous-delivery.ci"));
        assert!(validate("1.2.3"));
        assert!(validate("0.1.391"));
        assert!(!validate("not a version"));
        assert!(!validate("1.2"));
        assert!(!validate("v1.2.3-"));
        assert!(!validate("1.2.3 "));
    }

    #[test]
    fn test_split_with_prefix_and_suffix() {
        assert_eq!(
            split("v1.2.3-continuous-delivery.ci").unwrap(),
            ["1", "2", "3"]
        );
        assert_eq!(
            split("1.2.3-continuous-delivery.ci").unwrap(),
            ["1", "2", "3"]
        );
        assert_eq!(split("0.1.391").unwrap(), ["0", "1", "391"]);
    }

    #[test]
    fn test_split_rejects_malformed() {
        for input in ["v1.2", "1.2.3.4", "a.b.c", "v", "", "1..3", "-1.2.3"] {
            let err = split(input).unwrap_err();
            assert!(
                matches!(err, ManifestError::InvalidVersionFormat(ref v) if v == input),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_version_pattern_detects_versions() {
        let pattern = version_pattern();
        assert!(pattern.is_match("application-v1.0.0"));
        assert!(pattern.is_match("version 7.10.0"));
        assert!(!pattern.is_match("no version pattern here"));
    }

    #[test]
    fn test_version_pattern_captures_version() {
        let caps = version_pattern().captures("application-v1.2.3").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("v"));
        assert_eq!(&caps[2], "1.2.3");

        let caps = version_pattern().captures("version 7.10.0").unwrap();
        assert!(caps.get(1).is_none());
        assert_eq!(&caps[2], "7.10.0");
    }

    #[test]
    fn test_version_parse() {
        let version = Version::parse("1.4.12-rc.2").unwrap();
        assert_eq!(version.sem_ver, "v1.4.12-rc.2");
        assert_eq!(version.major, "1");
        assert_eq!(version.minor, "4");
        assert_eq!(version.patch, "12");

        assert!(Version::parse("latest").is_err());
    }
}
