//! マニフェスト取得の抽象化

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// 取得対象ファイルの位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    pub owner: String,
    pub repo: String,
    /// リポジトリルートからの相対パス（先頭の `./` と `/` は除去済み）
    pub path: String,
    /// ブランチ・タグ・コミット
    pub git_ref: String,
}

impl FileLocation {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: &str,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: normalize_path(path),
            git_ref: git_ref.into(),
        }
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from \"{}/{}\" on ref {}",
            self.path, self.owner, self.repo, self.git_ref
        )
    }
}

/// `./gitops.yaml` や `/gitops.yaml` をリポジトリ相対パスにそろえる
pub fn normalize_path(path: &str) -> String {
    let mut path = path.trim();
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest;
        } else {
            break;
        }
    }
    path.to_string()
}

/// 設定ファイルの生テキストを取得する
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// ソース名（ログ用）
    fn name(&self) -> &str;

    /// ファイルの内容を取得する
    async fn fetch(&self, location: &FileLocation) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./file.yaml"), "file.yaml");
        assert_eq!(normalize_path("/deploy/gitops.yaml"), "deploy/gitops.yaml");
        assert_eq!(normalize_path(".//a.yaml"), "a.yaml");
        assert_eq!(normalize_path("deploy/gitops.yaml"), "deploy/gitops.yaml");
        assert_eq!(normalize_path(".gitops.yaml"), ".gitops.yaml");
    }

    #[test]
    fn test_file_location_display() {
        let location = FileLocation::new("owner", "repo", "./file.yaml", "main");
        assert_eq!(location.path, "file.yaml");
        assert_eq!(
            location.to_string(),
            "file.yaml from \"owner/repo\" on ref main"
        );
    }
}
