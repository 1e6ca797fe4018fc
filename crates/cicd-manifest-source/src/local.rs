//! ローカルファイルからの読み込み
//!
//! `actions/checkout` 済みのワークスペースや手元での検証用。

use crate::error::{Result, SourceError};
use crate::source::{FileLocation, ManifestSource};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ManifestSource for LocalSource {
    fn name(&self) -> &str {
        "local"
    }

    async fn fetch(&self, location: &FileLocation) -> Result<String> {
        let path = self.root.join(&location.path);
        tracing::info!(path = %path.display(), "Reading manifest file");

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
                owner: location.owner.clone(),
                repo: location.repo.clone(),
                path: location.path.clone(),
                git_ref: location.git_ref.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
