//! マニフェスト取得のエラー型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("ファイルが見つかりません: {path} ({owner}/{repo} @ {git_ref})")]
    NotFound {
        owner: String,
        repo: String,
        path: String,
        git_ref: String,
    },

    #[error("HTTP エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API エラー ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("ファイルではありません: {0}")]
    NotAFile(String),

    #[error("コンテンツのデコードに失敗しました: {0}")]
    Decode(String),

    #[error("リポジトリが指定されていません（owner / repo または GITHUB_REPOSITORY が必要です）")]
    MissingRepository,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
