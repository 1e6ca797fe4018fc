//! GitOps マニフェストファイルの取得
//!
//! 設定ファイルの生テキストを取得する [`ManifestSource`] と、その実装を提供します。
//!
//! - [`GitHubSource`]: GitHub Contents API から取得
//! - [`LocalSource`]: ローカルのチェックアウトから読み込み
//!
//! リトライやキャッシュは行いません。
//!
//! # Example
//!
//! ```ignore
//! use cicd_manifest_source::{FileLocation, GitHubSource, ManifestSource};
//!
//! let source = GitHubSource::new(Some(token));
//! let location = FileLocation::new("chronista-club", "dataanalysis", "./gitops.yaml", "main");
//! let content = source.fetch(&location).await?;
//! ```

pub mod error;
pub mod github;
pub mod local;
pub mod source;

pub use error::{Result, SourceError};
pub use github::GitHubSource;
pub use local::LocalSource;
pub use source::{FileLocation, ManifestSource};
