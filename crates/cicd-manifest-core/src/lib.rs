//! CI/CD マニフェスト解決
//!
//! リポジトリに置かれた GitOps 設定ファイル（複数環境ぶんのアプリ・環境・
//! 通知メタデータ）と、パイプライン実行ごとのパラメータ（環境名・バージョン・
//! ブランチ）をマージして、1つのフラットなマニフェストを生成します。
//!
//! # 構成
//!
//! - [`version`]: セマンティックバージョンの正規化・検証・分解
//! - [`environment`]: 環境定義とプロモーションフェーズの解決
//! - [`notification`]: Slack 通知チャンネルの解決
//! - [`manifest`]: 上記を合成して [`Manifest`] を生成
//! - [`outputs`]: マニフェストを名前付き出力に平坦化
//!
//! 設定ドキュメントは実行中に変更されません。各コンポーネントは
//! `&Config` を借用するだけです。

pub mod config;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod model;
pub mod notification;
pub mod outputs;
pub mod version;

pub use config::*;
pub use environment::EnvironmentResolver;
pub use error::*;
pub use manifest::ManifestComposer;
pub use model::*;
pub use notification::NotificationRouter;
pub use outputs::*;
pub use version::Version;
