//! GitOps 設定ドキュメントとマニフェストのデータモデル

mod config;
mod environment;
mod manifest;
mod slack;

pub use config::*;
pub use environment::*;
pub use manifest::*;
pub use slack::*;
