use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("無効なバージョン形式: {0}\nヒント: major.minor.patch 形式（例: v1.2.3, 1.2.3-rc.1）で指定してください")]
    InvalidVersionFormat(String),

    #[error("YAMLパースエラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSONパースエラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
