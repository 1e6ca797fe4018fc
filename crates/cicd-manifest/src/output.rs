//! 出力値の書き出し
//!
//! GitHub Actions のランナー上では `GITHUB_OUTPUT` ファイルへ追記し、
//! それ以外では `name=value` 形式で stdout に出力します。

use anyhow::Context;
use cicd_manifest_core::NamedOutput;
use std::io::Write;
use std::path::PathBuf;

/// 出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `GITHUB_OUTPUT` が指すファイル
    File(PathBuf),
    Stdout,
}

pub struct OutputWriter {
    target: OutputTarget,
}

impl OutputWriter {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn from_env() -> Self {
        let target = std::env::var("GITHUB_OUTPUT")
            .ok()
            .filter(|p| !p.is_empty())
            .map(|p| OutputTarget::File(PathBuf::from(p)))
            .unwrap_or(OutputTarget::Stdout);
        Self::new(target)
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// すべての出力値を書き出し、書き出した件数を返す
    pub fn write_all(&self, outputs: &[NamedOutput]) -> anyhow::Result<usize> {
        for output in outputs {
            tracing::info!("⚙   {} => {}", output.name, output.value);
        }

        match &self.target {
            OutputTarget::File(path) => {
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("出力ファイルを開けません: {}", path.display()))?;
                for output in outputs {
                    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
                    file.write_all(format_file_command(output, &delimiter)?.as_bytes())?;
                }
            }
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                for output in outputs {
                    writeln!(handle, "{}={}", output.name, output.value)?;
                }
            }
        }

        Ok(outputs.len())
    }
}

/// `name<<delimiter` 形式のファイルコマンドを組み立てる
fn format_file_command(output: &NamedOutput, delimiter: &str) -> anyhow::Result<String> {
    if output.name.contains(delimiter) || output.value.contains(delimiter) {
        anyhow::bail!(
            "出力 '{}' にデリミタ '{}' が含まれています",
            output.name,
            delimiter
        );
    }
    Ok(format!(
        "{}<<{}\n{}\n{}\n",
        output.name, delimiter, output.value, delimiter
    ))
}

/// GitHub Actions のエラーアノテーション
pub fn error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}
