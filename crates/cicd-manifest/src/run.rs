//! マニフェスト解決の実行
//!
//! 取得 → パース → 合成 → 出力 の順に処理します。エラーはすべて呼び出し元へ
//! 返し、`main` で1か所だけ捕捉します。

use crate::inputs::Inputs;
use crate::output::OutputWriter;
use anyhow::Context;
use cicd_manifest_core::{ConfigManager, ManifestComposer, Outputs, Version, parse_config};
use cicd_manifest_source::{FileLocation, GitHubSource, LocalSource, ManifestSource, SourceError};

/// 入力からマニフェストを解決し、出力値を組み立てる
///
/// 未知の環境（環境定義も通知先も見つからない）の場合は `Ok(None)` です。
pub async fn run(inputs: &Inputs, source: &dyn ManifestSource) -> anyhow::Result<Option<Outputs>> {
    let location = FileLocation::new(
        inputs.owner.clone().unwrap_or_default(),
        inputs.repo.clone().unwrap_or_default(),
        &inputs.gitops_file,
        inputs.git_ref.clone(),
    );

    let content = source.fetch(&location).await.with_context(|| {
        format!(
            "Error when try to retrieve the gitops manifest file {}. Please check if it exists.",
            location
        )
    })?;

    let config = parse_config(&content)
        .with_context(|| format!("gitops マニフェストのパースに失敗しました: {}", location.path))?;
    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!("Manifest Content: {}", ConfigManager::new(&config).serialize()?);
    }

    let version = Version::parse(&inputs.version)?;

    let composer = ManifestComposer::new(&config);
    let Some(manifest) =
        composer.get_manifest(&inputs.environment, &inputs.version, &inputs.git_ref)
    else {
        return Ok(None);
    };

    Ok(Some(Outputs {
        gitops_file: inputs.gitops_file.clone(),
        owner: inputs.owner.clone(),
        repo: inputs.repo.clone(),
        manifest,
        version,
    }))
}

/// 入力に応じた取得元を作る
pub fn select_source(inputs: &Inputs) -> anyhow::Result<Box<dyn ManifestSource>> {
    if let Some(root) = &inputs.local {
        return Ok(Box::new(LocalSource::new(root)));
    }

    if inputs.owner.is_none() || inputs.repo.is_none() {
        return Err(SourceError::MissingRepository.into());
    }

    tracing::info!("💬 Setting Authentication");
    let source = GitHubSource::new(inputs.token.clone()).with_api_base(&inputs.api_url);
    if !source.is_authenticated() {
        tracing::warn!("No token provided, accessing GitHub API anonymously");
    }
    Ok(Box::new(source))
}

/// 1回分の実行: マニフェストを解決して出力を書き出す。書き出した件数を返す
pub async fn execute(inputs: Inputs, writer: &OutputWriter) -> anyhow::Result<usize> {
    tracing::info!("💬 Starting CICD Manifest");
    tracing::debug!("Inputs: {:?}", inputs);

    let source = select_source(&inputs)?;
    tracing::debug!(source = source.name(), "Selected manifest source");

    let Some(outputs) = run(&inputs, source.as_ref()).await? else {
        tracing::warn!(
            environment = %inputs.environment,
            "No manifest for environment, nothing to output"
        );
        return Ok(0);
    };

    tracing::info!("💬 Generating Outputs Dynamically...");
    let named = outputs.to_named(&inputs.prefix)?;
    let count = writer.write_all(&named)?;
    tracing::info!("🏁 CICD Manifest completed successfully with {} outputs", count);

    Ok(count)
}
