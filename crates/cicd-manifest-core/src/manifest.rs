//! マニフェストの合成
//!
//! デフォルト値・環境の解決結果・通知先・バージョン/ブランチを
//! 1つの [`Manifest`] にまとめます。

use crate::environment::EnvironmentResolver;
use crate::model::{Config, Manifest};
use crate::notification::NotificationRouter;
use crate::version::ensure_prefix;

/// Helm チャートのバージョンに付与するサフィックス
const HELM_CHART_SUFFIX: &str = "-helm-charts";

pub struct ManifestComposer<'a> {
    config: &'a Config,
    environments: EnvironmentResolver<'a>,
    notifications: NotificationRouter<'a>,
}

impl<'a> ManifestComposer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            environments: EnvironmentResolver::new(config),
            notifications: NotificationRouter::new(config),
        }
    }

    /// 環境名・バージョン・ブランチからマニフェストを生成する
    ///
    /// 環境と通知先の両方が解決できない場合のみ None。片方だけ解決できた
    /// 場合は、もう片方のフィールドを欠いたマニフェストを返します。
    pub fn get_manifest(&self, environment: &str, version: &str, branch: &str) -> Option<Manifest> {
        let version = ensure_prefix(version);
        let environment_result = self.environments.resolve(environment);
        let slack = self.notifications.resolve(environment);

        if environment_result.is_none() && slack.is_none() {
            tracing::warn!(environment, "Unknown environment, no manifest produced");
            return None;
        }

        let mut manifest = Manifest::from_defaults(self.config.defaults.clone());
        if let Some(result) = environment_result {
            manifest.apply_environment(result);
        } else {
            tracing::warn!(environment, "Environment not resolved, manifest is partial");
        }
        if manifest.has_environment() && slack.is_none() {
            tracing::warn!(environment, "No slack channels for environment");
        }

        manifest.app_version = self.app_version(&version);
        manifest.chart_version = format!("{}{}", manifest.app_version, HELM_CHART_SUFFIX);
        manifest.branch = branch.to_string();
        manifest.slack = slack;

        Some(manifest)
    }

    /// モノレポの場合はチャートのサービス名を付与する
    fn app_version(&self, version: &str) -> String {
        if self.config.defaults.is_mono_repo {
            format!("{}-{}", version, self.config.defaults.helm_chart_service_name)
        } else {
            version.to_string()
        }
    }
}
