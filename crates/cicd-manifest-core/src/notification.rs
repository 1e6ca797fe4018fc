//! Slack 通知先の解決

use crate::model::{Config, NotificationResult};

pub struct NotificationRouter<'a> {
    config: &'a Config,
}

impl<'a> NotificationRouter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 環境名をバケット名として通知先を解決する
    ///
    /// `default` / `dev` / `demo` / `prod` 以外は None（`default` への
    /// フォールバックはしない）。
    pub fn resolve(&self, environment: &str) -> Option<NotificationResult> {
        let Some(channels) = self.config.slack.channels.get(environment) else {
            tracing::debug!(environment, "No slack channel bucket for environment");
            return None;
        };

        Some(NotificationResult {
            url: self.config.slack.url.clone(),
            ci: channels.ci.clone(),
            cd: channels.cd.clone(),
        })
    }
}
