//! 環境の解決
//!
//! 環境名から環境定義とプロモーションフェーズを引き、1つの
//! [`EnvironmentResult`] にまとめます。

use crate::model::{Config, Environment, EnvironmentPromotionPhase, EnvironmentResult};

pub struct EnvironmentResolver<'a> {
    config: &'a Config,
}

impl<'a> EnvironmentResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 環境定義とプロモーションフェーズの両方が見つかった場合のみ結果を返す
    pub fn resolve(&self, environment: &str) -> Option<EnvironmentResult> {
        let phase = self.find_promotion_phase(environment);
        let env = self.find_environment(environment);

        match (env, phase) {
            (Some(env), Some(phase)) => Some(EnvironmentResult::merge(env, phase.clone())),
            (env, phase) => {
                tracing::debug!(
                    environment,
                    environment_found = env.is_some(),
                    phase_found = phase.is_some(),
                    "Environment could not be resolved"
                );
                None
            }
        }
    }

    /// `environment` フィールドが一致する最初のプロモーションフェーズ
    ///
    /// マップのキーではなく値で照合します（大文字小文字を区別、完全一致）。
    pub fn find_promotion_phase(&self, environment: &str) -> Option<&'a EnvironmentPromotionPhase> {
        self.config
            .environment_promotion_phases
            .values()
            .find(|phase| phase.environment == environment)
    }

    /// 環境名をキーに環境定義を引く（追加リージョンは除外）
    pub fn find_environment(&self, environment: &str) -> Option<Environment> {
        let record = self.config.environments.get(environment)?;
        tracing::debug!(environment, cluster = %record.cluster, "Found environment");
        Some(Environment::from(record))
    }
}
