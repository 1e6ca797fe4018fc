//! 実行時の入力
//!
//! コマンドライン引数と GitHub Actions の `INPUT_*` 環境変数の両方から読み込みます。
//! ランナーは未指定の入力を空文字列で渡すため、空文字列は未指定として扱います。

use cicd_manifest_source::github::GITHUB_API_BASE;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

/// 環境名のデフォルト
pub const DEFAULT_ENVIRONMENT: &str = "dev";

#[derive(Parser, Debug)]
#[command(name = "cicd-manifest")]
#[command(
    about = "GitOps 設定ファイルからデプロイマニフェストを解決して出力する",
    long_about = None
)]
pub struct Cli {
    /// 環境名 (dev, demo, prod)
    #[arg(long, env = "INPUT_ENVIRONMENT", default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// GitOps 設定ファイルのパス（リポジトリルートからの相対パス）
    #[arg(long, env = "INPUT_GITOPS_FILE")]
    pub gitops_file: String,

    /// リポジトリのオーナー（省略時は GITHUB_REPOSITORY）
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: Option<String>,

    /// リポジトリ名（省略時は GITHUB_REPOSITORY）
    #[arg(long, env = "INPUT_REPO")]
    pub repo: Option<String>,

    /// 出力名のプレフィックス
    #[arg(long, env = "INPUT_PREFIX", default_value = "")]
    pub prefix: String,

    /// 取得対象のブランチ・タグ
    #[arg(long = "ref", env = "INPUT_REF")]
    pub git_ref: String,

    /// GitHub トークン（省略時は GITHUB_TOKEN）
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// アプリケーションのバージョン (例: 1.2.3, v1.2.3-rc.1)
    #[arg(long = "version", env = "INPUT_VERSION")]
    pub version: String,

    /// GitHub API のベースURL
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// API を使わずローカルのチェックアウトから読み込む
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub local: Option<PathBuf>,

    /// デバッグログを出力する（RUNNER_DEBUG=1 でも有効）
    #[arg(long)]
    pub debug: bool,
}

/// 解決済みの入力
#[derive(Clone)]
pub struct Inputs {
    pub environment: String,
    pub gitops_file: String,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub prefix: String,
    pub git_ref: String,
    pub token: Option<String>,
    pub version: String,
    pub api_url: String,
    pub local: Option<PathBuf>,
}

impl fmt::Debug for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inputs")
            .field("environment", &self.environment)
            .field("gitops_file", &self.gitops_file)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("prefix", &self.prefix)
            .field("git_ref", &self.git_ref)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("version", &self.version)
            .field("api_url", &self.api_url)
            .field("local", &self.local)
            .finish()
    }
}

impl Cli {
    /// 環境変数の既定値を補って入力を確定する
    pub fn into_inputs(self) -> anyhow::Result<Inputs> {
        let github_repository = std::env::var("GITHUB_REPOSITORY").ok();
        let github_token = std::env::var("GITHUB_TOKEN").ok();
        self.resolve(github_repository.as_deref(), github_token)
    }

    /// `GITHUB_REPOSITORY` (`owner/repo`) と `GITHUB_TOKEN` を既定値として入力を確定する
    pub fn resolve(
        self,
        github_repository: Option<&str>,
        github_token: Option<String>,
    ) -> anyhow::Result<Inputs> {
        let gitops_file = required("gitops_file", self.gitops_file)?;
        let git_ref = required("ref", self.git_ref)?;
        let version = required("version", self.version)?;

        let (default_owner, default_repo) = github_repository
            .and_then(|r| r.split_once('/'))
            .map(|(owner, repo)| (Some(owner.to_string()), Some(repo.to_string())))
            .unwrap_or_default();

        Ok(Inputs {
            environment: non_empty(Some(self.environment))
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            gitops_file,
            owner: non_empty(self.owner).or(non_empty(default_owner)),
            repo: non_empty(self.repo).or(non_empty(default_repo)),
            prefix: self.prefix.trim().to_string(),
            git_ref,
            token: non_empty(self.token).or(non_empty(github_token)),
            version,
            api_url: non_empty(Some(self.api_url)).unwrap_or_else(|| GITHUB_API_BASE.to_string()),
            local: self.local,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &str, value: String) -> anyhow::Result<String> {
    non_empty(Some(value)).ok_or_else(|| anyhow::anyhow!("入力 '{}' は必須です", name))
}

/// ランナーのステップデバッグが有効か
pub fn runner_debug() -> bool {
    std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["cicd-manifest"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    const REQUIRED: [&str; 6] = [
        "--gitops-file",
        "./gitops.yaml",
        "--ref",
        "main",
        "--version",
        "1.0.0",
    ];

    #[test]
    fn test_defaults_from_github_context() {
        let cli = temp_env::with_vars_unset(
            [
                "INPUT_ENVIRONMENT",
                "INPUT_OWNER",
                "INPUT_REPO",
                "INPUT_PREFIX",
                "INPUT_TOKEN",
                "GITHUB_API_URL",
            ],
            || parse(&REQUIRED),
        );
        let inputs = cli
            .resolve(Some("chronista-club/dataanalysis"), Some("ghs_token".to_string()))
            .unwrap();

        assert_eq!(inputs.environment, "dev");
        assert_eq!(inputs.owner.as_deref(), Some("chronista-club"));
        assert_eq!(inputs.repo.as_deref(), Some("dataanalysis"));
        assert_eq!(inputs.prefix, "");
        assert_eq!(inputs.token.as_deref(), Some("ghs_token"));
        assert_eq!(inputs.api_url, GITHUB_API_BASE);
        assert!(inputs.local.is_none());
    }

    #[test]
    fn test_explicit_inputs_win() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--owner", "other", "--repo", "infra", "--token", "pat", "--environment", "prod"]);
        let inputs = temp_env::with_vars_unset(["INPUT_ENVIRONMENT"], || parse(&args))
            .resolve(Some("chronista-club/dataanalysis"), Some("ghs_token".to_string()))
            .unwrap();

        assert_eq!(inputs.environment, "prod");
        assert_eq!(inputs.owner.as_deref(), Some("other"));
        assert_eq!(inputs.repo.as_deref(), Some("infra"));
        assert_eq!(inputs.token.as_deref(), Some("pat"));
    }

    #[test]
    fn test_inputs_from_action_env() {
        let cli = temp_env::with_vars(
            [
                ("INPUT_ENVIRONMENT", Some("demo")),
                ("INPUT_GITOPS_FILE", Some("deploy/gitops.yaml")),
                ("INPUT_REF", Some("release/1.2")),
                ("INPUT_VERSION", Some("v1.2.0")),
                ("INPUT_PREFIX", Some("cd")),
                ("INPUT_OWNER", None),
                ("INPUT_REPO", None),
                ("INPUT_TOKEN", None),
            ],
            || parse(&[]),
        );
        let inputs = cli.resolve(None, None).unwrap();

        assert_eq!(inputs.environment, "demo");
        assert_eq!(inputs.gitops_file, "deploy/gitops.yaml");
        assert_eq!(inputs.git_ref, "release/1.2");
        assert_eq!(inputs.version, "v1.2.0");
        assert_eq!(inputs.prefix, "cd");
        assert!(inputs.owner.is_none());
        assert!(inputs.token.is_none());
    }

    #[test]
    fn test_empty_inputs_fall_back() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--environment", "", "--owner", "", "--token", ""]);
        let inputs = parse(&args)
            .resolve(Some("acme/app"), Some("ghs_token".to_string()))
            .unwrap();

        assert_eq!(inputs.environment, "dev");
        assert_eq!(inputs.owner.as_deref(), Some("acme"));
        assert_eq!(inputs.token.as_deref(), Some("ghs_token"));
    }

    #[test]
    fn test_empty_required_input_is_rejected() {
        let cli = parse(&["--gitops-file", "", "--ref", "main", "--version", "1.0.0"]);
        let err = cli.resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("gitops_file"));
    }

    #[test]
    fn test_missing_required_argument() {
        let result = temp_env::with_vars_unset(["INPUT_VERSION"], || {
            Cli::try_parse_from(["cicd-manifest", "--gitops-file", "a.yaml", "--ref", "main"])
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_local_flag_defaults_to_current_dir() {
        let mut args = REQUIRED.to_vec();
        args.push("--local");
        let cli = parse(&args);
        assert_eq!(cli.local, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--token", "ghp-secret"]);
        let inputs = parse(&args).resolve(None, None).unwrap();
        let debug = format!("{:?}", inputs);
        assert!(!debug.contains("ghp-secret"));
        assert!(debug.contains("***"));
    }
}
