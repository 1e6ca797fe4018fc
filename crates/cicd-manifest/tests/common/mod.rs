use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_GITOPS: &str =
    include_str!("../../../cicd-manifest-core/tests/fixtures/gitops.yaml");

/// ランナー由来の環境変数。テストの実行環境から漏れないよう毎回消す
const AMBIENT_VARS: [&str; 14] = [
    "INPUT_ENVIRONMENT",
    "INPUT_GITOPS_FILE",
    "INPUT_OWNER",
    "INPUT_REPO",
    "INPUT_PREFIX",
    "INPUT_REF",
    "INPUT_TOKEN",
    "INPUT_VERSION",
    "GITHUB_REPOSITORY",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "GITHUB_OUTPUT",
    "RUNNER_DEBUG",
    "RUST_LOG",
];

/// gitops ファイルを置いた一時リポジトリ
pub struct TestRepo {
    pub root: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn with_sample() -> Self {
        let repo = Self::new();
        repo.write_gitops("deploy/gitops.yaml", SAMPLE_GITOPS);
        repo
    }

    pub fn write_gitops(&self, relative: &str, content: &str) {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn output_file(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    #[allow(dead_code)]
    pub fn read_output_file(&self) -> String {
        fs::read_to_string(self.output_file()).unwrap_or_default()
    }

    /// ローカルモードで起動するコマンド
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cicd-manifest").unwrap();
        for var in AMBIENT_VARS {
            cmd.env_remove(var);
        }
        cmd.arg("--local").arg(self.path());
        cmd
    }
}
