//! CI/CD マニフェスト解決のコマンドライン実装
//!
//! GitHub Actions のステップとして、あるいは手元のシェルから実行します。

pub mod inputs;
pub mod logging;
pub mod output;
pub mod run;

pub use inputs::{Cli, Inputs};
pub use output::{OutputTarget, OutputWriter};
pub use run::{execute, run};
