//! ログ設定
//!
//! 出力値を stdout に書く場合があるため、ログは常に stderr に出します。

use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();
}
