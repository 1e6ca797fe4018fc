use cicd_manifest::inputs::runner_debug;
use cicd_manifest::output::error_annotation;
use cicd_manifest::{Cli, OutputWriter, logging};
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug || runner_debug());

    if let Err(e) = try_main(cli).await {
        // ランナーのエラーアノテーションとして stdout へ
        println!("{}", error_annotation(&format!("{:#}", e)));
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn try_main(cli: Cli) -> anyhow::Result<usize> {
    let inputs = cli.into_inputs()?;
    cicd_manifest::execute(inputs, &OutputWriter::from_env()).await
}
