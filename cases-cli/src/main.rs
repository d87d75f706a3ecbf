//! Cases CLI - inspect the dataset and replay dashboard sessions in a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cases-cli",
    version,
    about = "Case trends dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    source: cases_cmd::DatasetArgs,

    #[command(subcommand)]
    command: cases_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cases_cmd::run(&cli.source, cli.command, &mut out)
}
