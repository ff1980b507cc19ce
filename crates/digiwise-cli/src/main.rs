use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use digiwise_cli::cli::Cli;
use digiwise_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let stdout = std::io::stdout();
    commands::run(cli, &mut stdout.lock())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // Results go to stdout; keep it clean for piping.
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
