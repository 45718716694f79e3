use clap::Parser;
use shopkeys::Commands;

#[derive(Parser)]
#[command(name = "shopkeys")]
#[command(about = "Resolve build-time secrets and check launch keys", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    shopkeys_utils::tracing::init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    cli.command.execute()?;
    Ok(())
}
