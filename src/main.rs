use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "roster", about = "In-memory student roster demo")]
struct Cli {
    /// Write debug logs to /tmp/roster-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/roster/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/roster-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("roster debug log started");
    }

    let config = roster_core::config::Config::load(cli.config.as_deref())?;
    roster::demo::run(&config, std::io::stdout().lock())?;
    Ok(())
}
