mod cli;
mod config;
mod http;
mod serve;

use clap::Parser;
use cli::{Cli, Commands};
use config::BriefMeConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `config validate` reports a broken file itself.
    let mut config = match cli.command {
        Commands::Config(_) => BriefMeConfig::default(),
        _ => BriefMeConfig::load_or_default(&cli.config)?,
    };
    if let Some(addr) = cli.http_addr {
        config.server.http_addr = addr;
    }

    // RUST_LOG wins over [logging] level. Logs go to stderr so command
    // output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve => serve::run(config).await?,
        Commands::Shell => cli::shell::run(&config)?,
        Commands::Dashboard(args) => cli::dashboard::run(args, &config)?,
        Commands::Meetings(args) => cli::meetings::run(args, &config)?,
        Commands::Briefs(args) => cli::briefs::run(args, &config)?,
        Commands::FollowUps(args) => cli::follow_ups::run(args, &config)?,
        Commands::Config(cmd) => cli::config_cmd::run(cmd, &cli.config)?,
    }

    Ok(())
}
