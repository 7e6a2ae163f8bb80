//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use blastconvert_axum::bootstrap;
use blastconvert_cli::{Cli, Commands, handlers};
use blastconvert_core::ConfigSnapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = ConfigSnapshot::from_env()?;

    match command {
        Commands::Serve { host, port } => {
            handlers::serve::execute(config, host, port).await?;
        }
        Commands::Convert {
            file,
            model,
            output,
        } => {
            let ctx = bootstrap(config)?;
            handlers::convert::execute(&ctx, &file, model, output.as_deref()).await?;
        }
        Commands::Event { route, input } => {
            let ctx = bootstrap(config)?;
            handlers::event::execute(&ctx, route.map(Into::into), input.as_deref()).await?;
        }
        Commands::Models => {
            handlers::models::execute(&config.catalog);
        }
    }

    Ok(())
}
