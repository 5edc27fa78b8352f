use anyhow::Result;
use clap::Parser;
use shopping_cart_cli::{
    cli::{Args, ShoppingSession, TerminalPrompter},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env()?,
    };

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🛒 Shopping cart starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let style = args.style.unwrap_or(config.summary_style);
    let today = chrono::Local::now().format(&config.date_format).to_string();

    let session = ShoppingSession::new(
        TerminalPrompter::default(),
        std::io::stdout().lock(),
        style,
        today,
    );
    let cart = session.run().map_err(|e| {
        tracing::error!("Shopping session aborted: {}", e);
        e
    })?;

    tracing::info!(
        "🛒 Shopping cart stopped, {} units in {}'s cart",
        cart.item_count(),
        cart.customer_name()
    );
    Ok(())
}
