use clap::Parser;

use crate::utils::formatting::SummaryStyle;

#[derive(Parser, Debug)]
#[command(name = "shopping-cart")]
#[command(about = "Interactive shopping cart for a single customer session")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Environment file to load configuration from
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout of the cart summary, overrides CART_SUMMARY_STYLE
    #[arg(short, long)]
    pub style: Option<SummaryStyle>,
}
