use crate::quote::{run_catalog, run_quote, CatalogArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wedding_booking::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wedding Booking Pricing",
    about = "Price wedding bookings and serve the pricing API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price a booking and print the itemized summary
    Quote(QuoteArgs),
    /// Print the package, add-on and discount tables
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
