use clap::Args;
use std::fmt::Write as _;
use wedding_booking::config::AppConfig;
use wedding_booking::error::AppError;
use wedding_booking::pricing::{PriceCatalog, Quote, QuoteRequest};
use wedding_booking::telemetry;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Event type (modest-wedding, modest-elopement, vow-renewal, other)
    #[arg(long)]
    pub(crate) event_type: String,
    /// Add-on to include; repeat for several (photoBook, extraTime, byobBar, rehearsal)
    #[arg(long = "addon")]
    pub(crate) addons: Vec<String>,
    /// Payment method (ach, affirm, echeck, paypal, venmo)
    #[arg(long)]
    pub(crate) payment_method: Option<String>,
    /// Print the breakdown as JSON instead of a summary table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let QuoteArgs {
        event_type,
        addons,
        payment_method,
        json,
    } = args;

    let request = QuoteRequest {
        event_type,
        addons,
        selections: None,
        payment_method: payment_method.unwrap_or_default(),
    };
    let quote = request.price()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print!("{}", render_quote(&quote));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = PriceCatalog::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render_catalog(&catalog));
    }

    Ok(())
}

pub(crate) fn render_quote(quote: &Quote) -> String {
    let lines = quote.summary_lines();
    let width = lines
        .iter()
        .map(|line| line.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Booking summary\n");
    for line in &lines {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>14}",
            line.label,
            line.display_amount(),
            width = width
        );
    }
    out
}

pub(crate) fn render_catalog(catalog: &PriceCatalog) -> String {
    let mut out = String::from("Packages\n");
    for entry in &catalog.event_types {
        let _ = writeln!(
            out,
            "  {:<18} {:<20} {:>12}  ({} discounts)",
            entry.event_type.id(),
            entry.label,
            entry.base_price.to_string(),
            entry.discount_category.id()
        );
    }

    out.push_str("\nAdd-ons\n");
    for entry in &catalog.addons {
        let _ = writeln!(
            out,
            "  {:<18} {:<20} {:>12}",
            entry.addon.id(),
            entry.label,
            entry.price.to_string()
        );
    }

    out.push_str("\nPayment discounts\n");
    for entry in catalog.discounts.iter().filter(|entry| !entry.discount.is_zero()) {
        let _ = writeln!(
            out,
            "  {:<18} {:<20} {:>12}",
            entry.category.id(),
            entry.payment_method.label(),
            format!("-{}", entry.discount)
        );
    }
    out
}
