//! Pricing engine for the booking flow.
//!
//! Maps an event type, selected add-ons and a payment method to an itemized breakdown in
//! integer cents. Every lookup is a read of a compiled-in table; the functions here hold no
//! state and are safe to call from any number of tasks.

mod catalog;
mod error;
mod money;
mod quote;
mod resolver;
pub mod router;

pub use catalog::{
    AddonEntry, AddonKind, DiscountCategory, DiscountEntry, EventType, EventTypeEntry,
    PaymentMethod, PriceCatalog,
};
pub use error::PricingError;
pub use money::Cents;
pub use quote::{BookingSelections, Quote, QuoteRequest, SummaryLine, SummaryLineKind};
pub use resolver::{
    compute_total, resolve_addon_price, resolve_addon_price_by_id, resolve_base_price,
    resolve_discount, resolve_discount_category, AddonLine, PriceBreakdown,
};
pub use router::pricing_router;
