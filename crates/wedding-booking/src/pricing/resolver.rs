use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{AddonKind, DiscountCategory, EventType, PaymentMethod};
use super::error::PricingError;
use super::money::Cents;

/// Package price for a raw event type identifier.
///
/// Unknown or legacy identifiers are priced as a modest wedding so the booking flow never
/// blocks on stale input.
pub fn resolve_base_price(event_type: &str) -> Cents {
    match EventType::from_id(event_type) {
        Some(kind) => kind.base_price(),
        None => {
            debug!(event_type, "unrecognized event type, pricing as modest-wedding");
            EventType::ModestWedding.base_price()
        }
    }
}

pub fn resolve_addon_price(addon: AddonKind) -> Cents {
    addon.price()
}

/// String-keyed addon lookup. Addons are a closed set, so an unknown identifier is an error.
pub fn resolve_addon_price_by_id(addon: &str) -> Result<Cents, PricingError> {
    addon.parse::<AddonKind>().map(resolve_addon_price)
}

/// Discount bucket for a raw event type identifier.
pub fn resolve_discount_category(event_type: &str) -> DiscountCategory {
    match EventType::from_id(event_type) {
        Some(kind) => kind.discount_category(),
        // Unknown types land in the elopement bucket even though resolve_base_price prices
        // them as a modest wedding. Keep the two fallbacks separate.
        None => {
            debug!(event_type, "unrecognized event type, using elopement discounts");
            DiscountCategory::Elopement
        }
    }
}

/// Fixed discount for paying with `payment_method` on an `event_type` booking.
pub fn resolve_discount(payment_method: &str, event_type: &str) -> Cents {
    let category = resolve_discount_category(event_type);
    match PaymentMethod::from_id(payment_method) {
        Some(method) => category.discount_for(method),
        None => {
            debug!(payment_method, "unrecognized payment method, no discount");
            Cents::ZERO
        }
    }
}

/// Single itemized addon in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonLine {
    pub addon: AddonKind,
    pub price: Cents,
}

/// Priced result of a booking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: Cents,
    pub addon_lines: Vec<AddonLine>,
    pub discount: Cents,
    pub total: Cents,
}

impl PriceBreakdown {
    pub fn addons_total(&self) -> Cents {
        self.addon_lines.iter().map(|line| line.price).sum()
    }

    /// Base price plus add-ons, before the payment discount.
    pub fn subtotal(&self) -> Cents {
        self.base_price + self.addons_total()
    }
}

/// Prices a booking. Addon lines keep the caller's order and repeated addons are priced per
/// occurrence. The total is clamped at zero.
pub fn compute_total(
    event_type: &str,
    addons: &[AddonKind],
    payment_method: &str,
) -> PriceBreakdown {
    let addon_lines = addons
        .iter()
        .map(|&addon| AddonLine {
            addon,
            price: resolve_addon_price(addon),
        })
        .collect();

    let mut breakdown = PriceBreakdown {
        base_price: resolve_base_price(event_type),
        addon_lines,
        discount: resolve_discount(payment_method, event_type),
        total: Cents::ZERO,
    };
    breakdown.total = breakdown.subtotal().saturating_sub(breakdown.discount);
    breakdown
}
