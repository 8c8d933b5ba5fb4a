//! Fixed price tables for packages, add-ons and payment discounts.
//!
//! Every table is a `const fn` match over a closed enum so the values are compiled in and
//! shared by all callers without synchronization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PricingError;
use super::money::Cents;

/// Category of booking offered by the wizard's first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    ModestWedding,
    ModestElopement,
    VowRenewal,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::ModestWedding,
        EventType::ModestElopement,
        EventType::VowRenewal,
        EventType::Other,
    ];

    /// Exact match against the wire identifiers. Callers decide how to treat `None`.
    pub fn from_id(raw: &str) -> Option<Self> {
        match raw {
            "modest-wedding" => Some(EventType::ModestWedding),
            "modest-elopement" => Some(EventType::ModestElopement),
            "vow-renewal" => Some(EventType::VowRenewal),
            "other" => Some(EventType::Other),
            _ => None,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            EventType::ModestWedding => "modest-wedding",
            EventType::ModestElopement => "modest-elopement",
            EventType::VowRenewal => "vow-renewal",
            EventType::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EventType::ModestWedding => "Modest Wedding",
            EventType::ModestElopement => "Modest Elopement",
            EventType::VowRenewal => "Vow Renewal",
            EventType::Other => "Other Celebration",
        }
    }

    /// Flat package price before add-ons and discounts.
    pub const fn base_price(self) -> Cents {
        match self {
            EventType::ModestWedding => Cents(500_000),
            EventType::ModestElopement => Cents(100_000),
            EventType::VowRenewal => Cents(100_000),
            EventType::Other => Cents(500_000),
        }
    }

    pub const fn discount_category(self) -> DiscountCategory {
        match self {
            EventType::ModestWedding | EventType::Other => DiscountCategory::Wedding,
            EventType::ModestElopement | EventType::VowRenewal => DiscountCategory::Elopement,
        }
    }
}

/// Optional priced extras. Each entry prices a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddonKind {
    PhotoBook,
    ExtraTime,
    ByobBar,
    Rehearsal,
}

impl AddonKind {
    pub const ALL: [AddonKind; 4] = [
        AddonKind::PhotoBook,
        AddonKind::ExtraTime,
        AddonKind::ByobBar,
        AddonKind::Rehearsal,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            AddonKind::PhotoBook => "photoBook",
            AddonKind::ExtraTime => "extraTime",
            AddonKind::ByobBar => "byobBar",
            AddonKind::Rehearsal => "rehearsal",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AddonKind::PhotoBook => "Photo Book",
            AddonKind::ExtraTime => "Extra Time",
            AddonKind::ByobBar => "BYOB Bar",
            AddonKind::Rehearsal => "Rehearsal",
        }
    }

    pub const fn price(self) -> Cents {
        match self {
            AddonKind::PhotoBook => Cents(30_000),
            AddonKind::ExtraTime => Cents(100_000),
            AddonKind::ByobBar => Cents(40_000),
            AddonKind::Rehearsal => Cents(15_000),
        }
    }
}

impl FromStr for AddonKind {
    type Err = PricingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "photoBook" => Ok(AddonKind::PhotoBook),
            "extraTime" => Ok(AddonKind::ExtraTime),
            "byobBar" => Ok(AddonKind::ByobBar),
            "rehearsal" => Ok(AddonKind::Rehearsal),
            other => Err(PricingError::InvalidAddon(other.to_string())),
        }
    }
}

/// Bucket selecting which discount column applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountCategory {
    Wedding,
    Elopement,
}

impl DiscountCategory {
    pub const ALL: [DiscountCategory; 2] = [DiscountCategory::Wedding, DiscountCategory::Elopement];

    pub const fn id(self) -> &'static str {
        match self {
            DiscountCategory::Wedding => "wedding",
            DiscountCategory::Elopement => "elopement",
        }
    }

    /// Fixed reduction for paying with `method` in this category.
    pub const fn discount_for(self, method: PaymentMethod) -> Cents {
        match (self, method) {
            (DiscountCategory::Wedding, PaymentMethod::Ach | PaymentMethod::Echeck) => {
                Cents(10_000)
            }
            (DiscountCategory::Elopement, PaymentMethod::Ach | PaymentMethod::Echeck) => {
                Cents(3_000)
            }
            (_, PaymentMethod::Affirm | PaymentMethod::Paypal | PaymentMethod::Venmo) => {
                Cents::ZERO
            }
        }
    }
}

/// Payment methods the checkout step knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Ach,
    Affirm,
    Echeck,
    Paypal,
    Venmo,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Ach,
        PaymentMethod::Affirm,
        PaymentMethod::Echeck,
        PaymentMethod::Paypal,
        PaymentMethod::Venmo,
    ];

    /// Case-sensitive match; `"ACH"` is not `ach`.
    pub fn from_id(raw: &str) -> Option<Self> {
        match raw {
            "ach" => Some(PaymentMethod::Ach),
            "affirm" => Some(PaymentMethod::Affirm),
            "echeck" => Some(PaymentMethod::Echeck),
            "paypal" => Some(PaymentMethod::Paypal),
            "venmo" => Some(PaymentMethod::Venmo),
            _ => None,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            PaymentMethod::Ach => "ach",
            PaymentMethod::Affirm => "affirm",
            PaymentMethod::Echeck => "echeck",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Venmo => "venmo",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Ach => "ACH",
            PaymentMethod::Affirm => "Affirm",
            PaymentMethod::Echeck => "eCheck",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Venmo => "Venmo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeEntry {
    pub event_type: EventType,
    pub label: String,
    pub base_price: Cents,
    pub discount_category: DiscountCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonEntry {
    pub addon: AddonKind,
    pub label: String,
    pub price: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountEntry {
    pub category: DiscountCategory,
    pub payment_method: PaymentMethod,
    pub discount: Cents,
}

/// Read-only listing of every table, for callers that render option prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCatalog {
    pub event_types: Vec<EventTypeEntry>,
    pub addons: Vec<AddonEntry>,
    pub discounts: Vec<DiscountEntry>,
}

impl PriceCatalog {
    pub fn current() -> Self {
        let event_types = EventType::ALL
            .into_iter()
            .map(|event_type| EventTypeEntry {
                event_type,
                label: event_type.label().to_string(),
                base_price: event_type.base_price(),
                discount_category: event_type.discount_category(),
            })
            .collect();

        let addons = AddonKind::ALL
            .into_iter()
            .map(|addon| AddonEntry {
                addon,
                label: addon.label().to_string(),
                price: addon.price(),
            })
            .collect();

        let discounts = DiscountCategory::ALL
            .into_iter()
            .flat_map(|category| {
                PaymentMethod::ALL
                    .into_iter()
                    .map(move |payment_method| DiscountEntry {
                        category,
                        payment_method,
                        discount: category.discount_for(payment_method),
                    })
            })
            .collect();

        Self {
            event_types,
            addons,
            discounts,
        }
    }
}
