use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::{AddonKind, EventType, PaymentMethod};
use super::error::PricingError;
use super::money::Cents;
use super::resolver::{compute_total, PriceBreakdown};

/// Extras chosen on the photo-options and add-on steps of the booking wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelections {
    #[serde(default)]
    pub photo_books: u8,
    #[serde(default)]
    pub extra_time: bool,
    #[serde(default)]
    pub byob_bar: bool,
    #[serde(default)]
    pub rehearsal: bool,
}

impl BookingSelections {
    /// Expands the selections into the addon sequence the resolver prices: one photo book
    /// line per book, then extra time, BYOB bar and rehearsal.
    pub fn addons(&self) -> Vec<AddonKind> {
        let mut addons = Vec::with_capacity(usize::from(self.photo_books) + 3);
        addons.extend(std::iter::repeat(AddonKind::PhotoBook).take(usize::from(self.photo_books)));
        if self.extra_time {
            addons.push(AddonKind::ExtraTime);
        }
        if self.byob_bar {
            addons.push(AddonKind::ByobBar);
        }
        if self.rehearsal {
            addons.push(AddonKind::Rehearsal);
        }
        addons
    }
}

/// Raw pricing request as received from the wizard or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub event_type: String,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selections: Option<BookingSelections>,
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub payment_method: String,
}

/// Missing or null identifiers become `""`, which the resolver prices through its fallbacks.
fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl QuoteRequest {
    /// Explicit addon identifiers in request order, followed by any wizard selections.
    pub fn resolved_addons(&self) -> Result<Vec<AddonKind>, PricingError> {
        let mut addons = self
            .addons
            .iter()
            .map(|raw| raw.parse::<AddonKind>())
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(selections) = &self.selections {
            addons.extend(selections.addons());
        }
        Ok(addons)
    }

    pub fn price(&self) -> Result<Quote, PricingError> {
        let addons = self.resolved_addons()?;
        let breakdown = compute_total(&self.event_type, &addons, &self.payment_method);
        Ok(Quote {
            event_type: self.event_type.clone(),
            payment_method: self.payment_method.clone(),
            breakdown,
        })
    }
}

/// Breakdown together with the identifiers it was priced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub event_type: String,
    pub payment_method: String,
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLineKind {
    Package,
    Addon,
    Discount,
    Total,
}

/// Row of the booking summary screen. Discount rows carry a positive amount that is
/// subtracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub kind: SummaryLineKind,
    pub label: String,
    pub amount: Cents,
}

impl SummaryLine {
    pub fn display_amount(&self) -> String {
        match self.kind {
            SummaryLineKind::Discount => format!("-{}", self.amount),
            _ => self.amount.to_string(),
        }
    }
}

impl Quote {
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        let mut lines = Vec::with_capacity(self.breakdown.addon_lines.len() + 3);

        let package_label = match EventType::from_id(&self.event_type) {
            Some(kind) => format!("{} package", kind.label()),
            None => "Base package".to_string(),
        };
        lines.push(SummaryLine {
            kind: SummaryLineKind::Package,
            label: package_label,
            amount: self.breakdown.base_price,
        });

        lines.extend(self.breakdown.addon_lines.iter().map(|line| SummaryLine {
            kind: SummaryLineKind::Addon,
            label: line.addon.label().to_string(),
            amount: line.price,
        }));

        if !self.breakdown.discount.is_zero() {
            let label = match PaymentMethod::from_id(&self.payment_method) {
                Some(method) => format!("{} discount", method.label()),
                None => "Payment discount".to_string(),
            };
            lines.push(SummaryLine {
                kind: SummaryLineKind::Discount,
                label,
                amount: self.breakdown.discount,
            });
        }

        lines.push(SummaryLine {
            kind: SummaryLineKind::Total,
            label: "Total".to_string(),
            amount: self.breakdown.total,
        });

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(event_type: &str, addons: &[&str], payment_method: &str) -> QuoteRequest {
        QuoteRequest {
            event_type: event_type.to_string(),
            addons: addons.iter().map(|addon| addon.to_string()).collect(),
            selections: None,
            payment_method: payment_method.to_string(),
        }
    }

    #[test]
    fn selections_expand_in_wizard_order() {
        let selections = BookingSelections {
            photo_books: 2,
            extra_time: false,
            byob_bar: true,
            rehearsal: true,
        };
        assert_eq!(
            selections.addons(),
            vec![
                AddonKind::PhotoBook,
                AddonKind::PhotoBook,
                AddonKind::ByobBar,
                AddonKind::Rehearsal,
            ]
        );
        assert!(BookingSelections::default().addons().is_empty());
    }

    #[test]
    fn missing_or_null_identifiers_price_at_fallback_tier() {
        for body in [
            r#"{"payment_method":"ach"}"#,
            r#"{"event_type":null,"payment_method":"ach"}"#,
        ] {
            let request: QuoteRequest = serde_json::from_str(body).expect("request parses");
            assert_eq!(request.event_type, "");

            let quote = request.price().expect("quote prices");
            assert_eq!(quote.breakdown.base_price, Cents(500_000));
            assert_eq!(quote.breakdown.discount, Cents(3_000));
        }

        let request: QuoteRequest =
            serde_json::from_str(r#"{"event_type":"other","payment_method":null}"#)
                .expect("request parses");
        assert_eq!(request.payment_method, "");
    }

    #[test]
    fn explicit_addons_precede_selections() {
        let mut request = request("modest-wedding", &["extraTime"], "ach");
        request.selections = Some(BookingSelections {
            photo_books: 1,
            ..BookingSelections::default()
        });

        let addons = request.resolved_addons().expect("addons resolve");
        assert_eq!(addons, vec![AddonKind::ExtraTime, AddonKind::PhotoBook]);
    }

    #[test]
    fn unknown_addon_rejects_whole_request() {
        let request = request("modest-wedding", &["photoBook", "fireworks"], "ach");
        assert_eq!(
            request.price(),
            Err(PricingError::InvalidAddon("fireworks".to_string()))
        );
    }

    #[test]
    fn summary_lists_package_addons_discount_and_total() {
        let quote = request("modest-wedding", &["photoBook"], "ach")
            .price()
            .expect("quote prices");

        let rendered: Vec<(String, String)> = quote
            .summary_lines()
            .iter()
            .map(|line| (line.label.clone(), line.display_amount()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Modest Wedding package".to_string(), "$5,000.00".to_string()),
                ("Photo Book".to_string(), "$300.00".to_string()),
                ("ACH discount".to_string(), "-$100.00".to_string()),
                ("Total".to_string(), "$5,200.00".to_string()),
            ]
        );
    }

    #[test]
    fn summary_omits_zero_discount_and_names_unknown_package() {
        let quote = request("legacy-gala", &[], "paypal")
            .price()
            .expect("quote prices");
        let lines = quote.summary_lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Base package");
        assert_eq!(lines[0].amount, Cents(500_000));
        assert!(lines
            .iter()
            .all(|line| line.kind != SummaryLineKind::Discount));
    }

    #[test]
    fn quote_serializes_flat_breakdown() {
        let quote = request("modest-elopement", &["rehearsal"], "echeck")
            .price()
            .expect("quote prices");
        let value = serde_json::to_value(&quote).expect("serialize quote");

        assert_eq!(value["event_type"], "modest-elopement");
        assert_eq!(value["base_price"], 100_000);
        assert_eq!(value["addon_lines"][0]["addon"], "rehearsal");
        assert_eq!(value["addon_lines"][0]["price"], 15_000);
        assert_eq!(value["discount"], 3_000);
        assert_eq!(value["total"], 112_000);
    }
}
