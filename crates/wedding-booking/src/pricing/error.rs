/// Failures surfaced by the pricing engine.
///
/// Event type and payment method lookups never fail; only closed-set identifiers do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("unrecognized addon '{0}'")]
    InvalidAddon(String),
}
