use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use super::catalog::PriceCatalog;
use super::quote::{Quote, QuoteRequest};
use crate::error::AppError;

/// Router builder exposing the catalog and quote endpoints.
pub fn pricing_router() -> Router {
    Router::new()
        .route("/api/v1/pricing/catalog", get(catalog_handler))
        .route("/api/v1/pricing/quote", post(quote_handler))
}

pub(crate) async fn catalog_handler() -> Json<PriceCatalog> {
    Json(PriceCatalog::current())
}

/// Body rejections are reported through `AppError` and share its JSON error body.
pub(crate) async fn quote_handler(
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<Quote>, AppError> {
    let Json(request) = payload?;
    let quote = request.price()?;

    info!(
        event_type = %quote.event_type,
        payment_method = %quote.payment_method,
        addons = quote.breakdown.addon_lines.len(),
        total = quote.breakdown.total.get(),
        "priced booking quote"
    );

    Ok(Json(quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{Cents, PricingError};

    #[tokio::test]
    async fn quote_handler_prices_request() {
        let request = QuoteRequest {
            event_type: "modest-wedding".to_string(),
            addons: vec!["photoBook".to_string()],
            selections: None,
            payment_method: "ach".to_string(),
        };

        let Json(quote) = quote_handler(Ok(Json(request))).await.expect("quote prices");

        assert_eq!(quote.breakdown.total, Cents(520_000));
        assert_eq!(quote.breakdown.discount, Cents(10_000));
    }

    #[tokio::test]
    async fn quote_handler_surfaces_invalid_addon() {
        let request = QuoteRequest {
            event_type: "modest-wedding".to_string(),
            addons: vec!["doveRelease".to_string()],
            selections: None,
            payment_method: "ach".to_string(),
        };

        match quote_handler(Ok(Json(request))).await {
            Err(AppError::Pricing(PricingError::InvalidAddon(addon))) => {
                assert_eq!(addon, "doveRelease")
            }
            other => panic!("expected invalid addon error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn catalog_handler_returns_all_tables() {
        let Json(catalog) = catalog_handler().await;
        assert_eq!(catalog, PriceCatalog::current());
    }
}
