//! Price lookups against the catalog.
//!
//! Unknown service and option ids are treated as absent and contribute
//! nothing; none of these operations fail. Repeated option ids in a
//! selection are counted once.

use crate::core::catalog::Catalog;
use crate::domain::model::{Currency, PricingOption, ServiceSummary};
use std::collections::HashSet;

impl Catalog {
    /// Base price of the service plus every selected option it knows about.
    /// Returns 0 when the service does not exist.
    pub fn total_price<S: AsRef<str>>(
        &self,
        service_id: &str,
        selected_options: &[S],
        currency: Currency,
    ) -> u64 {
        self.service_summary(service_id, selected_options, currency)
            .map(|summary| summary.total)
            .unwrap_or(0)
    }

    pub fn service_summary<S: AsRef<str>>(
        &self,
        service_id: &str,
        selected_options: &[S],
        currency: Currency,
    ) -> Option<ServiceSummary<'_>> {
        let service = self.service(service_id)?;
        let base_price = service.base_price.in_currency(currency);

        let mut seen = HashSet::new();
        let resolved: Vec<&PricingOption> = selected_options
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| seen.insert(*id))
            .filter_map(|id| service.option(id))
            .collect();

        // Saturates so an oversized catalog still yields a total instead of a panic.
        let options_total = resolved
            .iter()
            .map(|opt| opt.price.in_currency(currency))
            .fold(0u64, u64::saturating_add);

        Some(ServiceSummary {
            service,
            base_price,
            selected_options: resolved,
            options_total,
            total: base_price.saturating_add(options_total),
            currency,
        })
    }

    pub fn convert_usd_to_mxn(&self, usd: u64) -> u64 {
        (usd as f64 * self.usd_to_mxn_rate()).round() as u64
    }

    pub fn convert_mxn_to_usd(&self, mxn: u64) -> u64 {
        (mxn as f64 / self.usd_to_mxn_rate()).round() as u64
    }

    /// Converts `amount` from one currency to the other using the catalog rate.
    pub fn convert(&self, amount: u64, from: Currency, to: Currency) -> u64 {
        match (from, to) {
            (Currency::Usd, Currency::Mxn) => self.convert_usd_to_mxn(amount),
            (Currency::Mxn, Currency::Usd) => self.convert_mxn_to_usd(amount),
            _ => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "services": [{
                    "id": "web",
                    "name": "Web",
                    "description": "Website",
                    "basePrice": { "usd": 1000, "mxn": 18000 },
                    "options": [
                        { "id": "seo", "name": "SEO", "price": { "usd": 200, "mxn": 3600 } },
                        { "id": "blog", "name": "Blog", "price": { "usd": 300, "mxn": 5400 } }
                    ]
                }],
                "currency": { "default": "usd", "options": [{ "code": "usd", "symbol": "$", "name": "USD" }] },
                "metadata": { "lastUpdated": "", "exchangeRate": { "usd_to_mxn": 17.5 } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_total_with_options() {
        let catalog = catalog();
        assert_eq!(catalog.total_price("web", &["seo", "blog"], Currency::Usd), 1500);
        assert_eq!(catalog.total_price("web", &["seo"], Currency::Mxn), 21600);
        assert_eq!(catalog.total_price::<&str>("web", &[], Currency::Usd), 1000);
    }

    #[test]
    fn test_unknown_service_is_zero() {
        assert_eq!(catalog().total_price("nope", &["seo"], Currency::Usd), 0);
        assert!(catalog().service_summary("nope", &["seo"], Currency::Usd).is_none());
    }

    #[test]
    fn test_unknown_options_ignored() {
        assert_eq!(catalog().total_price("web", &["seo", "hosting"], Currency::Usd), 1200);
    }

    #[test]
    fn test_repeated_option_counted_once() {
        let catalog = catalog();
        assert_eq!(catalog.total_price("web", &["seo", "seo"], Currency::Usd), 1200);

        let summary = catalog
            .service_summary("web", &["blog", "seo", "blog"], Currency::Usd)
            .unwrap();
        let ids: Vec<&str> = summary.selected_options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["blog", "seo"]);
        assert_eq!(summary.options_total, 500);
        assert_eq!(summary.total, summary.base_price + summary.options_total);
    }

    #[test]
    fn test_oversized_prices_saturate() {
        let catalog = Catalog::from_json_str(&format!(
            r#"{{
                "services": [{{
                    "id": "s",
                    "name": "S",
                    "description": "",
                    "basePrice": {{ "usd": {max}, "mxn": 1 }},
                    "options": [
                        {{ "id": "o", "name": "O", "price": {{ "usd": 1, "mxn": 1 }} }},
                        {{ "id": "p", "name": "P", "price": {{ "usd": {max}, "mxn": {max} }} }}
                    ]
                }}],
                "currency": {{ "default": "usd", "options": [{{ "code": "usd", "symbol": "$", "name": "USD" }}] }},
                "metadata": {{ "lastUpdated": "", "exchangeRate": {{ "usd_to_mxn": 17.5 }} }}
            }}"#,
            max = u64::MAX
        ))
        .unwrap();

        assert_eq!(catalog.total_price("s", &["o"], Currency::Usd), u64::MAX);
        assert_eq!(catalog.total_price("s", &["o", "p"], Currency::Mxn), u64::MAX);
        let summary = catalog.service_summary("s", &["o", "p"], Currency::Usd).unwrap();
        assert_eq!(summary.options_total, u64::MAX);
    }

    #[test]
    fn test_conversion_rounds() {
        let catalog = catalog();
        assert_eq!(catalog.convert_usd_to_mxn(100), 1750);
        assert_eq!(catalog.convert_usd_to_mxn(1), 18);
        assert_eq!(catalog.convert_mxn_to_usd(1750), 100);
        assert_eq!(catalog.convert_mxn_to_usd(10), 1);
        assert_eq!(catalog.convert(42, Currency::Usd, Currency::Usd), 42);
    }
}
