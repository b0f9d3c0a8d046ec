use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Mxn,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Mxn];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Mxn => "mxn",
        }
    }

    pub fn symbol(&self) -> &'static str {
        "$"
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "mxn" => Ok(Currency::Mxn),
            other => Err(QuoteError::validation(
                "currency",
                format!("unsupported currency '{}', expected usd or mxn", other),
            )),
        }
    }
}

/// Fixed amount per currency, in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub usd: u64,
    pub mxn: u64,
}

impl Price {
    pub fn in_currency(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Mxn => self.mxn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: Price,
    #[serde(default)]
    pub options: Vec<PricingOption>,
}

impl Service {
    pub fn option(&self, option_id: &str) -> Option<&PricingOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyOption {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    pub default: String,
    pub options: Vec<CurrencyOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub usd_to_mxn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    #[serde(default)]
    pub last_updated: String,
    pub exchange_rate: ExchangeRate,
}

/// On-disk shape of the price catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub services: Vec<Service>,
    pub currency: CurrencySettings,
    pub metadata: CatalogMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A service with its selected options resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSummary<'a> {
    pub service: &'a Service,
    pub base_price: u64,
    pub selected_options: Vec<&'a PricingOption>,
    pub options_total: u64,
    pub total: u64,
    pub currency: Currency,
}

/// What the user picked. Totals are never stored here; they are derived
/// from the catalog on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quotation {
    pub service_id: String,
    pub selected_options: Vec<String>,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInfo>,
}

/// Everything the renderer places on the page, resolved up front so the
/// rendering step never touches the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationDocument {
    pub service: Service,
    pub selected_options: Vec<PricingOption>,
    pub total: u64,
    pub currency: Currency,
    pub customer: Option<CustomerInfo>,
    pub issued_on: chrono::NaiveDate,
}

impl QuotationDocument {
    pub fn from_summary(
        summary: &ServiceSummary<'_>,
        customer: Option<CustomerInfo>,
        issued_on: chrono::NaiveDate,
    ) -> Self {
        Self {
            service: summary.service.clone(),
            selected_options: summary.selected_options.iter().map(|o| (*o).clone()).collect(),
            total: summary.total,
            currency: summary.currency,
            customer,
            issued_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" MXN ".parse::<Currency>().unwrap(), Currency::Mxn);
        assert!("eur".parse::<Currency>().is_err());
    }

    #[test]
    fn test_service_deserializes_camel_case() {
        let json = r#"{
            "id": "landing-page",
            "name": "Landing Page",
            "description": "Single page site",
            "basePrice": { "usd": 500, "mxn": 9000 },
            "options": [
                { "id": "seo", "name": "SEO", "price": { "usd": 150, "mxn": 2700 } }
            ]
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.base_price.in_currency(Currency::Mxn), 9000);
        assert_eq!(service.option("seo").map(|o| o.price.usd), Some(150));
        assert!(service.option("seo").unwrap().description.is_none());
        assert!(service.option("hosting").is_none());
    }
}
