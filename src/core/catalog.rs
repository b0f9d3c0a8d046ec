use crate::domain::model::{CatalogData, Currency, CurrencyOption, PricingOption, Service};
use crate::utils::error::{QuoteError, Result};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/pricing.json");

/// Validated, read-only price catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    data: CatalogData,
    default_currency: Currency,
}

impl Catalog {
    /// Catalog bundled with the crate, used when no catalog path is configured.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(content)?;
        Self::from_data(data)
    }

    pub fn from_data(data: CatalogData) -> Result<Self> {
        let mut service_ids = HashSet::new();
        for service in &data.services {
            if service.id.trim().is_empty() {
                return Err(QuoteError::catalog("service id cannot be empty"));
            }
            if !service_ids.insert(service.id.as_str()) {
                return Err(QuoteError::catalog(format!(
                    "duplicate service id '{}'",
                    service.id
                )));
            }

            let mut option_ids = HashSet::new();
            for option in &service.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(QuoteError::catalog(format!(
                        "duplicate option id '{}' in service '{}'",
                        option.id, service.id
                    )));
                }
            }
        }

        let default_currency: Currency = data
            .currency
            .default
            .parse()
            .map_err(|_| QuoteError::catalog(format!(
                "default currency '{}' is not supported",
                data.currency.default
            )))?;

        if !data
            .currency
            .options
            .iter()
            .any(|opt| opt.code.eq_ignore_ascii_case(default_currency.code()))
        {
            return Err(QuoteError::catalog(format!(
                "default currency '{}' is missing from currency.options",
                default_currency
            )));
        }

        let rate = data.metadata.exchange_rate.usd_to_mxn;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(QuoteError::catalog(format!(
                "exchange rate must be a positive number, got {}",
                rate
            )));
        }

        tracing::debug!(
            "Catalog loaded: {} services, default currency {}",
            data.services.len(),
            default_currency
        );

        Ok(Self {
            data,
            default_currency,
        })
    }

    pub fn services(&self) -> &[Service] {
        &self.data.services
    }

    pub fn service(&self, service_id: &str) -> Option<&Service> {
        self.data.services.iter().find(|s| s.id == service_id)
    }

    /// Options of a service; empty for an unknown id.
    pub fn service_options(&self, service_id: &str) -> &[PricingOption] {
        self.service(service_id)
            .map(|s| s.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn currency_options(&self) -> &[CurrencyOption] {
        &self.data.currency.options
    }

    pub fn default_currency(&self) -> Currency {
        self.default_currency
    }

    pub fn usd_to_mxn_rate(&self) -> f64 {
        self.data.metadata.exchange_rate.usd_to_mxn
    }

    pub fn last_updated(&self) -> &str {
        &self.data.metadata.last_updated
    }
}
