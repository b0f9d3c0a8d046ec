use crate::core::catalog::Catalog;
use crate::domain::model::{Currency, CustomerInfo, Quotation, ServiceSummary};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_email, validate_required_input};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Service,
    Contact,
    Review,
}

impl WizardStep {
    pub const COUNT: usize = 3;

    pub fn number(&self) -> usize {
        match self {
            WizardStep::Service => 1,
            WizardStep::Contact => 2,
            WizardStep::Review => 3,
        }
    }
}

/// In-memory state of one user's quotation wizard.
#[derive(Debug, Clone)]
pub struct QuotationSession {
    catalog: Arc<Catalog>,
    step: WizardStep,
    service_id: Option<String>,
    selected_options: Vec<String>,
    currency: Currency,
    customer: Option<CustomerInfo>,
}

impl QuotationSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let currency = catalog.default_currency();
        Self {
            catalog,
            step: WizardStep::Service,
            service_id: None,
            selected_options: Vec::new(),
            currency,
            customer: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// `(current step, total steps)`, e.g. `(1, 3)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.number(), WizardStep::COUNT)
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn selected_options(&self) -> &[String] {
        &self.selected_options
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn customer(&self) -> Option<&CustomerInfo> {
        self.customer.as_ref()
    }

    /// Picks a service. Any previously selected options are dropped, even
    /// when the same service is picked again.
    pub fn select_service(&mut self, service_id: impl Into<String>) {
        let service_id = service_id.into();
        tracing::debug!("Service selected: {}", service_id);
        self.service_id = Some(service_id);
        self.selected_options.clear();
    }

    pub fn clear_service(&mut self) {
        self.service_id = None;
        self.selected_options.clear();
    }

    /// Adds the option if absent, removes it otherwise. Returns whether the
    /// option is selected afterwards. Ids that do not belong to the selected
    /// service are ignored.
    pub fn toggle_option(&mut self, option_id: &str) -> bool {
        let Some(service_id) = self.service_id.as_deref() else {
            return false;
        };
        let Some(service) = self.catalog.service(service_id) else {
            return false;
        };
        if service.option(option_id).is_none() {
            tracing::debug!("Ignoring option '{}' not offered by '{}'", option_id, service_id);
            return false;
        }

        if let Some(pos) = self.selected_options.iter().position(|id| id == option_id) {
            self.selected_options.remove(pos);
            false
        } else {
            self.selected_options.push(option_id.to_string());
            true
        }
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Running total, always derived from the catalog.
    pub fn total(&self) -> u64 {
        match self.service_id.as_deref() {
            Some(id) => self.catalog.total_price(id, &self.selected_options, self.currency),
            None => 0,
        }
    }

    pub fn summary(&self) -> Option<ServiceSummary<'_>> {
        let id = self.service_id.as_deref()?;
        self.catalog
            .service_summary(id, &self.selected_options, self.currency)
    }

    pub fn submit_contact(&mut self, info: CustomerInfo) -> Result<()> {
        validate_required_input("name", &info.name)?;
        validate_email("email", &info.email)?;
        let message = info.message.as_deref().unwrap_or_default();
        validate_required_input("message", message)?;

        let phone = info
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        self.customer = Some(CustomerInfo {
            name: info.name.trim().to_string(),
            email: info.email.trim().to_string(),
            phone,
            message: Some(message.trim().to_string()),
        });
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Service => self
                .service_id
                .as_deref()
                .is_some_and(|id| self.catalog.service(id).is_some()),
            WizardStep::Contact => self.customer.is_some(),
            WizardStep::Review => false,
        }
    }

    pub fn advance(&mut self) -> Result<WizardStep> {
        if !self.can_advance() {
            let message = match self.step {
                WizardStep::Service => "Select a service before continuing",
                WizardStep::Contact => "Submit your contact details before continuing",
                WizardStep::Review => "Already at the last step",
            };
            return Err(QuoteError::WizardError {
                message: message.to_string(),
            });
        }

        self.step = match self.step {
            WizardStep::Service => WizardStep::Contact,
            WizardStep::Contact | WizardStep::Review => WizardStep::Review,
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Service | WizardStep::Contact => WizardStep::Service,
            WizardStep::Review => WizardStep::Contact,
        };
        self.step
    }

    pub fn quotation(&self) -> Quotation {
        Quotation {
            service_id: self.service_id.clone().unwrap_or_default(),
            selected_options: self.selected_options.clone(),
            currency: self.currency,
            customer: self.customer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuotationSession {
        QuotationSession::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut session = session();
        session.select_service("landing-page");

        assert!(session.toggle_option("copywriting"));
        assert_eq!(session.selected_options(), ["copywriting"]);
        assert!(!session.toggle_option("copywriting"));
        assert!(session.selected_options().is_empty());
    }

    #[test]
    fn test_toggle_without_service_is_ignored() {
        let mut session = session();
        assert!(!session.toggle_option("copywriting"));
        assert!(session.selected_options().is_empty());
    }

    #[test]
    fn test_foreign_option_is_ignored() {
        let mut session = session();
        session.select_service("landing-page");
        assert!(!session.toggle_option("payments"));
        assert!(session.selected_options().is_empty());
    }

    #[test]
    fn test_contact_phone_blank_becomes_none() {
        let mut session = session();
        session
            .submit_contact(CustomerInfo {
                name: " Ana ".to_string(),
                email: "ana@example.com".to_string(),
                phone: Some("  ".to_string()),
                message: Some("Need a site".to_string()),
            })
            .unwrap();

        let customer = session.customer().unwrap();
        assert_eq!(customer.name, "Ana");
        assert!(customer.phone.is_none());
    }

    #[test]
    fn test_contact_requires_message() {
        let mut session = session();
        let err = session
            .submit_contact(CustomerInfo {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                phone: None,
                message: None,
            })
            .unwrap_err();
        assert!(matches!(err, QuoteError::ValidationError { ref field, .. } if field == "message"));
        assert!(session.customer().is_none());
    }
}
