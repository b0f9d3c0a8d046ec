use std::sync::Arc;
use web_quoter::{Catalog, Currency, CustomerInfo, QuotationSession, QuoteError, WizardStep};

fn session() -> QuotationSession {
    QuotationSession::new(Arc::new(Catalog::builtin().unwrap()))
}

fn contact() -> CustomerInfo {
    CustomerInfo {
        name: "Ana Torres".to_string(),
        email: "ana@example.com".to_string(),
        phone: Some("+52 55 0000 0000".to_string()),
        message: Some("We want to launch in spring".to_string()),
    }
}

#[test]
fn test_running_total_follows_selection() {
    let mut session = session();
    assert_eq!(session.total(), 0);

    session.select_service("landing-page");
    assert_eq!(session.total(), 500);

    session.toggle_option("copywriting");
    session.toggle_option("analytics");
    assert_eq!(session.total(), 730);

    session.set_currency(Currency::Mxn);
    assert_eq!(session.total(), 9000 + 2700 + 1440);

    session.toggle_option("copywriting");
    assert_eq!(session.total(), 9000 + 1440);
}

#[test]
fn test_changing_service_resets_options() {
    let mut session = session();
    session.select_service("web-app");
    session.toggle_option("payments");
    assert_eq!(session.selected_options().len(), 1);

    session.select_service("mobile-app");
    assert!(session.selected_options().is_empty());
    assert_eq!(session.total(), 8000);
}

#[test]
fn test_clearing_service_resets_options() {
    let mut session = session();
    session.select_service("corporate-website");
    session.toggle_option("blog");
    session.toggle_option("seo");

    session.clear_service();
    assert!(session.service_id().is_none());
    assert!(session.selected_options().is_empty());
    assert_eq!(session.total(), 0);
    assert!(session.summary().is_none());
}

#[test]
fn test_wizard_flow() {
    let mut session = session();
    assert_eq!(session.step(), WizardStep::Service);
    assert_eq!(session.progress(), (1, 3));

    let err = session.advance().unwrap_err();
    assert!(matches!(err, QuoteError::WizardError { .. }));

    session.select_service("landing-page");
    assert_eq!(session.advance().unwrap(), WizardStep::Contact);
    assert_eq!(session.progress(), (2, 3));
    assert!(!session.can_advance());

    session.submit_contact(contact()).unwrap();
    assert_eq!(session.advance().unwrap(), WizardStep::Review);
    assert_eq!(session.progress(), (3, 3));
    assert!(session.advance().is_err());

    assert_eq!(session.back(), WizardStep::Contact);
    assert_eq!(session.back(), WizardStep::Service);
    assert_eq!(session.back(), WizardStep::Service);
}

#[test]
fn test_unknown_service_blocks_first_step() {
    let mut session = session();
    session.select_service("not-in-catalog");
    assert_eq!(session.total(), 0);
    assert!(!session.can_advance());
}

#[test]
fn test_invalid_email_rejected() {
    let mut session = session();
    let mut info = contact();
    info.email = "not-an-email".to_string();

    let err = session.submit_contact(info).unwrap_err();
    assert!(matches!(err, QuoteError::ValidationError { ref field, .. } if field == "email"));
    assert!(session.customer().is_none());
}

#[test]
fn test_quotation_snapshot() {
    let mut session = session();
    session.select_service("mobile-app");
    session.toggle_option("offline-mode");
    session.set_currency(Currency::Mxn);
    session.submit_contact(contact()).unwrap();

    let quotation = session.quotation();
    assert_eq!(quotation.service_id, "mobile-app");
    assert_eq!(quotation.selected_options, vec!["offline-mode"]);
    assert_eq!(quotation.currency, Currency::Mxn);
    assert_eq!(quotation.customer.unwrap().name, "Ana Torres");
}
