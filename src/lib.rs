pub mod adapters;
pub mod config;
pub mod core;
pub mod document;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{load_catalog, TomlConfig};

pub use adapters::LocalStorage;
pub use crate::core::{
    catalog::Catalog,
    export::QuotationExporter,
    format::format_price,
    session::{QuotationSession, WizardStep},
};
pub use document::PdfRenderer;
pub use domain::model::{Currency, CustomerInfo, Quotation};
pub use utils::error::{QuoteError, Result};
