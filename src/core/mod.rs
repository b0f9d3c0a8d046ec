pub mod catalog;
pub mod export;
pub mod format;
pub mod pricing;
pub mod session;

pub use crate::domain::model::{Currency, CustomerInfo, Quotation, QuotationDocument};
pub use crate::domain::ports::{ConfigProvider, DocumentRenderer, Storage};
pub use crate::utils::error::Result;
