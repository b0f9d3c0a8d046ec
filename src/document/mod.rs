pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod snapshot;
pub mod template;

pub use layout::{layout_quotation, PageLayout};
pub use pdf::PdfRenderer;
pub use template::DocumentTemplate;
