use crate::core::catalog::Catalog;
use crate::document::snapshot::{render_snapshot, DEFAULT_BAND_HEIGHT_MM};
use crate::domain::model::{Quotation, QuotationDocument};
use crate::domain::ports::{DocumentRenderer, Storage};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::validate_file_name;
use chrono::{DateTime, Local, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// `<prefix>-<service id>-<unix millis>.pdf`
pub fn export_file_name(prefix: &str, service_id: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}-{}.pdf", prefix, service_id, at.timestamp_millis())
}

/// Counts one in-flight export for as long as it lives.
struct BusyGuard<'a>(&'a AtomicUsize);

impl<'a> BusyGuard<'a> {
    fn start(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// One-shot document export. `is_busy` reports whether any export is in
/// flight; concurrent calls are not rejected.
pub struct QuotationExporter<S: Storage, R: DocumentRenderer> {
    storage: S,
    renderer: R,
    catalog: Arc<Catalog>,
    file_prefix: String,
    band_height_mm: f32,
    in_flight: AtomicUsize,
}

impl<S: Storage, R: DocumentRenderer> QuotationExporter<S, R> {
    pub fn new(storage: S, renderer: R, catalog: Arc<Catalog>) -> Self {
        Self {
            storage,
            renderer,
            catalog,
            file_prefix: "quotation".to_string(),
            band_height_mm: DEFAULT_BAND_HEIGHT_MM,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_band_height(mut self, band_height_mm: f32) -> Self {
        self.band_height_mm = band_height_mm;
        self
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Renders the quotation and stores it, returning where it was written.
    /// Every failure is reported as [`QuoteError::ExportError`].
    pub async fn export(&self, quotation: &Quotation) -> Result<String> {
        let _busy = BusyGuard::start(&self.in_flight);
        tracing::info!("Exporting quotation for service '{}'", quotation.service_id);

        self.try_export(quotation).await.map_err(|e| {
            tracing::error!("Quotation export failed: {}", e);
            match e {
                QuoteError::ExportError { .. } => e,
                other => QuoteError::ExportError {
                    message: other.to_string(),
                },
            }
        })
    }

    async fn try_export(&self, quotation: &Quotation) -> Result<String> {
        let summary = self
            .catalog
            .service_summary(
                &quotation.service_id,
                &quotation.selected_options,
                quotation.currency,
            )
            .ok_or_else(|| QuoteError::ExportError {
                message: format!("unknown service '{}'", quotation.service_id),
            })?;

        let document = QuotationDocument::from_summary(
            &summary,
            quotation.customer.clone(),
            Local::now().date_naive(),
        );

        let bytes = self.renderer.render(document).await?;
        let file_name = export_file_name(&self.file_prefix, &quotation.service_id, Utc::now());
        tracing::debug!("Writing {} ({} bytes)", file_name, bytes.len());

        let path = self.storage.write_file(&file_name, &bytes).await?;
        tracing::info!("Quotation saved to {}", path);
        Ok(path)
    }

    /// Image-per-page export of an already rendered snapshot. `file_name`
    /// must be a bare name inside the storage root.
    pub async fn export_snapshot(&self, image_bytes: Vec<u8>, file_name: &str) -> Result<String> {
        validate_file_name("file", file_name)?;
        let _busy = BusyGuard::start(&self.in_flight);
        let band_height = self.band_height_mm;
        let title = file_name.to_string();

        let result = async {
            let bytes = tokio::task::spawn_blocking(move || {
                render_snapshot(&image_bytes, &title, band_height)
            })
            .await
            .map_err(|e| QuoteError::render(format!("snapshot task failed: {}", e)))??;
            self.storage.write_file(file_name, &bytes).await
        }
        .await;

        result.map_err(|e| {
            tracing::error!("Snapshot export failed: {}", e);
            QuoteError::ExportError {
                message: e.to_string(),
            }
        })
    }
}
