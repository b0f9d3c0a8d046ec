//! Image-per-page export: a rendered snapshot of the quotation is scaled to
//! the page width and cut into fixed-height bands, one band per page.

use crate::document::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::utils::error::{QuoteError, Result};
use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

pub const DEFAULT_BAND_HEIGHT_MM: f32 = 295.0;

/// Horizontal slice of the snapshot, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub top: u32,
    pub height: u32,
}

/// Splits an image of `width` x `height` pixels into bands that each cover
/// `band_height_mm` once the image is scaled to `page_width_mm`.
pub fn snapshot_bands(width: u32, height: u32, page_width_mm: f32, band_height_mm: f32) -> Vec<Band> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let band_px = ((band_height_mm / page_width_mm) * width as f32).round().max(1.0) as u32;
    let mut bands = Vec::new();
    let mut top = 0;
    while top < height {
        let band_height = band_px.min(height - top);
        bands.push(Band {
            top,
            height: band_height,
        });
        top += band_height;
    }
    bands
}

/// Builds a multi-page PDF from an encoded snapshot image (PNG, JPEG, ...).
pub fn render_snapshot(image_bytes: &[u8], title: &str, band_height_mm: f32) -> Result<Vec<u8>> {
    let image = image_crate::load_from_memory(image_bytes)
        .map_err(|e| QuoteError::render(format!("cannot decode snapshot image: {}", e)))?;
    render_snapshot_image(&image, title, band_height_mm)
}

/// Fails when a band would not fit on one page.
pub fn render_snapshot_image(image: &DynamicImage, title: &str, band_height_mm: f32) -> Result<Vec<u8>> {
    if !(band_height_mm > 0.0 && band_height_mm <= PAGE_HEIGHT_MM) {
        return Err(QuoteError::render(format!(
            "band height {} mm does not fit a {} mm page",
            band_height_mm, PAGE_HEIGHT_MM
        )));
    }

    let (width, height) = image.dimensions();
    let bands = snapshot_bands(width, height, PAGE_WIDTH_MM, band_height_mm);
    if bands.is_empty() {
        return Err(QuoteError::render("snapshot image is empty"));
    }

    tracing::debug!(
        "Slicing {}x{} snapshot into {} page(s)",
        width,
        height,
        bands.len()
    );

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Snapshot");
    // Pixels per inch that make the image span the full page width.
    let dpi = width as f32 / (PAGE_WIDTH_MM / 25.4);
    let mm_per_px = PAGE_WIDTH_MM / width as f32;

    for (i, band) in bands.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Snapshot")
        };
        let layer = doc.get_page(page).get_layer(layer);

        let slice = image.crop_imm(0, band.top, width, band.height);
        let band_height_mm = band.height as f32 * mm_per_px;
        Image::from_dynamic_image(&slice).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(PAGE_HEIGHT_MM - band_height_mm)),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes()
        .map_err(|e| QuoteError::render(e.to_string()))
}
