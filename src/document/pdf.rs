use crate::document::layout::{
    layout_quotation, Element, FontStyle, PageLayout, Rgb, RuleElement, TextElement,
};
use crate::document::template::DocumentTemplate;
use crate::domain::model::QuotationDocument;
use crate::domain::ports::DocumentRenderer;
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

struct Fonts {
    normal: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Normal => &self.normal,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    let Rgb(r, g, b) = color;
    Color::Rgb(printpdf::Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(err: printpdf::Error) -> QuoteError {
    QuoteError::render(err.to_string())
}

/// Writes a laid-out page as a one-page PDF.
pub fn render_layout(layout: &PageLayout, title: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(layout.width), Mm(layout.height), "Quotation");

    let fonts = Fonts {
        normal: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
        italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(pdf_error)?,
    };
    let layer = doc.get_page(page).get_layer(layer);

    for element in &layout.elements {
        match element {
            Element::Text(text) => draw_text(&layer, &fonts, text, layout.height),
            Element::Rule(rule) => draw_rule(&layer, rule, layout.height),
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_text(layer: &PdfLayerReference, fonts: &Fonts, text: &TextElement, page_height: f32) {
    layer.set_fill_color(pdf_color(text.color));
    layer.use_text(
        text.text.as_str(),
        text.size,
        Mm(text.left_x()),
        Mm(page_height - text.y),
        fonts.get(text.style),
    );
}

fn draw_rule(layer: &PdfLayerReference, rule: &RuleElement, page_height: f32) {
    let y = Mm(page_height - rule.y);
    layer.set_outline_color(pdf_color(rule.color));
    layer.set_outline_thickness(rule.thickness * POINTS_PER_MM);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(rule.x1), y), false),
            (Point::new(Mm(rule.x2), y), false),
        ],
        is_closed: false,
    });
}

/// Renders quotations with the fixed single-page layout.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    template: DocumentTemplate,
}

impl PdfRenderer {
    pub fn new(template: DocumentTemplate) -> Self {
        Self { template }
    }

    pub fn render_sync(&self, document: &QuotationDocument) -> Result<Vec<u8>> {
        let layout = layout_quotation(document, &self.template);
        tracing::debug!(
            "Laid out quotation for '{}' with {} elements",
            document.service.id,
            layout.elements.len()
        );
        render_layout(&layout, &self.template.title)
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    async fn render(&self, document: QuotationDocument) -> Result<Vec<u8>> {
        let renderer = self.clone();
        tokio::task::spawn_blocking(move || renderer.render_sync(&document))
            .await
            .map_err(|e| QuoteError::render(format!("rendering task failed: {}", e)))?
    }
}
