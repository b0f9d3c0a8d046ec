//! Fixed placement of a quotation on a single A4 page.
//!
//! Vertical positions are millimetres from the top edge. Sections are
//! written in order while a cursor advances down the page; the PDF writer
//! only translates the resulting elements.

use crate::core::format::format_price;
use crate::document::metrics::{text_width_mm, wrap_text};
use crate::document::template::DocumentTemplate;
use crate::domain::model::{CustomerInfo, QuotationDocument};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const BLUE_800: Rgb = Rgb(30, 58, 138);
const BLUE_500: Rgb = Rgb(59, 130, 246);
const GRAY_600: Rgb = Rgb(75, 85, 99);
const SLATE_800: Rgb = Rgb(30, 41, 59);
const SLATE_600: Rgb = Rgb(71, 85, 105);
const SLATE_500: Rgb = Rgb(100, 116, 139);
const SLATE_400: Rgb = Rgb(148, 163, 184);
const SLATE_300: Rgb = Rgb(203, 213, 225);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    /// Anchor point; its meaning depends on `align`.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: FontStyle,
    pub color: Rgb,
    pub align: Align,
}

impl TextElement {
    /// Left edge of the rendered text.
    pub fn left_x(&self) -> f32 {
        let width = text_width_mm(&self.text, self.size, self.style);
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    /// Stroke width in millimetres.
    pub thickness: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Rule(RuleElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|el| match el {
            Element::Text(text) => Some(text),
            Element::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleElement> {
        self.elements.iter().filter_map(|el| match el {
            Element::Rule(rule) => Some(rule),
            Element::Text(_) => None,
        })
    }

    /// First text element whose content starts with `prefix`.
    pub fn find_text(&self, prefix: &str) -> Option<&TextElement> {
        self.texts().find(|t| t.text.starts_with(prefix))
    }
}

struct PageWriter {
    elements: Vec<Element>,
    size: f32,
    style: FontStyle,
    color: Rgb,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            elements: Vec::new(),
            size: 12.0,
            style: FontStyle::Normal,
            color: SLATE_800,
        }
    }

    fn font(&mut self, size: f32, style: FontStyle, color: Rgb) {
        self.size = size;
        self.style = style;
        self.color = color;
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, align: Align) {
        self.elements.push(Element::Text(TextElement {
            text: text.into(),
            x,
            y,
            size: self.size,
            style: self.style,
            color: self.color,
            align,
        }));
    }

    fn rule(&mut self, y: f32, thickness: f32, color: Rgb) {
        self.elements.push(Element::Rule(RuleElement {
            x1: MARGIN_MM,
            x2: PAGE_WIDTH_MM - MARGIN_MM,
            y,
            thickness,
            color,
        }));
    }
}

/// Lays out a quotation. The result is always a single page.
pub fn layout_quotation(document: &QuotationDocument, template: &DocumentTemplate) -> PageLayout {
    let content_width = PAGE_WIDTH_MM - MARGIN_MM * 2.0;
    let amount_x = PAGE_WIDTH_MM - MARGIN_MM - 30.0;
    let currency = document.currency;
    let mut page = PageWriter::new();

    page.font(24.0, FontStyle::Bold, BLUE_800);
    page.text(&template.title, PAGE_WIDTH_MM / 2.0, 30.0, Align::Center);
    page.rule(40.0, 0.5, BLUE_500);

    page.font(12.0, FontStyle::Normal, GRAY_600);
    page.text(&template.company_name, MARGIN_MM, 55.0, Align::Left);
    page.text(format!("Email: {}", template.company_email), MARGIN_MM, 62.0, Align::Left);
    page.text(format!("Tel: {}", template.company_phone), MARGIN_MM, 69.0, Align::Left);
    page.text(
        format!("Date: {}", document.issued_on.format("%B %-d, %Y")),
        PAGE_WIDTH_MM - MARGIN_MM - 40.0,
        55.0,
        Align::Left,
    );

    let mut y = match &document.customer {
        Some(customer) => write_customer(&mut page, customer, content_width),
        None => 100.0,
    };

    page.font(14.0, FontStyle::Bold, BLUE_800);
    page.text("SELECTED SERVICE", MARGIN_MM, y, Align::Left);
    y += 10.0;

    page.font(12.0, FontStyle::Bold, SLATE_800);
    page.text(&document.service.name, MARGIN_MM, y, Align::Left);
    y += 7.0;

    page.font(10.0, FontStyle::Normal, SLATE_600);
    page.text(&document.service.description, MARGIN_MM, y, Align::Left);
    y += 10.0;

    page.font(11.0, FontStyle::Bold, SLATE_800);
    page.text("Base price:", MARGIN_MM, y, Align::Left);
    page.text(
        format_price(document.service.base_price.in_currency(currency), currency),
        amount_x,
        y,
        Align::Right,
    );
    y += 8.0;

    if !document.selected_options.is_empty() {
        page.font(12.0, FontStyle::Bold, BLUE_800);
        page.text("ADDITIONAL OPTIONS", MARGIN_MM, y, Align::Left);
        y += 8.0;

        page.font(10.0, FontStyle::Normal, SLATE_600);
        for option in &document.selected_options {
            page.text(format!("- {}", option.name), MARGIN_MM + 5.0, y, Align::Left);
            page.text(
                format!("+{}", format_price(option.price.in_currency(currency), currency)),
                amount_x,
                y,
                Align::Right,
            );
            y += 6.0;
        }
        y += 5.0;
    }

    page.rule(y, 0.2, SLATE_300);
    y += 8.0;

    page.font(14.0, FontStyle::Bold, BLUE_800);
    page.text("TOTAL:", MARGIN_MM, y, Align::Left);
    page.text(format_price(document.total, currency), amount_x, y, Align::Right);
    y += 15.0;

    page.font(10.0, FontStyle::Italic, SLATE_500);
    page.text("Important notes:", MARGIN_MM, y, Align::Left);
    y += 6.0;
    page.font(9.0, FontStyle::Italic, SLATE_500);
    for (i, note) in template.notes.iter().enumerate() {
        if i > 0 {
            y += 4.0;
        }
        page.text(format!("- {}", note), MARGIN_MM + 5.0, y, Align::Left);
    }

    let footer_y = PAGE_HEIGHT_MM - 20.0;
    page.font(8.0, FontStyle::Normal, SLATE_400);
    for (i, line) in template.footer.iter().enumerate() {
        page.text(line, PAGE_WIDTH_MM / 2.0, footer_y + 5.0 * i as f32, Align::Center);
    }

    PageLayout {
        width: PAGE_WIDTH_MM,
        height: PAGE_HEIGHT_MM,
        elements: page.elements,
    }
}

/// Writes the client block and returns where the service section starts.
fn write_customer(page: &mut PageWriter, customer: &CustomerInfo, content_width: f32) -> f32 {
    page.font(14.0, FontStyle::Bold, BLUE_800);
    page.text("CLIENT INFORMATION", MARGIN_MM, 90.0, Align::Left);

    page.font(11.0, FontStyle::Normal, GRAY_600);
    page.text(format!("Name: {}", customer.name), MARGIN_MM, 100.0, Align::Left);
    page.text(format!("Email: {}", customer.email), MARGIN_MM, 107.0, Align::Left);
    if let Some(phone) = &customer.phone {
        page.text(format!("Phone: {}", phone), MARGIN_MM, 114.0, Align::Left);
    }

    let Some(message) = customer.message.as_deref().filter(|m| !m.trim().is_empty()) else {
        return 130.0;
    };

    let mut y = 130.0;
    page.font(12.0, FontStyle::Bold, BLUE_800);
    page.text("CLIENT MESSAGE", MARGIN_MM, y, Align::Left);
    y += 8.0;

    page.font(10.0, FontStyle::Normal, SLATE_600);
    for line in wrap_text(message, content_width - 10.0, 10.0, FontStyle::Normal) {
        page.text(line, MARGIN_MM + 5.0, y, Align::Left);
        y += 5.0;
    }

    y + 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Currency, Price, PricingOption, Service};
    use chrono::NaiveDate;

    fn document(customer: Option<CustomerInfo>, options: usize) -> QuotationDocument {
        let selected_options: Vec<PricingOption> = (0..options)
            .map(|i| PricingOption {
                id: format!("opt-{}", i),
                name: format!("Option {}", i),
                description: None,
                price: Price { usd: 100, mxn: 1800 },
            })
            .collect();
        QuotationDocument {
            service: Service {
                id: "web".to_string(),
                name: "Corporate Website".to_string(),
                description: "Multi-page site".to_string(),
                base_price: Price { usd: 1500, mxn: 27000 },
                options: selected_options.clone(),
            },
            total: 1500 + 100 * options as u64,
            selected_options,
            currency: Currency::Usd,
            customer,
            issued_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        }
    }

    fn customer(message: Option<&str>) -> CustomerInfo {
        CustomerInfo {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_header_positions() {
        let layout = layout_quotation(&document(None, 0), &DocumentTemplate::default());
        let title = layout.find_text("SERVICE QUOTATION").unwrap();
        assert_eq!((title.y, title.align), (30.0, Align::Center));
        assert_eq!(layout.find_text("Date: March 5, 2024").unwrap().y, 55.0);

        let first_rule = layout.rules().next().unwrap();
        assert_eq!(first_rule.y, 40.0);
    }

    #[test]
    fn test_without_customer_service_starts_at_100() {
        let layout = layout_quotation(&document(None, 0), &DocumentTemplate::default());
        assert_eq!(layout.find_text("SELECTED SERVICE").unwrap().y, 100.0);
        assert!(layout.find_text("CLIENT INFORMATION").is_none());
        assert!(layout.find_text("ADDITIONAL OPTIONS").is_none());
        // base price at 127, rule at 135, total at 143
        assert_eq!(layout.find_text("Base price:").unwrap().y, 127.0);
        assert_eq!(layout.rules().nth(1).unwrap().y, 135.0);
        assert_eq!(layout.find_text("TOTAL:").unwrap().y, 143.0);
    }

    #[test]
    fn test_customer_without_message_starts_at_130() {
        let layout = layout_quotation(&document(Some(customer(None)), 0), &DocumentTemplate::default());
        assert_eq!(layout.find_text("CLIENT INFORMATION").unwrap().y, 90.0);
        assert_eq!(layout.find_text("Email: ana@").unwrap().y, 107.0);
        assert!(layout.find_text("Phone:").is_none());
        assert_eq!(layout.find_text("SELECTED SERVICE").unwrap().y, 130.0);
    }

    #[test]
    fn test_customer_message_advances_cursor() {
        let layout = layout_quotation(
            &document(Some(customer(Some("One short line"))), 0),
            &DocumentTemplate::default(),
        );
        assert_eq!(layout.find_text("CLIENT MESSAGE").unwrap().y, 130.0);
        assert_eq!(layout.find_text("One short line").unwrap().y, 138.0);
        // 138 + 5 for the line, + 10 spacing
        assert_eq!(layout.find_text("SELECTED SERVICE").unwrap().y, 153.0);
    }

    #[test]
    fn test_options_block() {
        let layout = layout_quotation(&document(None, 2), &DocumentTemplate::default());
        assert_eq!(layout.find_text("ADDITIONAL OPTIONS").unwrap().y, 135.0);
        assert_eq!(layout.find_text("- Option 0").unwrap().y, 143.0);
        assert_eq!(layout.find_text("- Option 1").unwrap().y, 149.0);
        // 155 + 5 spacing
        assert_eq!(layout.rules().nth(1).unwrap().y, 160.0);
        let total = layout.find_text("$1,700").unwrap();
        assert_eq!((total.y, total.align), (168.0, Align::Right));
    }

    #[test]
    fn test_amounts_right_aligned() {
        let layout = layout_quotation(&document(None, 1), &DocumentTemplate::default());
        let amount = layout.find_text("+$100").unwrap();
        assert_eq!(amount.x, PAGE_WIDTH_MM - MARGIN_MM - 30.0);
        assert!(amount.left_x() < amount.x);
    }

    #[test]
    fn test_notes_and_footer() {
        let template = DocumentTemplate::default();
        let layout = layout_quotation(&document(None, 0), &template);
        let notes_heading = layout.find_text("Important notes:").unwrap().y;
        assert_eq!(notes_heading, 158.0);
        assert_eq!(layout.find_text("- This quotation").unwrap().y, 164.0);
        assert_eq!(layout.find_text("- A 50%").unwrap().y, 176.0);

        let footer: Vec<f32> = template
            .footer
            .iter()
            .map(|line| layout.find_text(line).unwrap().y)
            .collect();
        assert_eq!(footer, vec![277.0, 282.0]);
    }
}
