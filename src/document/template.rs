use serde::{Deserialize, Serialize};

/// Fixed text printed on every quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTemplate {
    pub title: String,
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub notes: Vec<String>,
    pub footer: Vec<String>,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            title: "SERVICE QUOTATION".to_string(),
            company_name: "Your Web Development Studio".to_string(),
            company_email: "contact@yourstudio.com".to_string(),
            company_phone: "+52 55 1234 5678".to_string(),
            notes: vec![
                "This quotation is valid for 30 days".to_string(),
                "Prices are subject to change without notice".to_string(),
                "Delivery time will be confirmed when the project starts".to_string(),
                "A 50% advance payment is required to begin work".to_string(),
            ],
            footer: vec![
                "Thank you for considering our services".to_string(),
                "For any questions, do not hesitate to contact us".to_string(),
            ],
        }
    }
}
