use crate::core::ConfigProvider;
use crate::document::layout::PAGE_HEIGHT_MM;
use crate::document::snapshot::DEFAULT_BAND_HEIGHT_MM;
use crate::document::template::DocumentTemplate;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{
    validate_file_prefix, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_OUTPUT_PATH: &str = "./output";
const DEFAULT_FILE_PREFIX: &str = "quotation";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub company: Option<CompanyConfig>,
    pub document: Option<DocumentConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub title: Option<String>,
    pub output_path: Option<String>,
    pub file_prefix: Option<String>,
    pub notes: Option<Vec<String>>,
    pub footer: Option<Vec<String>>,
    pub snapshot_band_height_mm: Option<f32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static VAR: OnceLock<Regex> = OnceLock::new();
        let re = VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("document.output_path", self.output_path())?;
        validate_file_prefix("document.file_prefix", self.file_prefix())?;

        if let Some(path) = self.catalog_path() {
            validate_path("catalog.path", path)?;
        }

        if let Some(title) = self.document.as_ref().and_then(|d| d.title.as_deref()) {
            validate_non_empty_string("document.title", title)?;
        }

        validate_range(
            "document.snapshot_band_height_mm",
            self.snapshot_band_height_mm(),
            10.0,
            PAGE_HEIGHT_MM,
        )?;

        Ok(())
    }

    pub fn set_output_path(&mut self, path: impl Into<String>) {
        self.document.get_or_insert_with(Default::default).output_path = Some(path.into());
    }

    pub fn set_catalog_path(&mut self, path: impl Into<String>) {
        self.catalog.get_or_insert_with(Default::default).path = Some(path.into());
    }

    pub fn snapshot_band_height_mm(&self) -> f32 {
        self.document
            .as_ref()
            .and_then(|d| d.snapshot_band_height_mm)
            .unwrap_or(DEFAULT_BAND_HEIGHT_MM)
    }

    /// Document text with configured values laid over the defaults.
    pub fn template(&self) -> DocumentTemplate {
        let mut template = DocumentTemplate::default();

        if let Some(company) = &self.company {
            if let Some(name) = &company.name {
                template.company_name = name.clone();
            }
            if let Some(email) = &company.email {
                template.company_email = email.clone();
            }
            if let Some(phone) = &company.phone {
                template.company_phone = phone.clone();
            }
        }

        if let Some(document) = &self.document {
            if let Some(title) = &document.title {
                template.title = title.clone();
            }
            if let Some(notes) = &document.notes {
                template.notes = notes.clone();
            }
            if let Some(footer) = &document.footer {
                template.footer = footer.clone();
            }
        }

        template
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        self.document
            .as_ref()
            .and_then(|d| d.output_path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    fn file_prefix(&self) -> &str {
        self.document
            .as_ref()
            .and_then(|d| d.file_prefix.as_deref())
            .unwrap_or(DEFAULT_FILE_PREFIX)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
