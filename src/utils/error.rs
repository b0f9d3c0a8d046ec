use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Wizard error: {message}")]
    WizardError { message: String },

    #[error("Document rendering error: {message}")]
    RenderError { message: String },

    #[error("Export failed: {message}")]
    ExportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Input,
    Document,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::CatalogError { .. } | Self::SerializationError(_) => ErrorCategory::Catalog,
            Self::ValidationError { .. } | Self::WizardError { .. } => ErrorCategory::Input,
            Self::RenderError { .. } | Self::ExportError { .. } => ErrorCategory::Document,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } | Self::WizardError { .. } => ErrorSeverity::Low,
            Self::RenderError { .. } | Self::ExportError { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::CatalogError { .. }
            | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person using the tool. Export failures collapse
    /// into one generic notice.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RenderError { .. } | Self::ExportError { .. } => {
                "The quotation PDF could not be generated. Please try again.".to_string()
            }
            Self::ValidationError { field, message } => format!("Please check {}: {}", field, message),
            Self::WizardError { message } => message.clone(),
            Self::CatalogError { .. } | Self::SerializationError(_) => {
                "The price catalog could not be loaded.".to_string()
            }
            Self::IoError(e) => format!("A file operation failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
            ErrorCategory::Catalog => "Verify the catalog JSON matches the expected structure",
            ErrorCategory::Input => "Correct the highlighted field and try again",
            ErrorCategory::Document => "Retry the export; if it keeps failing, check the output directory",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogError {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
