use thiserror::Error;

/// 撥號盤無法對應時回給來電者的訊息
pub const UNSUPPORTED_NUMBER_MESSAGE: &str = "unsupported phone number";

#[derive(Error, Debug)]
pub enum VanityError {
    #[error("Invalid phone number '{number}': {reason}")]
    InvalidNumber { number: String, reason: String },

    #[error("Dictionary error: {message}")]
    DictionaryError { message: String },

    #[error("Lookup store error: {message}")]
    StoreError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VanityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VanityError::InvalidNumber { .. } => ErrorCategory::Input,
            VanityError::ConfigError { .. }
            | VanityError::InvalidConfigValueError { .. }
            | VanityError::DictionaryError { .. } => ErrorCategory::Configuration,
            VanityError::StoreError { .. } | VanityError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            VanityError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 號碼被拒絕是正常結果，不是系統故障
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_invalid_number(&self) -> bool {
        matches!(self, VanityError::InvalidNumber { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VanityError::InvalidNumber { .. } => UNSUPPORTED_NUMBER_MESSAGE.to_string(),
            VanityError::DictionaryError { message } => {
                format!("Could not load the word list: {}", message)
            }
            VanityError::StoreError { message } => {
                format!("Could not reach the vanity number store: {}", message)
            }
            VanityError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VanityError::InvalidNumber { .. } => {
                "Use an 11-digit number whose last seven digits are between 2 and 9"
            }
            VanityError::DictionaryError { .. } => {
                "Check the dictionary path, or omit it to use the built-in word list"
            }
            VanityError::StoreError { .. } => "Check the table name, region and credentials",
            VanityError::ConfigError { .. } | VanityError::InvalidConfigValueError { .. } => {
                "Review the configuration file and environment variables"
            }
            VanityError::IoError(_) => "Check file permissions and available disk space",
            VanityError::SerializationError(_) => {
                "The stored data is corrupted; remove the store file and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VanityError>;
