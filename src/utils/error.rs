use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Input is empty or whitespace-only")]
    EmptyInput,

    #[error("No exercise with id '{id}'")]
    ExerciseNotFound { id: String },

    #[error("Interrupted before the reply was ready")]
    Interrupted,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AssistError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssistError::EmptyInput
            | AssistError::ExerciseNotFound { .. }
            | AssistError::Interrupted => ErrorCategory::Input,
            AssistError::IoError(_) => ErrorCategory::Io,
            AssistError::SerializationError(_)
            | AssistError::CsvError(_)
            | AssistError::UnknownFormat { .. } => ErrorCategory::Export,
            AssistError::ConfigParseError(_)
            | AssistError::ConfigError { .. }
            | AssistError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AssistError::EmptyInput
            | AssistError::ExerciseNotFound { .. }
            | AssistError::Interrupted => ErrorSeverity::Low,
            AssistError::UnknownFormat { .. } => ErrorSeverity::Medium,
            AssistError::SerializationError(_)
            | AssistError::CsvError(_)
            | AssistError::ConfigParseError(_)
            | AssistError::ConfigError { .. }
            | AssistError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AssistError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AssistError::EmptyInput => {
                "Describe your symptoms or the area of concern, e.g. 'I have shoulder pain'".to_string()
            }
            AssistError::ExerciseNotFound { .. } => {
                "Run 'library' without --id to list the available exercises".to_string()
            }
            AssistError::Interrupted => "Run the command again and wait for the reply".to_string(),
            AssistError::IoError(_) => {
                "Check that the file exists and that you have permission to read or write it".to_string()
            }
            AssistError::SerializationError(_) | AssistError::CsvError(_) => {
                "Retry the export or choose a different output format".to_string()
            }
            AssistError::ConfigParseError(_) => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            AssistError::ConfigError { .. } => "Review the configuration file".to_string(),
            AssistError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            AssistError::UnknownFormat { .. } => {
                "Use one of the supported formats: text, json, csv".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AssistError::EmptyInput => "Please type a description of your symptoms".to_string(),
            AssistError::ExerciseNotFound { id } => format!("There is no exercise with id '{}'", id),
            AssistError::Interrupted => "Interrupted".to_string(),
            AssistError::IoError(e) => format!("File operation failed: {}", e),
            AssistError::SerializationError(_) | AssistError::CsvError(_) => {
                "Could not export the data".to_string()
            }
            AssistError::ConfigParseError(_) => "Could not read the configuration file".to_string(),
            AssistError::ConfigError { message } => format!("Configuration problem: {}", message),
            AssistError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            AssistError::UnknownFormat { format } => format!("'{}' is not a supported format", format),
        }
    }

    /// Process exit code for the CLI. Interrupts use the shell convention (128 + SIGINT).
    pub fn exit_code(&self) -> i32 {
        if matches!(self, AssistError::Interrupted) {
            return 130;
        }

        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;
