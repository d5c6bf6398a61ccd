use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template file error: {0}")]
    TemplateFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

pub type Result<T> = std::result::Result<T, ToolError>;
