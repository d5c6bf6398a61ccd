#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::TemplateSet;
use crate::utils::error::{Result, ToolError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk template definitions:
///
/// ```toml
/// [templates]
/// main_sms = "Hey {{firstName}}, ..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub templates: HashMap<String, String>,
}

impl TemplateFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: TemplateFile = toml::from_str(&content)?;
        if file.templates.is_empty() {
            return Err(ToolError::ConfigError {
                message: "Template file defines no templates".to_string(),
            });
        }
        Ok(file)
    }

    pub fn into_template_set(self) -> TemplateSet {
        TemplateSet::new(self.templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file_parses_templates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[templates]
greeting = "Hey {{{{firstName}}}}, your {{{{car}}}} is booked."
"#
        )
        .unwrap();

        let loaded = TemplateFile::from_file(file.path()).unwrap();
        let set = loaded.into_template_set();
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get("greeting"),
            Some("Hey {{firstName}}, your {{car}} is booked.")
        );
    }

    #[test]
    fn test_from_file_rejects_empty_table() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[templates]").unwrap();
        assert!(matches!(
            TemplateFile::from_file(file.path()),
            Err(ToolError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        assert!(matches!(
            TemplateFile::from_file("/no/such/templates.toml"),
            Err(ToolError::IoError(_))
        ));
    }
}
