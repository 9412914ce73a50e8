use crate::domain::model::{clamp_pensum, RequestInput, Tone};
use crate::utils::error::{AntragError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Request fields loaded from a TOML file. Every field is optional; present
/// fields override the values supplied on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFile {
    pub request: RequestSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSection {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub pensum: Option<i64>,
    pub device_allowance: Option<bool>,
    pub mobility_allowance: Option<bool>,
    pub tone: Option<String>,
}

impl RequestFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AntragError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AntragError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Overrides `input` with every field present in the file. Pensum and tone
    /// go through the same normalization as command-line input.
    pub fn apply(&self, input: &mut RequestInput) {
        if let Some(first_name) = &self.request.first_name {
            input.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.request.last_name {
            input.last_name = last_name.clone();
        }
        if let Some(role) = &self.request.role {
            input.role = role.clone();
        }
        if let Some(pensum) = self.request.pensum {
            input.pensum_pct = clamp_pensum(pensum);
        }
        if let Some(device) = self.request.device_allowance {
            input.include_device = device;
        }
        if let Some(mobility) = self.request.mobility_allowance {
            input.include_mobility = mobility;
        }
        if let Some(tone) = &self.request.tone {
            input.tone = Tone::parse(tone);
        }
    }
}

/// Replaces `${VAR_NAME}` references with the environment variable's value.
/// Unset variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn base_input() -> RequestInput {
        RequestInput {
            first_name: String::new(),
            last_name: String::new(),
            role: String::new(),
            pensum_pct: 100,
            include_device: true,
            include_mobility: true,
            tone: Tone::Neutral,
        }
    }

    #[test]
    fn test_parse_basic_request_file() {
        let toml_content = r#"
[request]
first_name = "Anna"
last_name = "Muster"
role = "Lehrperson"
pensum = 80
mobility_allowance = false
tone = "happy"
"#;

        let file = RequestFile::from_toml_str(toml_content).unwrap();
        let mut input = base_input();
        file.apply(&mut input);

        assert_eq!(input.first_name, "Anna");
        assert_eq!(input.last_name, "Muster");
        assert_eq!(input.pensum_pct, 80);
        assert!(input.include_device);
        assert!(!input.include_mobility);
        assert_eq!(input.tone, Tone::Happy);
    }

    #[test]
    fn test_missing_fields_leave_input_untouched() {
        let file = RequestFile::from_toml_str("[request]\nrole = \"Hauswart\"\n").unwrap();
        let mut input = base_input();
        input.first_name = "Anna".to_string();
        file.apply(&mut input);

        assert_eq!(input.first_name, "Anna");
        assert_eq!(input.role, "Hauswart");
        assert_eq!(input.pensum_pct, 100);
    }

    #[test]
    fn test_out_of_range_pensum_falls_back_to_full() {
        let file = RequestFile::from_toml_str("[request]\npensum = 150\n").unwrap();
        let mut input = base_input();
        input.pensum_pct = 80;
        file.apply(&mut input);
        assert_eq!(input.pensum_pct, 100);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ANTRAG_ROLE", "Schulleitung");

        let file =
            RequestFile::from_toml_str("[request]\nrole = \"${TEST_ANTRAG_ROLE}\"\n").unwrap();
        assert_eq!(file.request.role.as_deref(), Some("Schulleitung"));

        std::env::remove_var("TEST_ANTRAG_ROLE");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = RequestFile::from_toml_str("not toml at all [");
        assert!(result.is_err());
    }

    #[test]
    fn test_request_file_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[request]\nfirst_name = \"Anna\"\n")
            .unwrap();

        let file = RequestFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.request.first_name.as_deref(), Some("Anna"));
    }
}
