use crate::utils::error::{AntragError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AntragError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A mail recipient must be a single address-like token. Whitespace and
/// control characters would corrupt the generated mailto URI.
pub fn validate_recipient(field_name: &str, recipient: &str) -> Result<()> {
    validate_non_empty_string(field_name, recipient)?;

    if recipient.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(AntragError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: recipient.to_string(),
            reason: "Recipient must not contain whitespace or control characters".to_string(),
        });
    }

    if !recipient.contains('@') {
        return Err(AntragError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: recipient.to_string(),
            reason: "Recipient must be an email address".to_string(),
        });
    }

    Ok(())
}

pub fn validate_mailto_url(field_name: &str, url_str: &str) -> Result<()> {
    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "mailto" => Ok(()),
            scheme => Err(AntragError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Expected mailto scheme, got: {}", scheme),
            }),
        },
        Err(e) => Err(AntragError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_recipient() {
        assert!(validate_recipient("recipient", "stefan.baettig@pswaedenswil").is_ok());
        assert!(validate_recipient("recipient", "").is_err());
        assert!(validate_recipient("recipient", "a b@example.com").is_err());
        assert!(validate_recipient("recipient", "not-an-address").is_err());
    }

    #[test]
    fn test_validate_mailto_url() {
        assert!(validate_mailto_url("mailto", "mailto:a%40b?subject=x&body=y").is_ok());
        assert!(validate_mailto_url("mailto", "https://example.com").is_err());
        assert!(validate_mailto_url("mailto", "not a url").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("role", "Lehrperson").is_ok());
        assert!(validate_non_empty_string("role", "   ").is_err());
    }
}
