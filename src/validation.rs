use regex::Regex;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("zone name is empty")]
    Empty,
    #[error("zone name too long (max 253 characters)")]
    NameTooLong,
    #[error("label '{0}' is empty")]
    EmptyLabel(String),
    #[error("label '{0}' too long (max 63 characters)")]
    LabelTooLong(String),
    #[error("label '{0}' contains invalid characters (only a-z, 0-9, and '-' allowed)")]
    InvalidCharacters(String),
    #[error("label '{0}' must not start or end with '-'")]
    LeadingOrTrailingHyphen(String),
}

lazy_static::lazy_static! {
    /// Only lowercase letters, digits and '-'
    static ref LABEL_RE: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::EmptyLabel(label.into()));
    }
    if label.len() > 63 {
        return Err(ValidationError::LabelTooLong(label.into()));
    }
    if !LABEL_RE.is_match(label) {
        return Err(ValidationError::InvalidCharacters(label.into()));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::LeadingOrTrailingHyphen(label.into()));
    }

    Ok(())
}

/// Validates an already normalized zone name (lowercase, no trailing dot).
pub fn validate_zone_name(zone: &str) -> Result<(), ValidationError> {
    if zone.is_empty() {
        return Err(ValidationError::Empty);
    }
    if zone.len() > 253 {
        return Err(ValidationError::NameTooLong);
    }
    for label in zone.split('.') {
        validate_label(label)?;
    }
    Ok(())
}
