use crate::core::domain::error::ValidationError;

/// A validated Moonraker API base URL.
///
/// All printer API endpoints are resolved relative to this URL. The value
/// is stored exactly as configured; trailing slashes are normalized away
/// when paths are joined, not on construction.
#[derive(Debug, Clone)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new base URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins an endpoint path (with or without a leading slash) onto the
    /// base URL.
    pub(crate) fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Validates a printer API base URL.
pub(crate) fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "api_base_url".to_string(),
            message: "API base URL cannot be empty".to_string(),
        });
    }
    if url.len() > 2083 {
        return Err(ValidationError::Format(
            "API base URL exceeds maximum length of 2083 characters".to_string(),
        ));
    }
    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(ValidationError::ConstraintViolation(
            "API base URL must contain a host".to_string(),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "API base URL must not carry a query string or fragment".to_string(),
        ));
    }
    Ok(())
}
