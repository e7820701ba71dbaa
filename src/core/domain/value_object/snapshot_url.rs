use crate::core::domain::error::ValidationError;

/// A validated webcam snapshot URL.
///
/// Unlike [`super::ApiBaseUrl`] this is a complete URL, queried as-is; a
/// query string such as `?action=snapshot` is expected and allowed.
#[derive(Debug, Clone)]
pub struct SnapshotUrl(String);

impl SnapshotUrl {
    /// Creates a new snapshot URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the snapshot URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a webcam snapshot URL.
pub(crate) fn validate_snapshot_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "snapshot_url".to_string(),
            message: "Snapshot URL cannot be empty".to_string(),
        });
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
            "Snapshot URL must contain a host".to_string(),
        ));
    }
    Ok(())
}
