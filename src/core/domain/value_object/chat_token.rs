use crate::core::domain::error::ValidationError;

/// The chat transport credential.
///
/// Opaque to this crate: the bridge never interprets the token, it only
/// hands it to the embedding chat transport. Validation is limited to the
/// shape any sane credential has (single line, no whitespace).
#[derive(Clone)]
pub struct ChatToken(String);

impl ChatToken {
    /// Creates a new token without validation.
    pub(crate) fn new_unchecked(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of debug output.
impl std::fmt::Debug for ChatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChatToken(***)")
    }
}

/// Validates a chat transport credential.
pub(crate) fn validate_chat_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "chat_token".to_string(),
            message: "Chat token cannot be empty".to_string(),
        });
    }
    if token.len() > 256 {
        return Err(ValidationError::Format(
            "Chat token exceeds maximum length of 256 characters".to_string(),
        ));
    }
    if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Format(
            "Chat token must not contain whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}
