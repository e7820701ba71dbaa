use crate::core::domain::error::ValidationError;

/// The authorized chat identifier.
///
/// Commands from any other chat must be rejected by the transport before
/// they reach the router; the bridge only stores the identifier for that
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatId(String);

impl ChatId {
    /// Creates a new chat id without validation.
    pub(crate) fn new_unchecked(id: String) -> Self {
        Self(id)
    }

    /// Returns the chat id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a chat identifier.
///
/// Chat platforms use decimal identifiers; group chats may be prefixed
/// with a minus sign.
pub(crate) fn validate_chat_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::Field {
            field: "chat_id".to_string(),
            message: "Chat id cannot be empty".to_string(),
        });
    }
    if id.len() > 32 {
        return Err(ValidationError::Format(
            "Chat id exceeds maximum length of 32 characters".to_string(),
        ));
    }
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::Format(
            "Chat id must be a decimal number, optionally prefixed with '-'".to_string(),
        ));
    }
    Ok(())
}
