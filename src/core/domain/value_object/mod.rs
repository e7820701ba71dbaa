mod api_base_url;
mod chat_id;
mod chat_token;
mod snapshot_url;

pub use api_base_url::ApiBaseUrl;
pub use chat_id::ChatId;
pub use chat_token::ChatToken;
pub use snapshot_url::SnapshotUrl;

// Re-export validation functions for internal use
pub(crate) use api_base_url::validate_base_url;
pub(crate) use chat_id::validate_chat_id;
pub(crate) use chat_token::validate_chat_token;
pub(crate) use snapshot_url::validate_snapshot_url;
