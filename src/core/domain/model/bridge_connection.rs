use crate::core::domain::value_object::{ApiBaseUrl, ChatId, ChatToken, SnapshotUrl};

/// The immutable endpoint and credential configuration of one bridge.
///
/// Constructed once by the builder after validation and shared behind an
/// `Arc`; nothing in here is mutated afterwards. The chat token and chat
/// id are opaque to this crate: they exist so the embedding transport can
/// authenticate itself and reject events from unauthorized chats.
pub struct BridgeConnection {
    api_base_url: ApiBaseUrl,
    snapshot_url: SnapshotUrl,
    chat_token: ChatToken,
    chat_id: ChatId,
}

impl BridgeConnection {
    pub(crate) fn new(
        api_base_url: ApiBaseUrl,
        snapshot_url: SnapshotUrl,
        chat_token: ChatToken,
        chat_id: ChatId,
    ) -> Self {
        Self {
            api_base_url,
            snapshot_url,
            chat_token,
            chat_id,
        }
    }

    pub fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    pub fn snapshot_url(&self) -> &SnapshotUrl {
        &self.snapshot_url
    }

    pub fn chat_token(&self) -> &ChatToken {
        &self.chat_token
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }
}
