pub mod commands;
pub mod core;

#[cfg(test)]
mod tests;

pub use crate::commands::application::request::CommandEvent;
pub use crate::commands::application::response::{InlineAction, ReplyAction};
pub use crate::commands::application::service::router::{
    CallbackHandler, CommandHandler, CommandRouter,
};
pub use crate::core::domain::error::{BridgeError, BridgeResult, ValidationError};
pub use crate::core::domain::model::{
    action_result::{ActionResult, PrintAction},
    bridge_connection::BridgeConnection,
    client_config::{ClientConfig, RateLimitConfig},
    job_details::JobDetails,
    macro_descriptor::MacroDescriptor,
    printer_info::PrinterInfo,
    printer_status::PrinterStatus,
    temperature_reading::TemperatureReading,
};
pub use crate::core::domain::value_object::{ApiBaseUrl, ChatId, ChatToken, SnapshotUrl};
pub use crate::core::infrastructure::api_client::MoonrakerClient;

use crate::core::domain::value_object::{
    validate_base_url, validate_chat_id, validate_chat_token, validate_snapshot_url,
};
use std::sync::Arc;
use std::time::Duration;

/// A bridge between chat commands and one Moonraker printer endpoint.
///
/// The bridge translates inbound command and callback events into printer
/// API calls and renders the results as [`ReplyAction`] values. Receiving
/// events and delivering replies is the embedding chat transport's job;
/// the bridge itself holds no mutable state and may be shared across any
/// number of concurrent event handlers.
///
/// # Examples
///
/// ```no_run
/// use moonbridge::{BridgeResult, MoonBridge};
///
/// #[tokio::main]
/// async fn main() -> BridgeResult<()> {
///     let bridge = MoonBridge::builder()
///         .api_base_url("http://192.168.1.20:7125")
///         .snapshot_url("http://192.168.1.20/webcam/?action=snapshot")
///         .chat_credentials("123456789:AAFtoken", "987654321")
///         .build()?;
///
///     if let Some(reply) = bridge.handle_command("status", "").await {
///         // hand `reply` to the chat transport
///         println!("{:?}", reply);
///     }
///     Ok(())
/// }
/// ```
pub struct MoonBridge {
    connection: Arc<BridgeConnection>,
    client: Arc<MoonrakerClient>,
    router: CommandRouter,
}

/// Builder for [`MoonBridge`] configuration.
#[derive(Debug, Default)]
pub struct MoonBridgeBuilder {
    api_base_url: Option<String>,
    snapshot_url: Option<String>,
    chat_token: Option<String>,
    chat_id: Option<String>,
    config: Option<ClientConfig>,
}

impl MoonBridgeBuilder {
    /// Sets the Moonraker API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the webcam snapshot URL.
    pub fn snapshot_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot_url = Some(url.into());
        self
    }

    /// Sets the chat transport credential and the authorized chat id.
    /// Both are opaque to the bridge.
    pub fn chat_credentials(
        mut self,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        self.chat_token = Some(token.into());
        self.chat_id = Some(chat_id.into());
        self
    }

    /// Overrides the per-operation timeouts (defaults: 4 s for queries
    /// and actions, 8 s for the snapshot fetch).
    pub fn timeouts(mut self, query: Duration, action: Duration, snapshot: Duration) -> Self {
        let mut config = self.config.unwrap_or_default();
        config.query_timeout = query;
        config.action_timeout = action;
        config.snapshot_timeout = snapshot;
        self.config = Some(config);
        self
    }

    /// Enables client-side rate limiting of printer API requests.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        let mut config = self.config.unwrap_or_default();
        config.rate_limit = Some(rate_limit);
        self.config = Some(config);
        self
    }

    /// Validates the configuration and assembles the bridge.
    ///
    /// # Errors
    /// Returns `BridgeError::Validation` for a missing or malformed
    /// configuration value, `BridgeError::Network` if the HTTP client
    /// cannot be built.
    pub fn build(self) -> BridgeResult<MoonBridge> {
        let api_base_url = self.api_base_url.ok_or_else(|| missing("api_base_url"))?;
        validate_base_url(&api_base_url)?;
        let snapshot_url = self.snapshot_url.ok_or_else(|| missing("snapshot_url"))?;
        validate_snapshot_url(&snapshot_url)?;
        let chat_token = self.chat_token.ok_or_else(|| missing("chat_token"))?;
        validate_chat_token(&chat_token)?;
        let chat_id = self.chat_id.ok_or_else(|| missing("chat_id"))?;
        validate_chat_id(&chat_id)?;

        let connection = Arc::new(BridgeConnection::new(
            ApiBaseUrl::new_unchecked(api_base_url),
            SnapshotUrl::new_unchecked(snapshot_url),
            ChatToken::new_unchecked(chat_token),
            ChatId::new_unchecked(chat_id),
        ));
        let client = Arc::new(MoonrakerClient::new(
            connection.clone(),
            self.config.unwrap_or_default(),
        )?);
        let router = CommandRouter::new(client.clone());

        Ok(MoonBridge {
            connection,
            client,
            router,
        })
    }
}

fn missing(field: &str) -> BridgeError {
    BridgeError::Validation(ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required", field),
    })
}

impl MoonBridge {
    /// Creates a new builder for bridge configuration.
    pub fn builder() -> MoonBridgeBuilder {
        MoonBridgeBuilder::default()
    }

    /// Handles one command event. Unknown command names yield `None`.
    pub async fn handle_command(&self, name: &str, args: &str) -> Option<ReplyAction> {
        self.router.dispatch(name, args).await
    }

    /// Handles a parsed [`CommandEvent`].
    pub async fn handle_event(&self, event: &CommandEvent) -> Option<ReplyAction> {
        self.router.dispatch(&event.name, &event.args).await
    }

    /// Handles one callback (button-press) event by its payload.
    pub async fn handle_callback(&self, payload: &str) -> Option<ReplyAction> {
        self.router.dispatch_callback(payload).await
    }

    /// Returns the endpoint and credential configuration. The transport
    /// reads the chat token and authorized chat id from here.
    pub fn connection(&self) -> &BridgeConnection {
        &self.connection
    }

    /// Returns the underlying printer API client.
    pub fn client(&self) -> &MoonrakerClient {
        &self.client
    }
}
