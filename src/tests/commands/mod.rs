mod exec_tests;
mod macro_tests;
mod router_tests;

use crate::MoonBridge;
use wiremock::MockServer;

/// A bridge wired to a wiremock server through the public builder.
pub(crate) fn bridge_for(server: &MockServer) -> MoonBridge {
    MoonBridge::builder()
        .api_base_url(server.uri())
        .snapshot_url(format!("{}/webcam/?action=snapshot", server.uri()))
        .chat_credentials("123456789:AAFtoken", "42")
        .build()
        .unwrap()
}
