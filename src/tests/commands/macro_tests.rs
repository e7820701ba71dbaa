use super::bridge_for;
use crate::commands::application::service::formatter;
use crate::{InlineAction, ReplyAction};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_macro_listing_builds_one_shot_actions() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "objects": [
                "gcode_macro PARK",
                "gcode_macro _HOME_OVERRIDE",
                "extruder"
            ]}
        })))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("macros", "").await.unwrap();

    assert_eq!(
        reply,
        ReplyAction::TextWithActions {
            text: formatter::MACROS_HEADER.to_string(),
            markup: true,
            actions: vec![InlineAction {
                label: "PARK".to_string(),
                payload: "exec_macro:PARK".to_string(),
            }],
        }
    );
}

#[tokio::test]
async fn test_macro_listing_with_zero_eligible_macros_is_valid() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "objects": ["extruder", "gcode_macro _PROBE_CALIBRATE"] }
        })))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("macros", "").await.unwrap();

    // An empty but valid action list, distinct from a network failure.
    let ReplyAction::TextWithActions { actions, .. } = reply else {
        panic!("expected an action-list reply");
    };
    assert!(actions.is_empty());
}

#[tokio::test]
async fn test_macro_listing_failure_surfaces_diagnostic_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/list"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("macros", "").await.unwrap();

    let ReplyAction::Text { text, .. } = reply else {
        panic!("expected a text reply");
    };
    assert!(text.starts_with("❌ Error: "));
}

#[tokio::test]
async fn test_callback_invokes_macro_and_edits_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .and(body_json(
            serde_json::json!({ "script": "SET_PAUSE_AT_LAYER 10" }),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge
        .handle_callback("exec_macro:SET_PAUSE_AT_LAYER 10")
        .await
        .unwrap();
    assert_eq!(
        reply,
        ReplyAction::edit_markup("✅ Executed: <code>SET_PAUSE_AT_LAYER 10</code>")
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_callback_failure_edits_with_failure_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_callback("exec_macro:PARK").await.unwrap();
    assert_eq!(
        reply,
        ReplyAction::edit_plain("❌ Failed to execute macro: PARK")
    );
}

#[tokio::test]
async fn test_callback_without_macro_name_is_malformed() {
    let mock_server = MockServer::start().await;
    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_callback("exec_macro").await.unwrap();
    assert_eq!(
        reply,
        ReplyAction::edit_plain(formatter::CALLBACK_MALFORMED)
    );
}
