use super::bridge_for;
use crate::commands::application::service::formatter;
use crate::ReplyAction;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_exec_without_args_performs_no_network_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("exec", "").await.unwrap();
    assert_eq!(reply, ReplyAction::plain(formatter::EXEC_USAGE));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_exec_issues_exactly_one_script_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .and(body_json(serde_json::json!({ "script": "PARK" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("exec", "PARK").await.unwrap();
    assert_eq!(
        reply,
        ReplyAction::markup("✅ Executed: <code>PARK</code>")
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_exec_forwards_arguments_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .and(body_json(
            serde_json::json!({ "script": "SET_PAUSE_AT_LAYER 10" }),
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge
        .handle_command("exec", "SET_PAUSE_AT_LAYER 10")
        .await
        .unwrap();
    assert_eq!(
        reply,
        ReplyAction::markup("✅ Executed: <code>SET_PAUSE_AT_LAYER 10</code>")
    );
}

#[tokio::test]
async fn test_exec_refused_script_reports_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("exec", "NOPE<>").await.unwrap();
    assert_eq!(
        reply,
        ReplyAction::plain("❌ Failed to execute macro: NOPE&lt;&gt;")
    );
}
