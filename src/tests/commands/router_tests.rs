use super::bridge_for;
use crate::commands::application::service::formatter;
use crate::{CommandEvent, ReplyAction};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_status_command_renders_markup_reply() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "status": { "print_stats": {
                "print_speed": 100.0,
                "print_duration": 3600.0,
                "estimated_time": 90.0,
                "state": "printing"
            }}}
        })))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("status", "").await.unwrap();

    let ReplyAction::Text { text, markup } = reply else {
        panic!("expected a text reply");
    };
    assert!(markup);
    assert!(text.contains("🖨️ <b>Printer Status</b>"));
    assert!(text.contains("Total Time: 60.00 min"));
    assert!(text.contains("Remaining Time: 1.50 min"));
    assert!(text.contains("State: printing"));
}

#[tokio::test]
async fn test_status_command_failure_uses_fixed_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("status", "").await.unwrap();
    assert_eq!(reply, ReplyAction::plain(formatter::STATUS_FAILED));
}

#[tokio::test]
async fn test_temp_command_renders_sentinels() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/printer/objects/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "status": {
                "extruder": { "temperature": 24.4, "target": 0.0 }
            }}
        })))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("temp", "").await.unwrap();

    let ReplyAction::Text { text, markup } = reply else {
        panic!("expected a text reply");
    };
    assert!(markup);
    assert!(text.contains("Hotend: 24.4°C / 0°C"));
    assert!(text.contains("Bed: N/A°C / N/A°C"));
}

#[tokio::test]
async fn test_pause_command_confirmation_and_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/print/pause"))
        .respond_with(ResponseTemplate::new(204))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/printer/print/pause"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let first = bridge.handle_command("pause", "").await.unwrap();
    assert_eq!(first, ReplyAction::plain(formatter::PAUSE_OK));

    let second = bridge.handle_command("pause", "").await.unwrap();
    assert_eq!(second, ReplyAction::plain(formatter::PAUSE_FAILED));
}

#[tokio::test]
async fn test_home_command_runs_g28() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printer/gcode/script"))
        .and(wiremock::matchers::body_json(
            serde_json::json!({ "script": "G28" }),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("home", "").await.unwrap();
    assert_eq!(reply, ReplyAction::plain(formatter::HOME_OK));
}

#[tokio::test]
async fn test_snapshot_command_replies_photo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webcam/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("snapshot", "").await.unwrap();
    assert_eq!(
        reply,
        ReplyAction::Photo {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            caption: formatter::SNAPSHOT_CAPTION.to_string(),
        }
    );
}

#[tokio::test]
async fn test_snapshot_404_replies_text_never_photo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webcam/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("snapshot", "").await.unwrap();
    assert_eq!(reply, ReplyAction::plain(formatter::SNAPSHOT_FAILED));
}

#[tokio::test]
async fn test_info_failure_surfaces_diagnostic_line() {
    // No mock mounted: wiremock answers 404, an ad-hoc handler surfaces it.
    let mock_server = MockServer::start().await;
    let bridge = bridge_for(&mock_server);
    let reply = bridge.handle_command("info", "").await.unwrap();

    let ReplyAction::Text { text, markup } = reply else {
        panic!("expected a text reply");
    };
    assert!(!markup);
    assert!(text.starts_with("❌ Error: "));
}

#[tokio::test]
async fn test_handle_event_parses_and_dispatches() {
    let mock_server = MockServer::start().await;
    let bridge = bridge_for(&mock_server);

    let event = CommandEvent::from_text("/help").unwrap();
    let reply = bridge.handle_event(&event).await.unwrap();
    assert_eq!(reply, ReplyAction::markup(formatter::HELP_TEXT));
}
