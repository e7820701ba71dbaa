//! Rendering of interpreted printer data into markup-safe reply text.
//!
//! Invariant: every interpolated value that originated in the printer API
//! or in operator input passes through [`escape`]. Fixed literal labels
//! and emoji prefixes are trusted. Time values arrive in seconds and are
//! converted to minutes here, nowhere earlier.

use crate::core::domain::model::{
    job_details::JobDetails, printer_info::PrinterInfo, printer_status::PrinterStatus,
    temperature_reading::TemperatureReading,
};

/// Sentinel shown for fields the printer did not report.
pub const NOT_AVAILABLE: &str = "N/A";

pub const STATUS_FAILED: &str = "❌ Failed to retrieve printer status.";
pub const TEMP_FAILED: &str = "❌ Failed to retrieve temperature data.";
pub const SNAPSHOT_CAPTION: &str = "📸 Latest webcam snapshot";
pub const SNAPSHOT_FAILED: &str = "❌ Failed to get webcam snapshot.";
pub const PAUSE_OK: &str = "⏸️ Print paused.";
pub const PAUSE_FAILED: &str = "❌ Failed to pause print.";
pub const RESUME_OK: &str = "▶️ Print resumed.";
pub const RESUME_FAILED: &str = "❌ Failed to resume print.";
pub const CANCEL_OK: &str = "🛑 Print cancelled.";
pub const CANCEL_FAILED: &str = "❌ Failed to cancel print.";
pub const HOME_OK: &str = "🏠 Printer homing started (G28).";
pub const HOME_FAILED: &str = "❌ Failed to home printer.";
pub const RESTART_OK: &str = "🔄 Klipper restart triggered.";
pub const RESTART_FAILED: &str = "❌ Failed to restart Klipper.";
pub const EMERGENCY_STOP_OK: &str = "⛔ Emergency stop triggered!";
pub const EMERGENCY_STOP_FAILED: &str = "❌ Failed to trigger emergency stop.";
pub const CALLBACK_MALFORMED: &str = "❌ Error: malformed callback payload.";

pub const EXEC_USAGE: &str =
    "❌ Usage: /exec MACRO_NAME [ARGS...]\nExample: /exec PARK or /exec SET_PAUSE_AT_LAYER 10";

pub const MACROS_HEADER: &str = "🛠️ <b>Available Macros:</b>\nClick a macro to execute it.";

pub const HELP_TEXT: &str = "<b>Main Commands:</b>\n\
    \n\
    /status — Show print status info (progress, speed, etc.)\n\
    /emergency_stop — Emergency stop (motors off)\n\
    /pause — Pause the print\n\
    /resume — Resume a paused print\n\
    /stop — Cancel/stop the print\n\
    /restart — Restart Klipper firmware\n\
    /temp — Show temperature data (hotend, bed)\n\
    /snapshot — Send latest webcam snapshot\n\
    /help — Show this help message\n\
    /more — Show more commands";

pub const MORE_TEXT: &str = "<b>More Commands:</b>\n\
    \n\
    /home — Home all axes\n\
    /info — Printer/firmware details\n\
    /macros — List all Klipper macros\n\
    /job — Show current print job details\n\
    /exec — Run any macro, e.g. /exec PARK\n\
    /help — Show this help message\n\
    /more — Show more commands";

/// Escapes markup-significant characters for HTML-mode rendering.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a status snapshot as an HTML-mode message.
pub fn format_status(status: &PrinterStatus) -> String {
    format!(
        "🖨️ <b>Printer Status</b>\n\
         Speed: {} mm/s\n\
         Flow: {}\n\
         Filament Used: {:.2} mm\n\
         Layer: {}/{}\n\
         Total Time: {} min\n\
         Remaining Time: {} min\n\
         State: {}\n",
        status.speed,
        status.flow,
        status.filament_used,
        status.current_layer,
        status.total_layers,
        minutes_2dp(status.elapsed_seconds),
        minutes_2dp(status.remaining_seconds),
        escape(&status.state),
    )
}

/// Renders a temperature reading as an HTML-mode message.
pub fn format_temperatures(reading: &TemperatureReading) -> String {
    format!(
        "🌡️ <b>Temperature Data</b>\n\
         Hotend: {}°C / {}°C\n\
         Bed: {}°C / {}°C",
        temp_or_sentinel(reading.hotend_actual),
        temp_or_sentinel(reading.hotend_target),
        temp_or_sentinel(reading.bed_actual),
        temp_or_sentinel(reading.bed_target),
    )
}

/// Renders printer/firmware details as an HTML-mode message.
pub fn format_info(info: &PrinterInfo) -> String {
    format!(
        "<b>Printer Info:</b>\n\
         Config: {}\n\
         Firmware: {}\n\
         Serial: {}",
        escape(info.config_path.as_deref().unwrap_or(NOT_AVAILABLE)),
        escape(info.firmware_path.as_deref().unwrap_or(NOT_AVAILABLE)),
        escape(info.serial_path.as_deref().unwrap_or(NOT_AVAILABLE)),
    )
}

/// Renders current job details as an HTML-mode message.
pub fn format_job(job: &JobDetails) -> String {
    format!(
        "<b>Current Print Job:</b>\n\
         State: {}\n\
         Filename: {}\n\
         Duration: {} min\n\
         Total Layers: {}\n\
         Current Layer: {}",
        escape(&job.state),
        escape(&job.filename),
        minutes_1dp(job.duration_seconds),
        layer_or_sentinel(job.total_layers),
        layer_or_sentinel(job.current_layer),
    )
}

/// Success line for an executed script or macro.
pub fn format_executed(script: &str) -> String {
    format!("✅ Executed: <code>{}</code>", escape(script))
}

/// Failure line for a refused script or macro.
pub fn format_exec_failed(script: &str) -> String {
    format!("❌ Failed to execute macro: {}", escape(script))
}

/// Diagnostic failure line surfacing the error description.
pub fn format_error(error: &impl std::fmt::Display) -> String {
    format!("❌ Error: {}", error)
}

fn minutes_2dp(seconds: f64) -> String {
    format!("{:.2}", seconds / 60.0)
}

fn minutes_1dp(seconds: f64) -> String {
    format!("{:.1}", seconds / 60.0)
}

fn temp_or_sentinel(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn layer_or_sentinel(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
