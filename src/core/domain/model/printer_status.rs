//! Printer status from the `print_stats` object query.
//!
//! The wire fragment keeps every field optional, exactly as Moonraker may
//! send it; [`PrinterStatus`] is the interpreted snapshot with the default
//! policy applied. Time fields stay in seconds here; conversion to
//! minutes is a display concern and happens in the formatter.

use serde::Deserialize;

/// Raw `print_stats` fragment from `/printer/objects/query?print_stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintStatsFragment {
    /// Commanded print speed, mm/s.
    pub print_speed: Option<f64>,
    /// Extrusion flow multiplier.
    pub flow_factor: Option<f64>,
    /// Filament consumed so far, mm.
    pub filament_used: Option<f64>,
    /// Elapsed print time, seconds.
    pub print_duration: Option<f64>,
    /// Estimated remaining time, seconds.
    pub estimated_time: Option<f64>,
    /// Printer state ("printing", "paused", "complete", "standby", "error").
    pub state: Option<String>,
    /// Name of the file being printed.
    pub filename: Option<String>,
    /// Layer progress sub-object; frequently absent or null.
    #[serde(default)]
    pub info: Option<PrintInfoFragment>,
}

/// The nested `info` sub-object of `print_stats`.
///
/// Klipper populates `current_layer`/`total_layer`; some slicer setups set
/// `currentlayer`/`totallayer` via `SET_PRINT_STATS_INFO` instead. Both
/// spellings are carried so each caller can read the pair it cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintInfoFragment {
    pub current_layer: Option<u32>,
    pub total_layer: Option<u32>,
    pub currentlayer: Option<u32>,
    pub totallayer: Option<u32>,
}

/// Wrapper fixing the object key under the query's `status` level.
#[derive(Debug, Deserialize)]
pub(crate) struct PrintStatsSlot {
    pub print_stats: PrintStatsFragment,
}

/// An interpreted printer status snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterStatus {
    /// Commanded print speed, mm/s.
    pub speed: f64,
    /// Extrusion flow multiplier.
    pub flow: f64,
    /// Filament consumed so far, mm.
    pub filament_used: f64,
    /// Current layer, 0 when the printer does not report layer progress.
    pub current_layer: u32,
    /// Total layer count, 0 when unreported.
    pub total_layers: u32,
    /// Elapsed print time, seconds.
    pub elapsed_seconds: f64,
    /// Estimated remaining time, seconds.
    pub remaining_seconds: f64,
    /// Printer state, "unknown" when unreported.
    pub state: String,
}

impl From<PrintStatsFragment> for PrinterStatus {
    fn from(stats: PrintStatsFragment) -> Self {
        let info = stats.info.unwrap_or_default();
        Self {
            speed: stats.print_speed.unwrap_or(0.0),
            flow: stats.flow_factor.unwrap_or(1.0),
            filament_used: stats.filament_used.unwrap_or(0.0),
            current_layer: info.current_layer.unwrap_or(0),
            total_layers: info.total_layer.unwrap_or(0),
            elapsed_seconds: stats.print_duration.unwrap_or(0.0),
            remaining_seconds: stats.estimated_time.unwrap_or(0.0),
            state: stats.state.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
