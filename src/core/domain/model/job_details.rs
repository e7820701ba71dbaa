//! Current print job details.
//!
//! Reads the same `print_stats` fragment as [`super::printer_status`] but
//! a different subset: job identity rather than progress telemetry. Layer
//! counts come from the slicer-set `totallayer`/`currentlayer` keys and
//! stay optional — an absent count renders as a sentinel, not as zero.

use super::printer_status::PrintStatsFragment;

/// Details of the current (or last) print job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetails {
    pub filename: String,
    pub state: String,
    /// Elapsed print time, seconds.
    pub duration_seconds: f64,
    pub total_layers: Option<u32>,
    pub current_layer: Option<u32>,
}

impl From<PrintStatsFragment> for JobDetails {
    fn from(stats: PrintStatsFragment) -> Self {
        let info = stats.info.unwrap_or_default();
        Self {
            filename: stats.filename.unwrap_or_default(),
            state: stats.state.unwrap_or_default(),
            duration_seconds: stats.print_duration.unwrap_or(0.0),
            total_layers: info.totallayer,
            current_layer: info.currentlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_reads_slicer_layer_keys() {
        let fragment: PrintStatsFragment = serde_json::from_value(serde_json::json!({
            "filename": "calicat.gcode",
            "state": "printing",
            "print_duration": 90.0,
            "info": { "totallayer": 80, "currentlayer": 12 }
        }))
        .unwrap();

        let job = JobDetails::from(fragment);
        assert_eq!(job.filename, "calicat.gcode");
        assert_eq!(job.state, "printing");
        assert_eq!(job.duration_seconds, 90.0);
        assert_eq!(job.total_layers, Some(80));
        assert_eq!(job.current_layer, Some(12));
    }

    #[test]
    fn test_sparse_fragment_keeps_layer_sentinels() {
        let job = JobDetails::from(PrintStatsFragment::default());
        assert_eq!(job.filename, "");
        assert_eq!(job.state, "");
        assert_eq!(job.duration_seconds, 0.0);
        assert_eq!(job.total_layers, None);
        assert_eq!(job.current_layer, None);
    }
}
