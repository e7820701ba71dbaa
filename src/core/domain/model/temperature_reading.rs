//! Hotend and bed temperatures.

use serde::Deserialize;

/// One heater's sub-object (`extruder` or `heater_bed`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaterFragment {
    pub temperature: Option<f64>,
    pub target: Option<f64>,
}

/// The `status` level of `/printer/objects/query?extruder&heater_bed`.
///
/// Either heater object may be missing entirely, e.g. on a machine without
/// a heated bed; that blanks both of its fields rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemperaturesFragment {
    #[serde(default)]
    pub extruder: Option<HeaterFragment>,
    #[serde(default)]
    pub heater_bed: Option<HeaterFragment>,
}

/// An interpreted temperature reading. `None` means "not available".
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub hotend_actual: Option<f64>,
    pub hotend_target: Option<f64>,
    pub bed_actual: Option<f64>,
    pub bed_target: Option<f64>,
}

impl From<TemperaturesFragment> for TemperatureReading {
    fn from(fragment: TemperaturesFragment) -> Self {
        let extruder = fragment.extruder.unwrap_or_default();
        let bed = fragment.heater_bed.unwrap_or_default();
        Self {
            hotend_actual: extruder.temperature,
            hotend_target: extruder.target,
            bed_actual: bed.temperature,
            bed_target: bed.target,
        }
    }
}
