//! Static printer/firmware information from `/printer/info`.

use serde::Deserialize;

/// Raw `result` object of `/printer/info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoFragment {
    pub config_file: Option<String>,
    pub klipper_path: Option<String>,
    pub serial_path: Option<String>,
}

/// Envelope for `/printer/info`; a missing `result` object yields an
/// all-sentinel [`PrinterInfo`] rather than a protocol error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct InfoEnvelope {
    #[serde(default)]
    pub result: InfoFragment,
}

/// Interpreted printer description. `None` means "not available".
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterInfo {
    pub config_path: Option<String>,
    pub firmware_path: Option<String>,
    pub serial_path: Option<String>,
}

impl From<InfoFragment> for PrinterInfo {
    fn from(info: InfoFragment) -> Self {
        Self {
            config_path: info.config_file,
            firmware_path: info.klipper_path,
            serial_path: info.serial_path,
        }
    }
}
