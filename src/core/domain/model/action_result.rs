//! Outcome of a control action against the printer API.

/// The print lifecycle actions exposed by `/printer/print/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintAction {
    Pause,
    Resume,
    Cancel,
}

impl PrintAction {
    /// The path segment Moonraker expects for this action.
    pub(crate) fn as_path_segment(&self) -> &'static str {
        match self {
            PrintAction::Pause => "pause",
            PrintAction::Resume => "resume",
            PrintAction::Cancel => "cancel",
        }
    }
}

/// Result of a control action (pause/resume/cancel/home/restart/
/// emergency-stop/macro-execute/raw-script).
///
/// Moonraker acknowledges actions with 200 or 204; any other status means
/// the printer refused the action. The status code is kept for diagnostic
/// replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    pub status: Option<u16>,
}

impl ActionResult {
    pub(crate) fn from_status(code: u16) -> Self {
        Self {
            success: matches!(code, 200 | 204),
            status: Some(code),
        }
    }
}
