//! Outbound reply actions.
//!
//! Each handled event produces exactly one of these; delivering it over
//! the chat transport (and editing the right message for `EditText`) is
//! the embedding process's job.

/// One selectable inline button: a visible label and the opaque payload
/// handed back through the callback path when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAction {
    pub label: String,
    pub payload: String,
}

/// The single reply a handler emits for one event.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyAction {
    /// Send a text message; `markup` selects HTML-mode rendering.
    Text { text: String, markup: bool },
    /// Send a text message with a set of one-shot inline buttons.
    TextWithActions {
        text: String,
        markup: bool,
        actions: Vec<InlineAction>,
    },
    /// Send a photo with a caption.
    Photo { bytes: Vec<u8>, caption: String },
    /// Replace the text of the message the event originated from.
    EditText { text: String, markup: bool },
}

impl ReplyAction {
    pub fn plain(text: impl Into<String>) -> Self {
        ReplyAction::Text {
            text: text.into(),
            markup: false,
        }
    }

    pub fn markup(text: impl Into<String>) -> Self {
        ReplyAction::Text {
            text: text.into(),
            markup: true,
        }
    }

    pub fn edit_plain(text: impl Into<String>) -> Self {
        ReplyAction::EditText {
            text: text.into(),
            markup: false,
        }
    }

    pub fn edit_markup(text: impl Into<String>) -> Self {
        ReplyAction::EditText {
            text: text.into(),
            markup: true,
        }
    }
}
