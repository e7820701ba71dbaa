//! Inbound chat command events.

/// One chat command: the bare command name and the raw argument text.
///
/// The chat transport may construct this directly, or parse it from a
/// raw message with [`CommandEvent::from_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEvent {
    pub name: String,
    pub args: String,
}

impl CommandEvent {
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: args.into(),
        }
    }

    /// Parses a raw `/command args…` message.
    ///
    /// Returns `None` for text that is not a command. An `@botname`
    /// suffix on the command (group-chat addressing) is stripped; the
    /// argument text is kept verbatim apart from surrounding whitespace.
    pub fn from_text(text: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, args) = match rest.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (rest, ""),
        };
        let name = head.split('@').next().unwrap_or(head);
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name.to_ascii_lowercase(), args))
    }
}
