mod reply;

pub use reply::{InlineAction, ReplyAction};
