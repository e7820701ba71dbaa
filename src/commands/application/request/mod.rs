mod command_event;

pub use command_event::CommandEvent;
