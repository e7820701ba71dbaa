//! Command dispatch.
//!
//! Two immutable tables, built once: command name to handler, and
//! callback prefix to callback handler. Every handler is a straight
//! composition of client call, interpretation, and formatting, emitting
//! exactly one [`ReplyAction`]; client errors are caught at the handler
//! boundary and never escape to the dispatcher.

use crate::commands::application::response::ReplyAction;
use crate::commands::application::service::{formatter, macro_flow};
use crate::core::domain::model::action_result::PrintAction;
use crate::core::infrastructure::api_client::MoonrakerClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handler for one chat command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, args: &str) -> ReplyAction;
}

/// Handler for one callback-payload prefix.
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    async fn handle(&self, payload: &str) -> ReplyAction;
}

/// The dispatch table. Immutable after construction, so it can serve
/// any number of concurrent events.
pub struct CommandRouter {
    commands: HashMap<&'static str, Arc<dyn CommandHandler>>,
    callbacks: HashMap<&'static str, Arc<dyn CallbackHandler>>,
}

impl CommandRouter {
    /// Builds the full command set over one shared printer API client.
    pub fn new(api: Arc<MoonrakerClient>) -> Self {
        let mut commands: HashMap<&'static str, Arc<dyn CommandHandler>> = HashMap::new();

        commands.insert("status", Arc::new(StatusCommand { api: api.clone() }));
        commands.insert("temp", Arc::new(TempCommand { api: api.clone() }));
        commands.insert("job", Arc::new(JobCommand { api: api.clone() }));
        commands.insert("info", Arc::new(InfoCommand { api: api.clone() }));
        commands.insert("snapshot", Arc::new(SnapshotCommand { api: api.clone() }));
        commands.insert(
            "pause",
            Arc::new(PrintActionCommand {
                api: api.clone(),
                action: PrintAction::Pause,
                ok: formatter::PAUSE_OK,
                failed: formatter::PAUSE_FAILED,
            }),
        );
        commands.insert(
            "resume",
            Arc::new(PrintActionCommand {
                api: api.clone(),
                action: PrintAction::Resume,
                ok: formatter::RESUME_OK,
                failed: formatter::RESUME_FAILED,
            }),
        );
        commands.insert(
            "stop",
            Arc::new(PrintActionCommand {
                api: api.clone(),
                action: PrintAction::Cancel,
                ok: formatter::CANCEL_OK,
                failed: formatter::CANCEL_FAILED,
            }),
        );
        commands.insert(
            "home",
            Arc::new(GcodeCommand {
                api: api.clone(),
                script: "G28",
                ok: formatter::HOME_OK,
                failed: formatter::HOME_FAILED,
            }),
        );
        commands.insert("restart", Arc::new(RestartCommand { api: api.clone() }));
        commands.insert(
            "emergency_stop",
            Arc::new(EmergencyStopCommand { api: api.clone() }),
        );
        commands.insert("macros", Arc::new(MacrosCommand { api: api.clone() }));
        commands.insert("exec", Arc::new(ExecCommand { api: api.clone() }));
        commands.insert(
            "help",
            Arc::new(FixedReplyCommand {
                text: formatter::HELP_TEXT,
            }),
        );
        commands.insert(
            "more",
            Arc::new(FixedReplyCommand {
                text: formatter::MORE_TEXT,
            }),
        );

        let mut callbacks: HashMap<&'static str, Arc<dyn CallbackHandler>> = HashMap::new();
        callbacks.insert(
            macro_flow::MACRO_CALLBACK_PREFIX,
            Arc::new(ExecMacroCallback { api }),
        );

        Self {
            commands,
            callbacks,
        }
    }

    /// Dispatches one command event; unknown names yield `None` and the
    /// transport decides what to do with them.
    pub async fn dispatch(&self, name: &str, args: &str) -> Option<ReplyAction> {
        let handler = self.commands.get(name)?;
        debug!(command = name, "dispatching chat command");
        Some(handler.handle(args).await)
    }

    /// Dispatches a callback event by its payload prefix.
    pub async fn dispatch_callback(&self, payload: &str) -> Option<ReplyAction> {
        let prefix = payload.split(':').next().unwrap_or(payload);
        let handler = self.callbacks.get(prefix)?;
        debug!(prefix, "dispatching callback");
        Some(handler.handle(payload).await)
    }
}

struct StatusCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for StatusCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.query_print_stats().await {
            Ok(status) => ReplyAction::markup(formatter::format_status(&status)),
            Err(e) => {
                warn!(error = %e, "status query failed");
                ReplyAction::plain(formatter::STATUS_FAILED)
            }
        }
    }
}

struct TempCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for TempCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.query_temperatures().await {
            Ok(reading) => ReplyAction::markup(formatter::format_temperatures(&reading)),
            Err(e) => {
                warn!(error = %e, "temperature query failed");
                ReplyAction::plain(formatter::TEMP_FAILED)
            }
        }
    }
}

struct JobCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for JobCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.query_job().await {
            Ok(job) => ReplyAction::markup(formatter::format_job(&job)),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

struct InfoCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for InfoCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.query_info().await {
            Ok(info) => ReplyAction::markup(formatter::format_info(&info)),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

struct SnapshotCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for SnapshotCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        use crate::core::domain::error::BridgeError;
        match self.api.fetch_snapshot().await {
            Ok(bytes) => ReplyAction::Photo {
                bytes,
                caption: formatter::SNAPSHOT_CAPTION.to_string(),
            },
            Err(BridgeError::Http(_)) => ReplyAction::plain(formatter::SNAPSHOT_FAILED),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

/// Pause/resume/cancel: a fixed confirmation or failure line, nothing
/// diagnostic.
struct PrintActionCommand {
    api: Arc<MoonrakerClient>,
    action: PrintAction,
    ok: &'static str,
    failed: &'static str,
}

#[async_trait]
impl CommandHandler for PrintActionCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.post_print_action(self.action).await {
            Ok(result) if result.success => ReplyAction::plain(self.ok),
            Ok(_) | Err(_) => ReplyAction::plain(self.failed),
        }
    }
}

/// A command bound to one fixed G-code script.
struct GcodeCommand {
    api: Arc<MoonrakerClient>,
    script: &'static str,
    ok: &'static str,
    failed: &'static str,
}

#[async_trait]
impl CommandHandler for GcodeCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.run_script(self.script).await {
            Ok(result) if result.success => ReplyAction::plain(self.ok),
            Ok(_) => ReplyAction::plain(self.failed),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

struct RestartCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for RestartCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.restart_firmware().await {
            Ok(result) if result.success => ReplyAction::plain(formatter::RESTART_OK),
            Ok(_) => ReplyAction::plain(formatter::RESTART_FAILED),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

struct EmergencyStopCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for EmergencyStopCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.emergency_stop().await {
            Ok(result) if result.success => ReplyAction::plain(formatter::EMERGENCY_STOP_OK),
            Ok(_) => ReplyAction::plain(formatter::EMERGENCY_STOP_FAILED),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

/// Lists discoverable macros as one-shot inline actions. Zero eligible
/// macros is still a valid, empty list.
struct MacrosCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for MacrosCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        match self.api.list_objects().await {
            Ok(objects) => {
                let macros = macro_flow::eligible_macros(&objects);
                ReplyAction::TextWithActions {
                    text: formatter::MACROS_HEADER.to_string(),
                    markup: true,
                    actions: macro_flow::macro_actions(&macros),
                }
            }
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

/// Free-form script execution. The argument text goes to the printer
/// verbatim; the printer API is the trust boundary, and who may invoke
/// this command is the chat transport's access-control problem.
struct ExecCommand {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CommandHandler for ExecCommand {
    async fn handle(&self, args: &str) -> ReplyAction {
        let script = args.trim();
        if script.is_empty() {
            return ReplyAction::plain(formatter::EXEC_USAGE);
        }
        match self.api.run_script(script).await {
            Ok(result) if result.success => ReplyAction::markup(formatter::format_executed(script)),
            Ok(_) => ReplyAction::plain(formatter::format_exec_failed(script)),
            Err(e) => ReplyAction::plain(formatter::format_error(&e)),
        }
    }
}

/// Fixed menu text (`/help`, `/more`).
struct FixedReplyCommand {
    text: &'static str,
}

#[async_trait]
impl CommandHandler for FixedReplyCommand {
    async fn handle(&self, _args: &str) -> ReplyAction {
        ReplyAction::markup(self.text)
    }
}

/// Invoke phase of the macro flow: replaces the original interactive
/// message with the outcome line.
struct ExecMacroCallback {
    api: Arc<MoonrakerClient>,
}

#[async_trait]
impl CallbackHandler for ExecMacroCallback {
    async fn handle(&self, payload: &str) -> ReplyAction {
        let Some(name) = macro_flow::parse_macro_payload(payload) else {
            return ReplyAction::edit_plain(formatter::CALLBACK_MALFORMED);
        };
        match self.api.run_script(name).await {
            Ok(result) if result.success => {
                ReplyAction::edit_markup(formatter::format_executed(name))
            }
            Ok(_) => ReplyAction::edit_plain(formatter::format_exec_failed(name)),
            Err(e) => ReplyAction::edit_plain(formatter::format_error(&e)),
        }
    }
}
