//! Macro discovery and the one-shot selection flow.
//!
//! List phase: printer object names are filtered down to user macros and
//! turned into inline actions. Invoke phase: the selected action's
//! payload is split back into the macro name, which goes verbatim to the
//! script endpoint. The list is rebuilt on every request; nothing here
//! caches.

use crate::commands::application::response::InlineAction;
use crate::core::domain::model::macro_descriptor::MacroDescriptor;

/// Object-list prefix marking a G-code macro (case-sensitive, including
/// the trailing space).
pub(crate) const MACRO_OBJECT_PREFIX: &str = "gcode_macro ";

/// Macros whose bare name starts with this are internal helpers and stay
/// out of the selectable list. They remain reachable through `/exec`.
pub(crate) const INTERNAL_MACRO_MARKER: char = '_';

/// Callback payload prefix for macro execution.
pub(crate) const MACRO_CALLBACK_PREFIX: &str = "exec_macro";

const CALLBACK_SEPARATOR: char = ':';

/// Filters printer object names down to the selectable macros.
pub fn eligible_macros(objects: &[String]) -> Vec<MacroDescriptor> {
    objects
        .iter()
        .filter_map(|object| object.strip_prefix(MACRO_OBJECT_PREFIX))
        .filter(|name| !name.starts_with(INTERNAL_MACRO_MARKER))
        .map(MacroDescriptor::new)
        .collect()
}

/// Builds one inline action per macro, carrying the bare macro name in
/// the payload.
pub fn macro_actions(macros: &[MacroDescriptor]) -> Vec<InlineAction> {
    macros
        .iter()
        .map(|descriptor| InlineAction {
            label: descriptor.name.clone(),
            payload: format!(
                "{}{}{}",
                MACRO_CALLBACK_PREFIX, CALLBACK_SEPARATOR, descriptor.name
            ),
        })
        .collect()
}

/// Extracts the macro name from a callback payload.
///
/// Splits on the first separator only; macro invocations may themselves
/// contain the separator character.
pub fn parse_macro_payload(payload: &str) -> Option<&str> {
    let (prefix, name) = payload.split_once(CALLBACK_SEPARATOR)?;
    (prefix == MACRO_CALLBACK_PREFIX).then_some(name)
}
