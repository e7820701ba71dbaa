//! A macro discovered from the printer's object list.

/// One selectable macro. The name is both the display label and the text
/// sent verbatim to the script endpoint when the macro is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDescriptor {
    pub name: String,
}

impl MacroDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
