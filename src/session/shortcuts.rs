//! Keyboard shortcut handling for the editing window

/// Modifier state reported by the host alongside a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

/// Host action requested by a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Ask the user for a destination, export, and remember its directory
    SaveWithDialog,
    /// Export straight to the timestamped default path
    QuickSave,
}

/// Map a key press to an editor action
///
/// Returns `None` for keys the editor does not handle.
pub fn handle_key_event(key: char, modifiers: Modifiers) -> Option<ShortcutAction> {
    match key {
        c if c.eq_ignore_ascii_case(&'s') && modifiers.control && modifiers.shift => {
            Some(ShortcutAction::SaveWithDialog)
        }
        c if c.eq_ignore_ascii_case(&'s') && modifiers.control => Some(ShortcutAction::QuickSave),
        _ => None,
    }
}
