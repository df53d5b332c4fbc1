//! Editor session state machine and host-facing input handling
//!
//! This module contains:
//! - The two-layer editing session driven by pointer events (editor.rs)
//! - Keyboard shortcut mapping for the editing window (shortcuts.rs)

pub mod editor;
pub mod shortcuts;

pub use editor::{EditorMode, EditorSession, PointerEvent};
pub use shortcuts::{Modifiers, ShortcutAction, handle_key_event};
