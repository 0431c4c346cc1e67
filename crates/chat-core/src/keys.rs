//! Keyboard shortcut detection, kept free of DOM types so it can be tested natively.

/// Modifier state of a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Enter submits only together with Ctrl (or Cmd/Meta on macOS),
/// so a bare Enter can still insert a newline in the input.
pub fn is_send_chord(key: &str, mods: Modifiers) -> bool {
    key == "Enter" && (mods.ctrl || mods.meta)
}
