//! Keyboard shortcuts for editor commands.

/// A command a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Undo,
    Redo,
    /// Delete the selected element; ignored when nothing is selected.
    DeleteSelected,
}

/// A key press as reported by the host, with `key` being the key's name
/// (`"z"`, `"Z"`, `"Delete"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, ctrl: bool, shift: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
        }
    }
}

impl EditorCommand {
    /// The command bound to a key press, if any.
    ///
    /// Letter keys match case-insensitively since hosts report `"Z"` while
    /// Shift is held. Delete ignores modifiers.
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        let key = press.key.as_str();
        if press.ctrl && key.eq_ignore_ascii_case("z") {
            Some(if press.shift { Self::Redo } else { Self::Undo })
        } else if press.ctrl && key.eq_ignore_ascii_case("y") {
            Some(Self::Redo)
        } else if key == "Delete" {
            Some(Self::DeleteSelected)
        } else {
            None
        }
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub command: EditorCommand,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: EditorCommand,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Whether `press` is exactly this shortcut.
    pub fn matches(&self, press: &KeyPress) -> bool {
        press.ctrl == self.ctrl && press.shift == self.shift && press.key.eq_ignore_ascii_case(self.key)
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, EditorCommand::Undo, "Undo"),
            Shortcut::new("Y", true, false, EditorCommand::Redo, "Redo"),
            Shortcut::new("Z", true, true, EditorCommand::Redo, "Redo"),
            Shortcut::new("Delete", false, false, EditorCommand::DeleteSelected, "Delete selected element"),
        ]
    }

    /// Display strings of the shortcuts bound to `command`.
    pub fn bindings_for(command: EditorCommand) -> Vec<String> {
        Self::all()
            .into_iter()
            .filter(|s| s.command == command)
            .map(|s| s.format())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(EditorCommand::from_key(&KeyPress::new("z", true, false)), Some(EditorCommand::Undo));
        assert_eq!(EditorCommand::from_key(&KeyPress::new("Z", true, true)), Some(EditorCommand::Redo));
        assert_eq!(EditorCommand::from_key(&KeyPress::new("y", true, false)), Some(EditorCommand::Redo));
        assert_eq!(
            EditorCommand::from_key(&KeyPress::new("Delete", false, false)),
            Some(EditorCommand::DeleteSelected)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(EditorCommand::from_key(&KeyPress::new("z", false, false)), None);
        assert_eq!(EditorCommand::from_key(&KeyPress::new("Backspace", false, false)), None);
        assert_eq!(EditorCommand::from_key(&KeyPress::new("s", true, false)), None);
    }

    #[test]
    fn test_registry_agrees_with_from_key() {
        for shortcut in ShortcutRegistry::all() {
            let press = KeyPress::new(shortcut.key, shortcut.ctrl, shortcut.shift);
            assert!(shortcut.matches(&press));
            assert_eq!(EditorCommand::from_key(&press), Some(shortcut.command), "{}", shortcut.format());
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(
            ShortcutRegistry::bindings_for(EditorCommand::Redo),
            vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
        );
        assert_eq!(ShortcutRegistry::bindings_for(EditorCommand::DeleteSelected), vec!["Delete".to_string()]);
    }
}
