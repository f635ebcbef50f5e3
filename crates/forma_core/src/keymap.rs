//! Keyboard shortcut types.
//!
//! The engine does not own an event loop; hosts translate their native key
//! events into [`Keystroke`] values and hand them to the editor session.
//! [`StandardKeymaps`] is the static table behind the Shift+? shortcuts
//! overlay.

/// Modifier keys held during a keystroke.
///
/// `platform` is Cmd on macOS and Ctrl elsewhere-as-primary; hosts that
/// distinguish the two set `control` separately. Every binding in the
/// editor accepts either, so Cmd and Ctrl chords behave the same.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub platform: bool,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn command_shift() -> Self {
        Self {
            platform: true,
            shift: true,
            ..Self::default()
        }
    }

    /// True when Cmd or Ctrl is held.
    pub fn primary(&self) -> bool {
        self.platform || self.control
    }
}

/// A single key press with its modifiers.
///
/// `key` uses lowercase names: single characters (`"c"`, `"?"`) or the
/// names `"up"`, `"down"`, `"left"`, `"right"`, `"delete"`, `"backspace"`,
/// `"escape"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub modifiers: Modifiers,
    pub key: String,
}

impl Keystroke {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            key: key.into(),
        }
    }

    /// Parses dash-separated shortcut notation: modifiers first, the key
    /// last, e.g. `"cmd-shift-z"`, `"up"`, `"shift-?"`.
    pub fn parse(text: &str) -> Self {
        let mut modifiers = Modifiers::none();
        let mut key = String::new();

        for (i, part) in text.split('-').enumerate() {
            let is_last = i == text.split('-').count() - 1;
            match part.to_lowercase().as_str() {
                "cmd" | "super" if !is_last => modifiers.platform = true,
                "ctrl" if !is_last => modifiers.control = true,
                "shift" if !is_last => modifiers.shift = true,
                "alt" | "opt" if !is_last => modifiers.alt = true,
                other => key = other.to_string(),
            }
        }

        Self { modifiers, key }
    }
}

/// One row of the shortcuts overlay.
#[derive(Copy, Clone, Debug)]
pub struct KeyMap {
    pub keys: &'static str,
    pub description: &'static str,
}

impl KeyMap {
    pub const fn new(keys: &'static str, description: &'static str) -> Self {
        Self { keys, description }
    }
}

/// The standard editor shortcut tables.
pub struct StandardKeymaps;

impl StandardKeymaps {
    /// Movement shortcuts.
    pub fn movement() -> Vec<KeyMap> {
        vec![
            KeyMap::new("Arrow Keys", "Move component"),
            KeyMap::new("Shift + Arrows", "Move faster (×10)"),
        ]
    }

    /// Editing shortcuts.
    pub fn editing() -> Vec<KeyMap> {
        vec![
            KeyMap::new("Delete / Backspace", "Delete component"),
            KeyMap::new("Cmd/Ctrl + D", "Duplicate component"),
            KeyMap::new("Cmd/Ctrl + C", "Copy"),
            KeyMap::new("Cmd/Ctrl + V", "Paste"),
            KeyMap::new("Cmd/Ctrl + Z", "Undo"),
            KeyMap::new("Cmd/Ctrl + Shift + Z", "Redo"),
            KeyMap::new("Esc", "Deselect"),
            KeyMap::new("Shift + ?", "Show shortcuts"),
        ]
    }
}
