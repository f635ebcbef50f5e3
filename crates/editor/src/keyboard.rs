//! Keyboard shortcut dispatch.
//!
//! Bindings are checked in a fixed order so overlapping chords resolve
//! deterministically: the overlay toggle and history first, then clipboard,
//! then the bindings that require a selection. Returns whether the
//! keystroke was consumed so hosts can fall through to their own handling
//! (text fields in particular must see keys first and not forward them
//! here).

use crate::command::Direction;
use crate::session::EditorSession;
use forma_core::keymap::Keystroke;
use store::ComponentStore;

impl<S: ComponentStore> EditorSession<S> {
    /// Dispatches one keystroke. Returns true when it mapped to an editor
    /// action (even one that turned out to be a no-op, like undo at the
    /// bottom of history).
    pub fn handle_keystroke(&mut self, keystroke: &Keystroke) -> bool {
        let modifiers = keystroke.modifiers;
        let key = keystroke.key.as_str();

        if modifiers.shift && key == "?" {
            self.toggle_shortcuts_overlay();
            return true;
        }

        if modifiers.primary() {
            match key {
                "z" if modifiers.shift => {
                    self.redo();
                    return true;
                }
                "z" => {
                    self.undo();
                    return true;
                }
                "y" => {
                    self.redo();
                    return true;
                }
                "c" => {
                    self.copy();
                    return true;
                }
                "v" => {
                    if let Err(err) = self.paste() {
                        log::error!("paste failed: {err}");
                    }
                    return true;
                }
                "d" if self.selection().is_some() => {
                    if let Some(id) = self.selection() {
                        if let Err(err) = self.duplicate(id) {
                            log::error!("duplicate failed: {err}");
                        }
                    }
                    return true;
                }
                _ => return false,
            }
        }

        if self.selection().is_none() {
            return false;
        }

        match key {
            "delete" | "backspace" => {
                if let Err(err) = self.delete_selected() {
                    log::error!("delete failed: {err}");
                }
                true
            }
            "escape" => {
                self.select(None);
                true
            }
            "up" => {
                self.nudge(Direction::Up, modifiers.shift);
                true
            }
            "down" => {
                self.nudge(Direction::Down, modifiers.shift);
                true
            }
            "left" => {
                self.nudge(Direction::Left, modifiers.shift);
                true
            }
            "right" => {
                self.nudge(Direction::Right, modifiers.shift);
                true
            }
            _ => false,
        }
    }
}
