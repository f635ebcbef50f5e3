//! Editor commands.
//!
//! The serialized command surface mirrors the toolbar and context-menu
//! actions so hosts (and scripted sessions) can drive the editor through
//! one tagged enum instead of individual method calls.

use crate::error::EditorError;
use crate::session::EditorSession;
use model::{ComponentId, PropValue};
use serde::{Deserialize, Serialize};
use store::ComponentStore;
use strum_macros::{Display, EnumIter, EnumString};

/// Arrow-key nudge direction.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Canvas-relative alignment targets.
///
/// `Horizontal` and `Vertical` are centering aliases kept distinct so both
/// toolbar buttons serialize under their own names.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
    Horizontal,
    Vertical,
}

/// One editor action, serializable for host toolbars and replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorCommand {
    AddComponent { kind: String },
    Delete,
    Duplicate,
    Copy,
    Paste,
    Nudge { direction: Direction, fast: bool },
    Align { alignment: Alignment },
    LayerUp,
    LayerDown,
    UpdateProperty { key: String, value: PropValue },
    SetPosition { x: f32, y: f32 },
    SetSize { width: f32, height: f32 },
    SetScreenBackground { color: String },
    Select { id: Option<ComponentId> },
    Undo,
    Redo,
    ToggleShortcutsOverlay,
}

impl<S: ComponentStore> EditorSession<S> {
    /// Executes one command against the session. Commands that require a
    /// selection are no-ops without one.
    pub fn execute(&mut self, command: EditorCommand) -> Result<(), EditorError> {
        match command {
            EditorCommand::AddComponent { kind } => {
                self.add_component_named(&kind)?;
            }
            EditorCommand::Delete => self.delete_selected()?,
            EditorCommand::Duplicate => {
                if let Some(id) = self.selection() {
                    self.duplicate(id)?;
                }
            }
            EditorCommand::Copy => self.copy(),
            EditorCommand::Paste => {
                self.paste()?;
            }
            EditorCommand::Nudge { direction, fast } => self.nudge(direction, fast),
            EditorCommand::Align { alignment } => self.align(alignment),
            EditorCommand::LayerUp => {
                if let Some(id) = self.selection() {
                    self.layer_up(id);
                }
            }
            EditorCommand::LayerDown => {
                if let Some(id) = self.selection() {
                    self.layer_down(id);
                }
            }
            EditorCommand::UpdateProperty { key, value } => {
                if let Some(id) = self.selection() {
                    self.update_property(id, &key, value);
                }
            }
            EditorCommand::SetPosition { x, y } => {
                if let Some(id) = self.selection() {
                    self.set_position(id, x, y);
                }
            }
            EditorCommand::SetSize { width, height } => {
                if let Some(id) = self.selection() {
                    self.set_size(id, width, height);
                }
            }
            EditorCommand::SetScreenBackground { color } => self.set_background_color(&color),
            EditorCommand::Select { id } => self.select(id),
            EditorCommand::Undo => {
                self.undo();
            }
            EditorCommand::Redo => {
                self.redo();
            }
            EditorCommand::ToggleShortcutsOverlay => self.toggle_shortcuts_overlay(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_serialize_tagged() {
        let json = serde_json::to_value(EditorCommand::Nudge {
            direction: Direction::Left,
            fast: true,
        })
        .unwrap();
        assert_eq!(json["type"], "nudge");
        assert_eq!(json["direction"], "left");
        assert_eq!(json["fast"], true);

        let json = serde_json::to_value(EditorCommand::Align {
            alignment: Alignment::Middle,
        })
        .unwrap();
        assert_eq!(json["type"], "align");
        assert_eq!(json["alignment"], "middle");
    }

    #[test]
    fn commands_deserialize() {
        let command: EditorCommand =
            serde_json::from_str(r#"{"type":"add_component","kind":"button"}"#).unwrap();
        assert_eq!(
            command,
            EditorCommand::AddComponent {
                kind: "button".into()
            }
        );

        let command: EditorCommand = serde_json::from_str(r#"{"type":"undo"}"#).unwrap();
        assert_eq!(command, EditorCommand::Undo);
    }
}
