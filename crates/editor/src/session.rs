//! The editor session: one screen's components plus all transient editor
//! state (selection, clipboard, active gesture, snap guides).
//!
//! All state lives in this one value so the engine stays host-agnostic:
//! no globals, no rendering types. Mutations apply to the live component
//! list immediately (optimistic), then commit as a history snapshot and a
//! best-effort store call. A failed store write is logged and the local
//! state kept; a later reload may revert it.

use crate::error::EditorError;
use crate::interactivity::{Gesture, SnapGuides};
use forma_core::geometry::{
    clamp, round_unit, CANVAS_HEIGHT, CANVAS_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
use glam::Vec2;
use history::History;
use model::{
    definition, Component, ComponentDefinition, ComponentId, ComponentKind, NewComponent,
    NewScreen, ProjectId, PropValue, PropertyBag, Screen, ScreenId,
};
use serde::{Deserialize, Serialize};
use store::{ComponentPatch, ComponentStore, ScreenPatch};

/// Offset applied to duplicated and pasted components.
pub const PASTE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// A copied component, held by content. Identity fields are stripped;
/// paste instantiates a fresh row.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipboardItem {
    pub kind: ComponentKind,
    pub props: PropertyBag,
    pub styles: PropertyBag,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ClipboardItem {
    fn from_component(component: &Component) -> Self {
        Self {
            kind: component.kind,
            props: component.props.clone(),
            styles: component.styles.clone(),
            x: component.x,
            y: component.y,
            width: component.width,
            height: component.height,
        }
    }
}

/// A component row in an applied screen template.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub props: PropertyBag,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An inline text-editing request (double-click on text/button).
#[derive(Clone, Debug, PartialEq)]
pub struct TextEdit {
    pub id: ComponentId,
    /// The property key the edit writes back to.
    pub key: String,
    pub value: String,
}

/// One editing session over one project's screens.
pub struct EditorSession<S: ComponentStore> {
    store: S,
    project_id: ProjectId,
    screens: Vec<Screen>,
    current_screen: Option<ScreenId>,
    /// Components of the current screen, ascending by `layer_order`.
    components: Vec<Component>,
    selection: Option<ComponentId>,
    clipboard: Option<ClipboardItem>,
    history: History<Vec<Component>>,
    pub(crate) gesture: Option<Gesture>,
    pub(crate) snap_guides: SnapGuides,
    shortcuts_overlay: bool,
}

impl<S: ComponentStore> EditorSession<S> {
    /// Opens a session on `project_id`, creating a default home screen if
    /// the project has none, and loads the first screen's components.
    pub fn open(mut store: S, project_id: ProjectId) -> Result<Self, EditorError> {
        let mut screens = store.list_screens(project_id)?;
        if screens.is_empty() {
            let home = store.create_screen(NewScreen::default_home(project_id))?;
            screens.push(home);
        }

        let current_screen = screens.first().map(|s| s.id);
        let components = match current_screen {
            Some(id) => store.list_components(id)?,
            None => Vec::new(),
        };

        Ok(Self {
            store,
            project_id,
            screens,
            current_screen,
            history: History::new(components.clone()),
            components,
            selection: None,
            clipboard: None,
            gesture: None,
            snap_guides: SnapGuides::default(),
            shortcuts_overlay: false,
        })
    }

    // === Read access ===

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn current_screen_id(&self) -> Option<ScreenId> {
        self.current_screen
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.current_screen
            .and_then(|id| self.screens.iter().find(|s| s.id == id))
    }

    /// The current screen's components, ascending by layer order (paint
    /// order: later is on top).
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub fn selection(&self) -> Option<ComponentId> {
        self.selection
    }

    pub fn selected_component(&self) -> Option<&Component> {
        self.selection.and_then(|id| self.component(id))
    }

    pub fn clipboard(&self) -> Option<&ClipboardItem> {
        self.clipboard.as_ref()
    }

    pub fn snap_guides(&self) -> SnapGuides {
        self.snap_guides
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn shortcuts_overlay_visible(&self) -> bool {
        self.shortcuts_overlay
    }

    pub fn toggle_shortcuts_overlay(&mut self) {
        self.shortcuts_overlay = !self.shortcuts_overlay;
    }

    // === Selection & screens ===

    /// Selects a component (opening the property panel) or clears the
    /// selection (click on empty canvas).
    pub fn select(&mut self, id: Option<ComponentId>) {
        self.selection = id.filter(|id| self.component(*id).is_some());
    }

    /// Switches the active screen, reloading components and resetting
    /// history, selection, and any in-flight gesture.
    pub fn set_current_screen(&mut self, id: ScreenId) -> Result<(), EditorError> {
        if !self.screens.iter().any(|s| s.id == id) {
            return Err(EditorError::Store(store::StoreError::NotFound(
                id.to_string(),
            )));
        }
        self.components = self.store.list_components(id)?;
        self.history.reset(self.components.clone());
        self.current_screen = Some(id);
        self.selection = None;
        self.gesture = None;
        self.snap_guides.clear();
        Ok(())
    }

    /// Creates an additional screen and switches to it.
    pub fn add_screen(&mut self) -> Result<ScreenId, EditorError> {
        let draft = NewScreen::custom(self.project_id, self.screens.len());
        let screen = self.store.create_screen(draft)?;
        let id = screen.id;
        self.screens.push(screen);
        self.set_current_screen(id)?;
        Ok(id)
    }

    /// Sets the current screen's background color. Optimistic: a store
    /// failure is logged and the local value kept.
    pub fn set_background_color(&mut self, color: &str) {
        let Some(id) = self.current_screen else {
            return;
        };
        if let Some(screen) = self.screens.iter_mut().find(|s| s.id == id) {
            screen.background_color = color.to_string();
        }
        self.persist_screen(id, ScreenPatch::background_color(color));
    }

    /// Renames the current screen.
    pub fn rename_screen(&mut self, name: &str) {
        let Some(id) = self.current_screen else {
            return;
        };
        if let Some(screen) = self.screens.iter_mut().find(|s| s.id == id) {
            screen.name = name.to_string();
        }
        self.persist_screen(id, ScreenPatch::name(name));
    }

    // === Component lifecycle ===

    /// Adds a component from the catalog, centered horizontally at the
    /// default drop offset, on the top layer. The new component becomes
    /// the selection.
    pub fn add_component(&mut self, kind: ComponentKind) -> Result<ComponentId, EditorError> {
        let screen_id = self.current_screen.ok_or(EditorError::NoActiveScreen)?;
        let draft = definition(kind).instantiate(screen_id, self.components.len());
        self.insert_created(draft)
    }

    /// Adds a component by its catalog type name (templates, generated
    /// payloads). Fails with `UnknownKind` on a catalog miss.
    pub fn add_component_named(&mut self, name: &str) -> Result<ComponentId, EditorError> {
        let screen_id = self.current_screen.ok_or(EditorError::NoActiveScreen)?;
        let draft =
            ComponentDefinition::lookup(name)?.instantiate(screen_id, self.components.len());
        self.insert_created(draft)
    }

    fn insert_created(&mut self, draft: NewComponent) -> Result<ComponentId, EditorError> {
        let component = self.store.create_component(draft).map_err(|err| {
            log::error!("failed to create component: {err}");
            err
        })?;
        let id = component.id;
        self.components.push(component);
        self.selection = Some(id);
        self.commit();
        Ok(id)
    }

    /// Deletes a component, keeping `layer_order` dense. The deletion
    /// must be acknowledged by the store; a failed call aborts it.
    pub fn delete(&mut self, id: ComponentId) -> Result<(), EditorError> {
        if self.component(id).is_none() {
            return Ok(());
        }
        self.store.delete_component(id).map_err(|err| {
            log::error!("failed to delete component {id}: {err}");
            err
        })?;
        self.components.retain(|c| c.id != id);
        if self.selection == Some(id) {
            self.selection = None;
        }
        self.renumber_layers();
        self.commit();
        Ok(())
    }

    /// Deletes the selection, if any.
    pub fn delete_selected(&mut self) -> Result<(), EditorError> {
        match self.selection {
            Some(id) => self.delete(id),
            None => Ok(()),
        }
    }

    /// Duplicates a component at a (+20, +20) offset on the top layer.
    pub fn duplicate(&mut self, id: ComponentId) -> Result<ComponentId, EditorError> {
        let Some(source) = self.component(id) else {
            return Err(EditorError::Store(store::StoreError::NotFound(
                id.to_string(),
            )));
        };
        let draft = source.duplicate(PASTE_OFFSET, self.components.len());
        let component = self.store.create_component(draft).map_err(|err| {
            log::error!("failed to duplicate component {id}: {err}");
            err
        })?;
        let new_id = component.id;
        self.components.push(component);
        self.commit();
        Ok(new_id)
    }

    // === Clipboard ===

    /// Captures the selected component's content into the clipboard slot.
    pub fn copy(&mut self) {
        if let Some(component) = self.selected_component() {
            self.clipboard = Some(ClipboardItem::from_component(component));
        }
    }

    /// Pastes the clipboard at a (+20, +20) offset, appended at the top
    /// layer; the new component becomes the selection. A no-op when the
    /// slot is empty or no screen is active.
    pub fn paste(&mut self) -> Result<Option<ComponentId>, EditorError> {
        let (Some(item), Some(screen_id)) = (self.clipboard.clone(), self.current_screen) else {
            return Ok(None);
        };
        let draft = NewComponent {
            screen_id,
            kind: item.kind,
            props: item.props,
            styles: item.styles,
            x: clamp(item.x + PASTE_OFFSET.x, 0.0, CANVAS_WIDTH - item.width),
            y: clamp(item.y + PASTE_OFFSET.y, 0.0, CANVAS_HEIGHT - item.height),
            width: item.width,
            height: item.height,
            layer_order: self.components.len(),
        };
        self.insert_created(draft).map(Some)
    }

    // === Property edits ===

    /// The single mutation entry point for property edits: replaces one
    /// key in the component's bag and commits the component. Position and
    /// size are untouched.
    pub fn update_property(&mut self, id: ComponentId, key: &str, value: PropValue) {
        let Some(component) = self.component_mut(id) else {
            log::debug!("property edit on missing component {id}");
            return;
        };
        component.props.insert(key.to_string(), value);
        let props = component.props.clone();
        self.commit();
        self.persist(id, ComponentPatch::props(props));
    }

    /// Moves a component to an absolute position (property panel X/Y
    /// fields), clamped into canvas bounds and rounded.
    pub fn set_position(&mut self, id: ComponentId, x: f32, y: f32) {
        let Some(component) = self.component_mut(id) else {
            return;
        };
        component.x = round_unit(clamp(x, 0.0, CANVAS_WIDTH - component.width));
        component.y = round_unit(clamp(y, 0.0, CANVAS_HEIGHT - component.height));
        let (x, y) = (component.x, component.y);
        self.commit();
        self.persist(id, ComponentPatch::position(x, y));
    }

    /// Resizes a component (property panel W/H fields), clamped to the
    /// size floors and the canvas.
    pub fn set_size(&mut self, id: ComponentId, width: f32, height: f32) {
        let Some(component) = self.component_mut(id) else {
            return;
        };
        component.width = round_unit(clamp(width, MIN_WIDTH, CANVAS_WIDTH - component.x));
        component.height = round_unit(clamp(height, MIN_HEIGHT, CANVAS_HEIGHT - component.y));
        let patch = ComponentPatch::bounds(
            component.x,
            component.y,
            component.width,
            component.height,
        );
        self.commit();
        self.persist(id, patch);
    }

    /// Returns the inline text-edit request for a double-clicked
    /// component, when its kind supports one.
    pub fn begin_text_edit(&self, id: ComponentId) -> Option<TextEdit> {
        let component = self.component(id)?;
        if !matches!(component.kind, ComponentKind::Text | ComponentKind::Button) {
            return None;
        }
        let value = component
            .props
            .get("text")
            .and_then(|v| v.as_text())
            .unwrap_or_default()
            .to_string();
        Some(TextEdit {
            id,
            key: "text".to_string(),
            value,
        })
    }

    // === Layering ===

    /// Moves a component one layer up (toward the top of the stack).
    /// No-op on the topmost component.
    pub fn layer_up(&mut self, id: ComponentId) {
        if let Some(index) = self.components.iter().position(|c| c.id == id) {
            if index + 1 < self.components.len() {
                self.components.swap(index, index + 1);
                self.renumber_layers();
            }
        }
    }

    /// Moves a component one layer down. No-op on the bottommost.
    pub fn layer_down(&mut self, id: ComponentId) {
        if let Some(index) = self.components.iter().position(|c| c.id == id) {
            if index > 0 {
                self.components.swap(index, index - 1);
                self.renumber_layers();
            }
        }
    }

    /// Reassigns dense, contiguous layer orders matching the vec order
    /// and persists every row whose order changed.
    fn renumber_layers(&mut self) {
        let mut changed = Vec::new();
        for (index, component) in self.components.iter_mut().enumerate() {
            if component.layer_order != index {
                component.layer_order = index;
                changed.push((component.id, index));
            }
        }
        for (id, order) in changed {
            self.persist(id, ComponentPatch::layer(order));
        }
    }

    // === Alignment & nudging ===

    /// Aligns the selected component against the canvas. One history
    /// commit per invocation.
    pub fn align(&mut self, alignment: crate::command::Alignment) {
        use crate::command::Alignment::*;
        let Some(id) = self.selection else {
            return;
        };
        let Some(component) = self.component_mut(id) else {
            return;
        };

        match alignment {
            Left => component.x = 0.0,
            Right => component.x = CANVAS_WIDTH - component.width,
            Top => component.y = 0.0,
            Bottom => component.y = CANVAS_HEIGHT - component.height,
            Center | Horizontal => {
                component.x = round_unit(CANVAS_WIDTH / 2.0 - component.width / 2.0)
            }
            Middle | Vertical => {
                component.y = round_unit(CANVAS_HEIGHT / 2.0 - component.height / 2.0)
            }
        }

        let (x, y) = (component.x, component.y);
        self.commit();
        self.persist(id, ComponentPatch::position(x, y));
    }

    /// Nudges the selected component by one unit (ten with `fast`),
    /// clamped. Each key event commits its own history snapshot.
    pub fn nudge(&mut self, direction: crate::command::Direction, fast: bool) {
        use crate::command::Direction::*;
        let Some(id) = self.selection else {
            return;
        };
        let Some(component) = self.component_mut(id) else {
            return;
        };

        let step = if fast { 10.0 } else { 1.0 };
        match direction {
            Up => component.y = (component.y - step).max(0.0),
            Down => component.y = (component.y + step).min(CANVAS_HEIGHT - component.height),
            Left => component.x = (component.x - step).max(0.0),
            Right => component.x = (component.x + step).min(CANVAS_WIDTH - component.width),
        }

        let (x, y) = (component.x, component.y);
        self.commit();
        self.persist(id, ComponentPatch::position(x, y));
    }

    // === Templates & presets ===

    /// Replaces the current screen's components with a template: existing
    /// rows are deleted, template rows inserted with dense layer orders.
    pub fn apply_template(
        &mut self,
        template: Vec<TemplateComponent>,
    ) -> Result<(), EditorError> {
        let screen_id = self.current_screen.ok_or(EditorError::NoActiveScreen)?;

        for component in std::mem::take(&mut self.components) {
            if let Err(err) = self.store.delete_component(component.id) {
                log::error!("failed to clear component {}: {err}", component.id);
            }
        }
        self.selection = None;

        for (index, row) in template.into_iter().enumerate() {
            let draft = NewComponent {
                screen_id,
                kind: row.kind,
                props: row.props,
                styles: PropertyBag::new(),
                x: row.x,
                y: row.y,
                width: row.width,
                height: row.height,
                layer_order: index,
            };
            match self.store.create_component(draft) {
                Ok(component) => self.components.push(component),
                Err(err) => log::error!("failed to insert template component: {err}"),
            }
        }
        self.commit();
        Ok(())
    }

    /// Appends a preset's components at the top layers.
    pub fn apply_preset(&mut self, preset: Vec<TemplateComponent>) -> Result<(), EditorError> {
        let screen_id = self.current_screen.ok_or(EditorError::NoActiveScreen)?;
        for row in preset {
            let layer_order = self.components.len();
            let draft = NewComponent {
                screen_id,
                kind: row.kind,
                props: row.props,
                styles: PropertyBag::new(),
                x: row.x,
                y: row.y,
                width: row.width,
                height: row.height,
                layer_order,
            };
            match self.store.create_component(draft) {
                Ok(component) => self.components.push(component),
                Err(err) => log::error!("failed to insert preset component: {err}"),
            }
        }
        self.commit();
        Ok(())
    }

    // === History ===

    /// Steps back one committed snapshot. Returns false at the bottom.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.components = snapshot.clone();
        self.prune_selection();
        true
    }

    /// Steps forward one snapshot. Returns false at the top.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.components = snapshot.clone();
        self.prune_selection();
        true
    }

    fn prune_selection(&mut self) {
        if let Some(id) = self.selection {
            if self.component(id).is_none() {
                self.selection = None;
            }
        }
    }

    /// Pushes the live component list as a new history snapshot.
    pub(crate) fn commit(&mut self) {
        self.history.set(self.components.clone());
    }

    /// Best-effort component persistence: failures are logged, the
    /// optimistic local state is kept, and nothing retries.
    pub(crate) fn persist(&mut self, id: ComponentId, patch: ComponentPatch) {
        if let Err(err) = self.store.update_component(id, patch) {
            log::error!("failed to persist component {id}: {err}");
        }
    }

    fn persist_screen(&mut self, id: ScreenId, patch: ScreenPatch) {
        if let Err(err) = self.store.update_screen(id, patch) {
            log::error!("failed to persist screen {id}: {err}");
        }
    }

    /// Consumes the session, returning the store (test access).
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Alignment, Direction};
    use model::ComponentKind;
    use store::MemoryStore;

    fn session() -> EditorSession<MemoryStore> {
        EditorSession::open(MemoryStore::new(), ProjectId::new()).unwrap()
    }

    #[test]
    fn open_creates_home_screen() {
        let session = session();
        assert_eq!(session.screens().len(), 1);
        let screen = session.current_screen().unwrap();
        assert_eq!(screen.name, "Home");
        assert!(screen.is_home_screen);
        assert!(session.components().is_empty());
    }

    #[test]
    fn add_component_selects_and_persists() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Button).unwrap();
        assert_eq!(session.selection(), Some(id));
        assert_eq!(session.components().len(), 1);
        assert!(session.can_undo());

        let store = session.into_store();
        assert_eq!(store.component_count(), 1);
        assert_eq!(store.component(id).unwrap().x, 112.0);
    }

    #[test]
    fn add_component_named_rejects_unknown() {
        let mut session = session();
        assert!(session.add_component_named("text").is_ok());
        let err = session.add_component_named("tabbar").unwrap_err();
        assert!(matches!(err, EditorError::UnknownKind(_)));
    }

    #[test]
    fn delete_renumbers_layers_densely() {
        let mut session = session();
        let a = session.add_component(ComponentKind::Text).unwrap();
        let b = session.add_component(ComponentKind::Text).unwrap();
        let c = session.add_component(ComponentKind::Text).unwrap();
        assert_eq!(session.component(c).unwrap().layer_order, 2);

        session.delete(b).unwrap();
        let orders: Vec<usize> = session.components().iter().map(|x| x.layer_order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(session.component(a).unwrap().layer_order, 0);
        assert_eq!(session.component(c).unwrap().layer_order, 1);

        let store = session.into_store();
        assert!(store.component(b).is_none());
        assert_eq!(store.component(c).unwrap().layer_order, 1);
    }

    #[test]
    fn delete_clears_matching_selection() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Card).unwrap();
        session.delete(id).unwrap();
        assert_eq!(session.selection(), None);
        assert!(session.components().is_empty());
    }

    #[test]
    fn duplicate_offsets_and_lands_on_top() {
        let mut session = session();
        let a = session.add_component(ComponentKind::Button).unwrap();
        let b = session.duplicate(a).unwrap();

        let original = session.component(a).unwrap();
        let copy = session.component(b).unwrap();
        assert_eq!(copy.x, original.x + 20.0);
        assert_eq!(copy.y, original.y + 20.0);
        assert_eq!(copy.layer_order, 1);
        // Duplicating keeps the original selected.
        assert_eq!(session.selection(), Some(a));
    }

    #[test]
    fn paste_is_noop_on_empty_clipboard() {
        let mut session = session();
        assert_eq!(session.paste().unwrap(), None);
        assert!(!session.can_undo());
    }

    #[test]
    fn copy_paste_offsets_and_selects() {
        let mut session = session();
        let a = session.add_component(ComponentKind::Text).unwrap();
        session.copy();
        let pasted = session.paste().unwrap().unwrap();

        let original = session.component(a).unwrap();
        let copy = session.component(pasted).unwrap();
        assert_eq!(copy.x, original.x + 20.0);
        assert_eq!(copy.y, original.y + 20.0);
        assert_eq!(copy.kind, ComponentKind::Text);
        assert_eq!(session.selection(), Some(pasted));

        // Pasting again works from the same clipboard content.
        assert!(session.paste().unwrap().is_some());
        assert_eq!(session.components().len(), 3);
    }

    #[test]
    fn paste_clamps_into_canvas() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Button).unwrap();
        session.set_position(id, 300.0, 640.0);
        // Button is 150x44; position clamps to (225, 623).
        session.copy();
        let pasted = session.paste().unwrap().unwrap();
        let copy = session.component(pasted).unwrap();
        assert_eq!((copy.x, copy.y), (225.0, 623.0));
    }

    #[test]
    fn update_property_replaces_one_key() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Text).unwrap();
        session.update_property(id, "fontSize", 24.into());

        let component = session.component(id).unwrap();
        assert_eq!(component.props["fontSize"], 24.into());
        assert_eq!(component.props["text"], "Sample Text".into());

        let store = session.into_store();
        assert_eq!(store.component(id).unwrap().props["fontSize"], 24.into());
    }

    #[test]
    fn set_position_clamps_and_rounds() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Button).unwrap();
        session.set_position(id, -10.0, 700.0);
        let component = session.component(id).unwrap();
        assert_eq!((component.x, component.y), (0.0, 623.0));

        session.set_position(id, 50.4, 60.6);
        let component = session.component(id).unwrap();
        assert_eq!((component.x, component.y), (50.0, 61.0));
    }

    #[test]
    fn set_size_respects_floors() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Image).unwrap();
        session.set_size(id, 5.0, 5.0);
        let component = session.component(id).unwrap();
        assert_eq!((component.width, component.height), (30.0, 20.0));
    }

    #[test]
    fn align_against_canvas() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Button).unwrap();

        session.align(Alignment::Left);
        assert_eq!(session.component(id).unwrap().x, 0.0);
        session.align(Alignment::Right);
        assert_eq!(session.component(id).unwrap().x, 225.0);
        session.align(Alignment::Center);
        assert_eq!(session.component(id).unwrap().x, 113.0);
        session.align(Alignment::Top);
        assert_eq!(session.component(id).unwrap().y, 0.0);
        session.align(Alignment::Bottom);
        assert_eq!(session.component(id).unwrap().y, 623.0);
        session.align(Alignment::Middle);
        assert_eq!(session.component(id).unwrap().y, 312.0);
    }

    #[test]
    fn nudge_steps_and_clamps() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Text).unwrap();
        session.set_position(id, 5.0, 100.0);

        session.nudge(Direction::Left, false);
        assert_eq!(session.component(id).unwrap().x, 4.0);
        session.nudge(Direction::Left, true);
        assert_eq!(session.component(id).unwrap().x, 0.0);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        session.nudge(Direction::Up, true);
        assert_eq!(session.component(id).unwrap().y, 0.0);
    }

    #[test]
    fn undo_redo_walk_snapshots() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Text).unwrap();
        session.set_position(id, 50.0, 100.0);

        assert!(session.undo());
        assert_eq!(session.component(id).unwrap().x, 87.0);
        assert!(session.undo());
        assert!(session.components().is_empty());
        assert_eq!(session.selection(), None);
        assert!(!session.undo());

        assert!(session.redo());
        assert!(session.redo());
        assert_eq!(session.component(id).unwrap().x, 50.0);
        assert!(!session.redo());
    }

    #[test]
    fn edit_after_undo_truncates_redo() {
        let mut session = session();
        let id = session.add_component(ComponentKind::Text).unwrap();
        session.set_position(id, 10.0, 10.0);
        session.set_position(id, 20.0, 20.0);

        session.undo();
        session.set_position(id, 99.0, 99.0);
        assert!(!session.can_redo());
        assert_eq!(session.component(id).unwrap().x, 99.0);
    }

    #[test]
    fn layering_swaps_without_history() {
        let mut session = session();
        let a = session.add_component(ComponentKind::Text).unwrap();
        let b = session.add_component(ComponentKind::Text).unwrap();
        let depth = session.history.depth();

        session.layer_up(a);
        assert_eq!(session.component(a).unwrap().layer_order, 1);
        assert_eq!(session.component(b).unwrap().layer_order, 0);
        assert_eq!(session.history.depth(), depth);

        // Already on top: no-op.
        session.layer_up(a);
        assert_eq!(session.component(a).unwrap().layer_order, 1);

        session.layer_down(a);
        assert_eq!(session.component(a).unwrap().layer_order, 0);
    }

    #[test]
    fn screen_switch_resets_history_and_selection() {
        let mut session = session();
        let home = session.current_screen_id().unwrap();
        session.add_component(ComponentKind::Header).unwrap();

        let second = session.add_screen().unwrap();
        assert_eq!(session.current_screen_id(), Some(second));
        assert!(session.components().is_empty());
        assert_eq!(session.selection(), None);
        assert!(!session.can_undo());
        assert_eq!(session.current_screen().unwrap().name, "Screen 2");

        session.set_current_screen(home).unwrap();
        assert_eq!(session.components().len(), 1);
    }

    #[test]
    fn background_color_persists() {
        let mut session = session();
        let id = session.current_screen_id().unwrap();
        session.set_background_color("#112233");
        assert_eq!(session.current_screen().unwrap().background_color, "#112233");

        let store = session.into_store();
        assert_eq!(store.screen(id).unwrap().background_color, "#112233");
    }

    #[test]
    fn templates_replace_presets_append() {
        let mut session = session();
        session.add_component(ComponentKind::Text).unwrap();
        session.add_component(ComponentKind::Text).unwrap();

        let row = |kind, y| TemplateComponent {
            kind,
            props: PropertyBag::new(),
            x: 0.0,
            y,
            width: 375.0,
            height: 60.0,
        };
        session
            .apply_template(vec![row(ComponentKind::Header, 0.0)])
            .unwrap();
        assert_eq!(session.components().len(), 1);
        assert_eq!(session.components()[0].layer_order, 0);

        session
            .apply_preset(vec![row(ComponentKind::Card, 100.0), row(ComponentKind::Card, 240.0)])
            .unwrap();
        assert_eq!(session.components().len(), 3);
        let orders: Vec<usize> = session.components().iter().map(|c| c.layer_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn text_edit_only_for_text_kinds() {
        let mut session = session();
        let text = session.add_component(ComponentKind::Text).unwrap();
        let image = session.add_component(ComponentKind::Image).unwrap();

        let edit = session.begin_text_edit(text).unwrap();
        assert_eq!(edit.key, "text");
        assert_eq!(edit.value, "Sample Text");
        assert!(session.begin_text_edit(image).is_none());
    }
}
