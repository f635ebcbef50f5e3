//! In-memory store implementation.

use crate::error::StoreError;
use crate::patch::{ComponentPatch, ScreenPatch};
use crate::traits::ComponentStore;
use model::{Component, ComponentId, NewComponent, NewScreen, ProjectId, Screen, ScreenId};
use std::collections::HashMap;
use uuid::Uuid;

/// HashMap-backed store. Assigns v4 uuids on create, like the real
/// backend does server-side.
#[derive(Debug, Default)]
pub struct MemoryStore {
    components: HashMap<ComponentId, Component>,
    screens: HashMap<ScreenId, Screen>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored components, across all screens.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Direct read access for test assertions.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn screen(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.get(&id)
    }
}

impl ComponentStore for MemoryStore {
    fn list_components(&mut self, screen_id: ScreenId) -> Result<Vec<Component>, StoreError> {
        let mut rows: Vec<Component> = self
            .components
            .values()
            .filter(|c| c.screen_id == screen_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.layer_order);
        Ok(rows)
    }

    fn create_component(&mut self, draft: NewComponent) -> Result<Component, StoreError> {
        let component = draft.with_id(ComponentId(Uuid::new_v4()));
        self.components.insert(component.id, component.clone());
        Ok(component)
    }

    fn update_component(
        &mut self,
        id: ComponentId,
        patch: ComponentPatch,
    ) -> Result<(), StoreError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(props) = patch.props {
            component.props = props;
        }
        if let Some(styles) = patch.styles {
            component.styles = styles;
        }
        if let Some(x) = patch.x {
            component.x = x;
        }
        if let Some(y) = patch.y {
            component.y = y;
        }
        if let Some(width) = patch.width {
            component.width = width;
        }
        if let Some(height) = patch.height {
            component.height = height;
        }
        if let Some(layer_order) = patch.layer_order {
            component.layer_order = layer_order;
        }
        Ok(())
    }

    fn delete_component(&mut self, id: ComponentId) -> Result<(), StoreError> {
        self.components
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_screens(&mut self, project_id: ProjectId) -> Result<Vec<Screen>, StoreError> {
        let mut rows: Vec<Screen> = self
            .screens
            .values()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.order_index);
        Ok(rows)
    }

    fn create_screen(&mut self, draft: NewScreen) -> Result<Screen, StoreError> {
        let screen = draft.with_id(ScreenId(Uuid::new_v4()));
        self.screens.insert(screen.id, screen.clone());
        Ok(screen)
    }

    fn update_screen(&mut self, id: ScreenId, patch: ScreenPatch) -> Result<(), StoreError> {
        let screen = self
            .screens
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            screen.name = name;
        }
        if let Some(background_color) = patch.background_color {
            screen.background_color = background_color;
        }
        if let Some(order_index) = patch.order_index {
            screen.order_index = order_index;
        }
        if let Some(is_home_screen) = patch.is_home_screen {
            screen.is_home_screen = is_home_screen;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{definition, ComponentKind};

    #[test]
    fn create_assigns_distinct_ids() {
        let mut store = MemoryStore::new();
        let screen = store
            .create_screen(NewScreen::default_home(ProjectId::new()))
            .unwrap();

        let a = store
            .create_component(definition(ComponentKind::Text).instantiate(screen.id, 0))
            .unwrap();
        let b = store
            .create_component(definition(ComponentKind::Text).instantiate(screen.id, 1))
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn list_orders_by_layer() {
        let mut store = MemoryStore::new();
        let screen = store
            .create_screen(NewScreen::default_home(ProjectId::new()))
            .unwrap();

        for order in [2usize, 0, 1] {
            store
                .create_component(definition(ComponentKind::Card).instantiate(screen.id, order))
                .unwrap();
        }
        let rows = store.list_components(screen.id).unwrap();
        let orders: Vec<usize> = rows.iter().map(|c| c.layer_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn patch_updates_only_named_fields() {
        let mut store = MemoryStore::new();
        let screen = store
            .create_screen(NewScreen::default_home(ProjectId::new()))
            .unwrap();
        let created = store
            .create_component(definition(ComponentKind::Button).instantiate(screen.id, 0))
            .unwrap();

        store
            .update_component(created.id, ComponentPatch::position(50.0, 60.0))
            .unwrap();
        let stored = store.component(created.id).unwrap();
        assert_eq!((stored.x, stored.y), (50.0, 60.0));
        assert_eq!(stored.width, created.width);
    }

    #[test]
    fn missing_rows_are_not_found() {
        let mut store = MemoryStore::new();
        let err = store.delete_component(ComponentId::new()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
