//! Collaborator trait seams.

use crate::error::StoreError;
use crate::patch::{ComponentPatch, ScreenPatch};
use model::{Component, ComponentId, NewComponent, NewScreen, ProjectId, Screen, ScreenId};

/// Persistence collaborator for screens and components.
///
/// Implementations assign ids on create. List results come back ordered:
/// components by `layer_order`, screens by `order_index`.
pub trait ComponentStore {
    fn list_components(&mut self, screen_id: ScreenId) -> Result<Vec<Component>, StoreError>;
    fn create_component(&mut self, draft: NewComponent) -> Result<Component, StoreError>;
    fn update_component(
        &mut self,
        id: ComponentId,
        patch: ComponentPatch,
    ) -> Result<(), StoreError>;
    fn delete_component(&mut self, id: ComponentId) -> Result<(), StoreError>;

    fn list_screens(&mut self, project_id: ProjectId) -> Result<Vec<Screen>, StoreError>;
    fn create_screen(&mut self, draft: NewScreen) -> Result<Screen, StoreError>;
    fn update_screen(&mut self, id: ScreenId, patch: ScreenPatch) -> Result<(), StoreError>;
}

/// Upload collaborator for image-source properties.
pub trait ImageStore {
    /// Stores the image and returns a URL (or data URI) for the `source`
    /// property.
    fn upload_image(&mut self, bytes: &[u8], content_type: &str) -> Result<String, StoreError>;
}
