//! Screens: the surfaces components are placed on.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenId(pub Uuid);

impl ScreenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen-{}", self.0)
    }
}

/// Identifier for the owning project. Projects themselves are a
/// collaborator concern; the engine only scopes screen queries by them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// A screen in a project. At most one screen per project is the home
/// screen. Screens are never deleted from within the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: ScreenId,
    pub project_id: ProjectId,
    pub name: String,
    pub background_color: String,
    pub order_index: usize,
    pub is_home_screen: bool,
}

/// A screen draft awaiting an id from the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewScreen {
    pub project_id: ProjectId,
    pub name: String,
    pub background_color: String,
    pub order_index: usize,
    pub is_home_screen: bool,
}

impl NewScreen {
    /// The screen created automatically when a project has none.
    pub fn default_home(project_id: ProjectId) -> Self {
        Self {
            project_id,
            name: "Home".to_string(),
            background_color: "#000000".to_string(),
            order_index: 0,
            is_home_screen: true,
        }
    }

    /// An additional user-created screen, named by position.
    pub fn custom(project_id: ProjectId, order_index: usize) -> Self {
        Self {
            project_id,
            name: format!("Screen {}", order_index + 1),
            background_color: "#000000".to_string(),
            order_index,
            is_home_screen: false,
        }
    }

    pub fn with_id(self, id: ScreenId) -> Screen {
        Screen {
            id,
            project_id: self.project_id,
            name: self.name,
            background_color: self.background_color,
            order_index: self.order_index,
            is_home_screen: self.is_home_screen,
        }
    }
}
