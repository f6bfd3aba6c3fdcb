//! Category types
//!
//! Categories form a plain tree. A category only knows its parent's identifier;
//! children are found by asking the category repository.

use uuid::Uuid;

/// Category identifier
pub type CategoryId = Uuid;

/// Label attached to transactions for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    parent: Option<CategoryId>,
}

impl Category {
    /// Create a top-level category with a fresh identifier
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            parent: None,
        }
    }

    /// Attach this category below `parent`
    pub fn with_parent(mut self, parent: CategoryId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<CategoryId> {
        self.parent
    }
}
