//! Vertex type.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A location in the road network (street corner, district, depot).
///
/// Identity is the string id; the display name is informational only and
/// takes no part in equality or hashing.
///
/// # Examples
///
/// ```
/// use collect_routing::models::Vertex;
///
/// let a = Vertex::new("A").with_name("Town hall");
/// let b = Vertex::new("A");
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "Town hall");
/// assert_eq!(b.name(), "A");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: String,
    name: Option<String>,
}

impl Vertex {
    /// Creates a vertex with the given id and no display name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Unique id of this vertex.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, falling back to the id.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
