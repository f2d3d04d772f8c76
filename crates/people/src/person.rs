use serde::{Deserialize, Serialize};

use campus_core::Named;

/// Base entity: a person known by a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
}

impl Person {
    /// The name is stored as given; it is not validated.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, "person constructed");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}
