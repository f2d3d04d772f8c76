use serde::{Deserialize, Serialize};

use campus_core::{Identified, Named, StudentId};

use crate::person::Person;

/// Specialized entity: a [`Person`] with a student identifier.
///
/// The person is embedded, and flattened on the wire, so a student's
/// attributes are exactly the person's plus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    id: StudentId,
}

impl Student {
    /// Builds the embedded person from `name`, then attaches `id`.
    pub fn new(name: impl Into<String>, id: impl Into<StudentId>) -> Self {
        let person = Person::new(name);
        let id = id.into();
        tracing::debug!(name = %person.name(), %id, "student constructed");
        Self { person, id }
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    /// The inherited part of this student.
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn into_person(self) -> Person {
        self.person
    }
}

impl Named for Student {
    fn name(&self) -> &str {
        Named::name(&self.person)
    }
}

impl Identified for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
