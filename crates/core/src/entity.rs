//! Entity capabilities: what a caller may read off an entity.
//!
//! Procedures ask for a capability (`Named`, `Identified`) instead of a
//! concrete entity type, so any entity exposing the attribute is accepted.

/// An entity with a readable display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// An entity with a readable identifier.
pub trait Identified {
    /// Identifier type. Rendered verbatim by `Display`.
    type Id: core::fmt::Display + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }
}
