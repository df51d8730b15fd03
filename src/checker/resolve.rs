//! Name resolution shared by both checkers

use crate::api::{Connection, Source};

/// A remote resource addressable by display name
pub trait Named {
    /// The resource's display name
    fn name(&self) -> &str;
}

impl Named for Connection {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Source {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve a resource by case-insensitive exact name match.
///
/// The first match in listing order wins; duplicate names beyond the first
/// are ignored.
pub fn resolve_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Option<&'a T> {
    let query = query.to_lowercase();
    items.iter().find(|item| item.name().to_lowercase() == query)
}
