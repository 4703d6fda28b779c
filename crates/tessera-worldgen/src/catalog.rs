//! Indexed catalog of spawnable entities.
//!
//! Placements cross the network as small integers, so the session layer needs
//! a stable mapping between names and indices that all peers agree on. Items
//! and world objects share one catalog and are told apart by [`EntityKind`].

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::biome::ObjectRef;

/// What kind of thing a catalog entry instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Something that can be picked up into an inventory.
    Item,
    /// A placed world object (tree, rock, chest).
    Object,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: EntityKind,
}

/// Index ↔ entry lookups shared by everything that serializes entity references.
pub trait IndexedCatalog {
    type Entry;

    fn resolve_from_index(&self, index: u32) -> Option<&Self::Entry>;

    fn index_of(&self, name: &str) -> Option<u32>;
}

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate catalog entry: {0}")]
    DuplicateName(String),
}

/// Append-only catalog; indices are assigned in insertion order.
#[derive(Clone, Debug, Default)]
pub struct EntityCatalog {
    entries: Vec<CatalogEntry>,
    by_name: HashMap<String, u32>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog of one kind from a list of names.
    pub fn from_names<I, S>(kind: EntityKind, names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.insert(name, kind)?;
        }
        Ok(catalog)
    }

    /// Add an entry, returning its index.
    pub fn insert(&mut self, name: impl Into<String>, kind: EntityKind) -> Result<u32, CatalogError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(CatalogError::DuplicateName(name));
        }
        let index = self.entries.len() as u32;
        self.by_name.insert(name.clone(), index);
        self.entries.push(CatalogEntry { name, kind });
        Ok(index)
    }

    /// `ObjectRef` for a named world object, for use in spawn rules.
    pub fn object_ref(&self, name: &str) -> Option<ObjectRef> {
        let index = self.index_of(name)?;
        match self.entries[index as usize].kind {
            EntityKind::Object => Some(ObjectRef(index)),
            EntityKind::Item => None,
        }
    }

    /// Entry referenced by a spawn placement.
    pub fn resolve_object(&self, object: ObjectRef) -> Option<&CatalogEntry> {
        self.resolve_from_index(object.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IndexedCatalog for EntityCatalog {
    type Entry = CatalogEntry;

    fn resolve_from_index(&self, index: u32) -> Option<&CatalogEntry> {
        self.entries.get(index as usize)
    }

    fn index_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let catalog = EntityCatalog::from_names(EntityKind::Object, ["tree", "rock", "bush"]).unwrap();
        assert_eq!(catalog.index_of("rock"), Some(1));
        assert_eq!(catalog.resolve_from_index(2).unwrap().name, "bush");
        assert!(catalog.resolve_from_index(3).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = EntityCatalog::from_names(EntityKind::Item, ["apple", "apple"]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(n)) if n == "apple"));
    }

    #[test]
    fn test_object_ref_only_for_objects() {
        let mut catalog = EntityCatalog::new();
        catalog.insert("berry", EntityKind::Item).unwrap();
        catalog.insert("bush", EntityKind::Object).unwrap();

        assert_eq!(catalog.object_ref("bush"), Some(ObjectRef(1)));
        assert_eq!(catalog.object_ref("berry"), None);
        assert_eq!(catalog.object_ref("missing"), None);
        assert_eq!(
            catalog.resolve_object(ObjectRef(1)).map(|e| e.kind),
            Some(EntityKind::Object)
        );
    }
}
