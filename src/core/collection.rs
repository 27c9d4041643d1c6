//! Collections: Objekt-Mitglieder plus Kind-Collections (azyklischer Graph).

use super::ObjectId;

/// Eindeutige Collection-ID innerhalb einer Szene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(pub u64);

/// Collection mit schwachen Verweisen auf Objekte und Kind-Collections
#[derive(Debug, Clone)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    /// Mitglieder in Reihenfolge
    pub objects: Vec<ObjectId>,
    /// Kind-Collections in Reihenfolge
    pub children: Vec<CollectionId>,
}

impl Collection {
    /// Erstellt eine leere Collection
    pub fn new(id: CollectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            objects: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Fügt Mitglieder hinzu
    pub fn with_objects(mut self, objects: impl IntoIterator<Item = ObjectId>) -> Self {
        self.objects.extend(objects);
        self
    }

    /// Fügt Kind-Collections hinzu
    pub fn with_children(mut self, children: impl IntoIterator<Item = CollectionId>) -> Self {
        self.children.extend(children);
        self
    }
}
