//! Ausgewertete Szene: Objekte in Render-Reihenfolge plus Collection-Graph.

use super::{Collection, CollectionId, ObjectId, SceneObject};
use indexmap::IndexMap;

/// Snapshot einer ausgewerteten Szene.
///
/// Die Einfüge-Reihenfolge der Objekte ist die Render-Reihenfolge.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Alle Objekte, indexiert nach ID
    pub objects: IndexMap<ObjectId, SceneObject>,
    /// Alle Collections, indexiert nach ID
    pub collections: IndexMap<CollectionId, Collection>,
    /// Wurzel-Collection der Szene
    pub master_collection: CollectionId,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// ID der automatisch angelegten Wurzel-Collection
    pub const MASTER_COLLECTION: CollectionId = CollectionId(0);

    /// Erstellt eine leere Szene mit Wurzel-Collection "Scene Collection"
    pub fn new() -> Self {
        let mut collections = IndexMap::new();
        collections.insert(
            Self::MASTER_COLLECTION,
            Collection::new(Self::MASTER_COLLECTION, "Scene Collection"),
        );
        Self {
            objects: IndexMap::new(),
            collections,
            master_collection: Self::MASTER_COLLECTION,
        }
    }

    /// Fügt ein Objekt hinzu (ersetzt ein vorhandenes mit gleicher ID)
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.insert(object.id, object);
    }

    /// Fügt eine Collection hinzu
    pub fn add_collection(&mut self, collection: Collection) {
        self.collections.insert(collection.id, collection);
    }

    /// Findet ein Objekt
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Mutable Referenz auf ein Objekt
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Findet eine Collection
    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(&id)
    }

    /// Anzahl Objekte
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Sichtbare Objekte in Render-Reihenfolge
    pub fn evaluated_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values().filter(|object| object.visible)
    }

    /// Alle sichtbaren Objekte derselben Edit-Sitzung wie `primary`
    /// (gleicher Typ, gleicher Modus), in Szenen-Reihenfolge.
    pub fn objects_in_edit_session<'a>(
        &'a self,
        primary: &'a SceneObject,
    ) -> impl Iterator<Item = &'a SceneObject> {
        let kind = primary.kind();
        let mode = primary.mode;
        self.objects
            .values()
            .filter(move |object| object.visible && object.kind() == kind && object.mode == mode)
    }

    /// Sammelt alle Objekte einer Collection rekursiv: zuerst die eigenen Mitglieder,
    /// dann die Kind-Collections (Tiefensuche). Unbekannte IDs werden übersprungen.
    pub fn collection_objects(&self, id: CollectionId) -> Vec<&SceneObject> {
        let mut members = Vec::new();
        self.collect_members(id, &mut members);
        members
    }

    fn collect_members<'a>(&'a self, id: CollectionId, out: &mut Vec<&'a SceneObject>) {
        let Some(collection) = self.collections.get(&id) else {
            return;
        };
        out.extend(
            collection
                .objects
                .iter()
                .filter_map(|object_id| self.objects.get(object_id)),
        );
        for child in &collection.children {
            self.collect_members(*child, out);
        }
    }
}
