//! View-Layer: Sicht auf eine Szene mit aktivem Objekt, aktiver Collection
//! und dem eigenen Statistik-Cache.

use super::{CollectionId, ObjectId, ObjectMode, Scene, SceneObject};
use crate::shared::{SceneStats, StatsCache};

/// Sichtkontext einer Szene.
///
/// Besitzt genau einen Statistik-Cache. Der Cache wird nie implizit bei
/// Szenenänderungen verworfen, nur über [`ViewLayer::clear_stats`].
#[derive(Debug, Clone, Default)]
pub struct ViewLayer {
    pub name: String,
    /// Aktives Objekt (schwacher Verweis)
    pub active_object: Option<ObjectId>,
    /// Aktive Collection; ohne Angabe gilt die Wurzel-Collection
    pub active_collection: Option<CollectionId>,
    pub(crate) stats: Option<StatsCache>,
    pub(crate) stats_generation: u64,
}

impl ViewLayer {
    /// Erstellt einen View-Layer ohne aktives Objekt
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_active_object(mut self, id: ObjectId) -> Self {
        self.active_object = Some(id);
        self
    }

    pub fn with_active_collection(mut self, id: CollectionId) -> Self {
        self.active_collection = Some(id);
        self
    }

    /// Aktives Objekt, sofern es in der Szene existiert
    pub fn active_object<'s>(&self, scene: &'s Scene) -> Option<&'s SceneObject> {
        self.active_object.and_then(|id| scene.object(id))
    }

    /// Objekt im Edit-Mode: das aktive Objekt, falls es im Edit-Mode ist
    pub fn edit_object<'s>(&self, scene: &'s Scene) -> Option<&'s SceneObject> {
        self.active_object(scene)
            .filter(|object| object.mode == ObjectMode::Edit)
    }

    /// Anzeigename der aktiven Collection (Fallback: Wurzel-Collection)
    pub fn active_collection_name<'s>(&self, scene: &'s Scene) -> &'s str {
        self.active_collection
            .and_then(|id| scene.collection(id))
            .or_else(|| scene.collection(scene.master_collection))
            .map_or("Scene Collection", |collection| collection.name.as_str())
    }

    /// Gecachte Statistik der letzten Neuberechnung
    pub fn stats(&self) -> Option<&SceneStats> {
        self.stats.as_ref().map(|cache| &cache.stats)
    }

    /// Gecachter Anzeige-String
    pub fn cached_info(&self) -> Option<&str> {
        self.stats.as_ref().map(|cache| cache.info.as_str())
    }

    /// Verwirft Akkumulator und String bedingungslos
    pub fn clear_stats(&mut self) {
        self.stats = None;
    }

    /// Anzahl bisheriger Neuberechnungen
    pub fn stats_generation(&self) -> u64 {
        self.stats_generation
    }
}
