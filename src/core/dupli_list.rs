//! Standard-Dupli-Listen-Engine auf Basis der Szenendaten.

use super::{Duplication, Scene, SceneObject};
use crate::shared::DupliListEngine;

/// Zählt Dupli-Instanzen direkt aus dem Szenen-Snapshot:
/// - `Verts` → Vertices des ausgewerteten Meshes
/// - `Faces` → Polygone des ausgewerteten Meshes
/// - `Frames` → Frames, die das An/Aus-Muster passieren
/// - `Collection` → rekursive Mitgliederzahl der instanzierten Collection
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneDupliList;

impl DupliListEngine for SceneDupliList {
    fn instance_count(&self, scene: &Scene, object: &SceneObject) -> u64 {
        match object.duplication {
            Duplication::None => 0,
            Duplication::Verts => object.evaluated_mesh().map_or(0, |mesh| mesh.vert_count),
            Duplication::Faces => object.evaluated_mesh().map_or(0, |mesh| mesh.poly_count),
            Duplication::Frames(range) => range.frame_count(),
            Duplication::Collection(id) => scene.collection_objects(id).len() as u64,
        }
    }
}
