//! Pose-Mode und Dynamic-Topology-Sculpt: direkte Reads ohne Szenen-Traversierung.

use crate::core::{ObjectData, SceneObject};
use crate::shared::SceneStats;

/// Zählt die Pose-Kanäle des aktiven Objekts.
///
/// Selektierte Bones auf unsichtbaren Layern zählen nicht als selektiert.
pub fn count_pose(object: &SceneObject, stats: &mut SceneStats) {
    let ObjectData::Armature(armature) = &object.data else {
        return;
    };
    let Some(pose) = &armature.pose else {
        return;
    };

    for channel in &pose.channels {
        stats.bones += 1;
        if let Some(bone) = channel.bone {
            if bone.selected && (bone.layers & armature.layers) != 0 {
                stats.bones_selected += 1;
            }
        }
    }
}

/// Übernimmt Vertex- und Face-Zahl der Dynamic-Topology-Struktur.
///
/// Ersetzt die Zähler statt zu addieren.
pub fn read_dyntopo(object: &SceneObject, stats: &mut SceneStats) {
    let Some(dyntopo) = object.sculpt.as_ref().and_then(|session| session.dyntopo) else {
        return;
    };
    stats.verts = dyntopo.vert_count;
    stats.tris = dyntopo.face_count;
}
