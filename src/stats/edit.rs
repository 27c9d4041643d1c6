//! Edit-Mode: Zählung direkt aus den Live-Edit-Strukturen je Objekttyp.

use crate::core::{
    ArmatureData, CurveData, EditLattice, EditMesh, LatticeData, MeshData, MetaBallData, Nurb,
    ObjectData, SceneObject,
};
use crate::shared::SceneStats;

/// Addiert den Beitrag eines Objekts der Edit-Sitzung.
///
/// Fehlende Edit-Strukturen tragen nichts bei.
pub fn count_edit_object(object: &SceneObject, stats: &mut SceneStats) {
    match &object.data {
        ObjectData::Mesh(MeshData { edit: Some(edit) }) => count_edit_mesh(edit, stats),
        ObjectData::Armature(armature) => count_edit_armature(armature, stats),
        ObjectData::Curve(curve) | ObjectData::Surface(curve) => count_edit_curve(curve, stats),
        ObjectData::MetaBall(mball) => count_edit_metaball(mball, stats),
        ObjectData::Lattice(LatticeData { edit: Some(lattice) }) => {
            count_edit_lattice(lattice, stats)
        }
        _ => {}
    }
}

fn count_edit_mesh(edit: &EditMesh, stats: &mut SceneStats) {
    stats.verts += edit.vert_count;
    stats.verts_selected += edit.vert_selected;
    stats.edges += edit.edge_count;
    stats.edges_selected += edit.edge_selected;
    stats.faces += edit.face_count;
    stats.faces_selected += edit.face_selected;
    stats.tris += edit.tri_count;
}

/// Jeder Bone hat Root und Tip. Ein verbundener Bone mit Eltern teilt seinen Root
/// mit dem Tip des Eltern-Bones, der Punkt zählt dann nur einmal.
fn count_edit_armature(armature: &ArmatureData, stats: &mut SceneStats) {
    let Some(bones) = &armature.edit_bones else {
        return;
    };

    for bone in bones {
        let parent = armature.edit_parent(bone);
        let shares_root = bone.connected && parent.is_some();

        stats.bones += 1;
        stats.verts += if shares_root { 1 } else { 2 };

        if bone.tip_selected {
            stats.verts_selected += 1;
        }
        if bone.root_selected {
            stats.verts_selected += 1;
        }
        if bone.selected {
            stats.bones_selected += 1;
        }

        // Geteilter Root wurde schon über den Tip des Eltern-Bones gezählt
        let parent_tip_selected = parent.is_some_and(|p| p.tip_selected);
        if shares_root && bone.root_selected && parent_tip_selected {
            stats.verts_selected -= 1;
        }
    }
}

fn count_edit_curve(curve: &CurveData, stats: &mut SceneStats) {
    let Some(nurbs) = &curve.edit_nurbs else {
        return;
    };

    for nurb in nurbs {
        match nurb {
            Nurb::Bezier(points) => {
                for bezt in points {
                    stats.verts += 3;
                    stats.verts_selected += u64::from(bezt.handle_left_selected)
                        + u64::from(bezt.selected)
                        + u64::from(bezt.handle_right_selected);
                }
            }
            Nurb::Points(points) => {
                stats.verts += points.len() as u64;
                stats.verts_selected += points.iter().filter(|bp| bp.selected).count() as u64;
            }
        }
    }
}

fn count_edit_metaball(mball: &MetaBallData, stats: &mut SceneStats) {
    let Some(elements) = &mball.edit_elements else {
        return;
    };
    stats.verts += elements.len() as u64;
    stats.verts_selected += elements.iter().filter(|ml| ml.selected).count() as u64;
}

fn count_edit_lattice(lattice: &EditLattice, stats: &mut SceneStats) {
    let total = lattice.point_count();
    stats.verts += total;
    stats.verts_selected += lattice
        .points
        .iter()
        .take(total as usize)
        .filter(|bp| bp.selected)
        .count() as u64;
}
