//! Beitrag eines einzelnen Objekts im Object-Mode, je Objekttyp ein Handler.

use crate::core::{GreasePencilData, MeshView, ObjectData, SceneObject};
use crate::shared::SceneStats;

/// Addiert den Beitrag von `object` mit `instances` Instanzen.
///
/// Selektions-Zähler werden für Meshes nicht mit der Instanzzahl multipliziert:
/// nur eine repräsentative Instanz gilt als selektiert.
pub fn count_object(object: &SceneObject, selected: bool, instances: u64, stats: &mut SceneStats) {
    log::trace!(
        "Objekt '{}' ({:?}): sel={} x{}",
        object.name,
        object.kind(),
        selected,
        instances
    );

    match &object.data {
        ObjectData::Mesh(_) => {
            if let Some(mesh) = object.evaluated_mesh() {
                count_mesh_eval(mesh, selected, instances, stats);
            }
        }
        ObjectData::Light => count_light(selected, instances, stats),
        ObjectData::Curve(_)
        | ObjectData::Surface(_)
        | ObjectData::Text
        | ObjectData::MetaBall(_) => match object.evaluated_mesh() {
            Some(mesh) => count_mesh_eval(mesh, selected, instances, stats),
            None => count_display_list(object, selected, instances, stats),
        },
        ObjectData::GreasePencil(data) => {
            if selected {
                count_grease_pencil(data, stats);
            }
        }
        ObjectData::Lattice(_)
        | ObjectData::Armature(_)
        | ObjectData::Empty
        | ObjectData::Camera => {}
    }
}

fn count_mesh_eval(mesh: &MeshView, selected: bool, instances: u64, stats: &mut SceneStats) {
    stats.verts += mesh.vert_count * instances;
    stats.edges += mesh.edge_count * instances;
    stats.faces += mesh.poly_count * instances;
    stats.tris += mesh.tri_count() * instances;

    if selected {
        stats.verts_selected += mesh.vert_count;
        stats.faces_selected += mesh.poly_count;
    }
}

fn count_light(selected: bool, instances: u64, stats: &mut SceneStats) {
    stats.lights += instances;
    if selected {
        stats.lights_selected += instances;
    }
}

fn count_display_list(
    object: &SceneObject,
    selected: bool,
    instances: u64,
    stats: &mut SceneStats,
) {
    let Some(display) = &object.runtime.curve_cache else {
        return;
    };
    let counts = display.count();
    let verts = counts.verts * instances;
    let faces = counts.faces * instances;

    stats.verts += verts;
    stats.faces += faces;
    stats.tris += counts.tris * instances;

    if selected {
        stats.verts_selected += verts;
        stats.faces_selected += faces;
    }
}

fn count_grease_pencil(data: &GreasePencilData, stats: &mut SceneStats) {
    let gp = data.recompute_stats();
    stats.gp_layers += gp.layers;
    stats.gp_frames += gp.frames;
    stats.gp_strokes += gp.strokes;
    stats.gp_points += gp.points;
}
