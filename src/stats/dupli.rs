//! Object-Mode: Duplikations-Policy je Top-Level-Objekt und Instanz-Multiplikatoren.
//!
//! Partikel-Collections werden in zwei Durchgängen verteilt: erst die Mitglieder
//! einmal in feste Reihenfolge bringen, dann die Anteile reihum zuteilen.

use super::count_object;
use crate::core::{
    CollectionId, Duplication, ObjectKind, ParticleDraw, ParticleSystem, Scene, SceneObject,
};
use crate::shared::{DupliListEngine, ParticleCounter, SceneStats};

/// Kollaborateure für die Dupli-Expansion
#[derive(Clone, Copy)]
pub struct DupliContext<'a> {
    pub scene: &'a Scene,
    pub dupli_list: &'a dyn DupliListEngine,
    pub particles: &'a dyn ParticleCounter,
}

/// Genau eine Policy pro Top-Level-Objekt, in fester Priorität
#[derive(Debug, Clone, Copy)]
pub enum DupliPolicy<'a> {
    /// Partikelsysteme instanzieren Objekte/Collections
    Particles,
    /// Eltern-Objekt instanziert auf Vertices oder Faces
    ParentVertsFaces(&'a SceneObject),
    /// Dupli-Frames
    Frames,
    /// Objekt instanziert eine (existierende) Collection
    Collection,
    /// Keine Duplikation
    None,
}

impl<'a> DupliPolicy<'a> {
    /// Ermittelt die Policy eines Objekts
    pub fn of(scene: &'a Scene, object: &SceneObject) -> Self {
        if object.duplicates_particles() {
            return DupliPolicy::Particles;
        }

        let dupli_parent = object
            .parent
            .and_then(|id| scene.object(id))
            .filter(|parent| matches!(parent.duplication, Duplication::Verts | Duplication::Faces));
        if let Some(parent) = dupli_parent {
            return DupliPolicy::ParentVertsFaces(parent);
        }

        match object.duplication {
            Duplication::Frames(_) => DupliPolicy::Frames,
            Duplication::Collection(id) if scene.collection(id).is_some() => {
                DupliPolicy::Collection
            }
            _ => DupliPolicy::None,
        }
    }
}

/// Verteilt `total` Instanzen reihum auf `members` Empfänger und liefert den Anteil
/// von Empfänger `index`. Frühere Empfänger bekommen den Rest.
pub fn round_robin_share(total: u64, members: usize, index: usize) -> u64 {
    if members == 0 || index >= members {
        return 0;
    }
    let members = members as u64;
    let index = index as u64;
    total / members + u64::from(index < total % members)
}

/// Addiert den Beitrag eines Top-Level-Objekts samt seiner Dupli-Instanzen.
///
/// `objects` zählt Instanzen, `objects_selected` genau einmal pro selektiertem Objekt.
pub fn count_dupli_object(ctx: &DupliContext<'_>, object: &SceneObject, stats: &mut SceneStats) {
    let selected = object.selected;
    if selected {
        stats.objects_selected += 1;
    }

    match DupliPolicy::of(ctx.scene, object) {
        DupliPolicy::Particles => {
            for system in &object.particle_systems {
                expand_particle_system(ctx, system, stats);
            }
            count_object(object, selected, 1, stats);
            stats.objects += 1;
        }
        DupliPolicy::ParentVertsFaces(parent) => {
            // Metaball-Instanzen werden nur einmal tesselliert
            let instances = if object.kind() == ObjectKind::MetaBall {
                1
            } else {
                ctx.dupli_list.instance_count(ctx.scene, parent)
            };
            stats.objects += instances;
            count_object(object, selected, instances, stats);
        }
        DupliPolicy::Frames | DupliPolicy::Collection => {
            let instances = ctx.dupli_list.instance_count(ctx.scene, object);
            stats.objects += instances;
            count_object(object, selected, instances, stats);
        }
        DupliPolicy::None => {
            count_object(object, selected, 1, stats);
            stats.objects += 1;
        }
    }
}

fn expand_particle_system(ctx: &DupliContext<'_>, system: &ParticleSystem, stats: &mut SceneStats) {
    match system.draw {
        ParticleDraw::Object(target) => {
            let Some(target) = ctx.scene.object(target) else {
                log::trace!("Partikelsystem '{}': Ziel-Objekt fehlt", system.name);
                return;
            };
            let instances = ctx.particles.live_particle_count(system);
            count_object(target, false, instances, stats);
        }
        ParticleDraw::Collection(collection) => {
            expand_particle_collection(ctx, system, collection, stats);
        }
        ParticleDraw::Point => {}
    }
}

fn expand_particle_collection(
    ctx: &DupliContext<'_>,
    system: &ParticleSystem,
    collection: CollectionId,
    stats: &mut SceneStats,
) {
    let members = ctx.scene.collection_objects(collection);
    if members.is_empty() {
        return;
    }

    let total = ctx.particles.live_particle_count(system);
    for (index, member) in members.iter().enumerate() {
        let share = round_robin_share(total, members.len(), index);
        count_object(member, false, share, stats);
    }
}
