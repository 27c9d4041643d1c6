//! Fassade der Szenen-Statistik: besitzt Optionen und Kollaborateure,
//! wählt den Walker und verwaltet den Cache des View-Layers.

use super::cache;
use super::report::{build_report, MemorySnapshot, ReportContext};
use super::{
    classify_mode, count_dupli_object, count_edit_object, count_pose, read_dyntopo, DupliContext,
    StatsMode,
};
use crate::core::{Scene, SceneDupliList, SceneObject, ViewLayer};
use crate::shared::{
    DupliListEngine, GpuBackend, LiveParticles, MemoryAccounting, NoGpuStats, ParticleCounter,
    SceneStats, StaticMemory, StatsCache, StatsOptions,
};

/// Aggregiert Szenen-Statistiken auf Anfrage und cacht sie je View-Layer.
pub struct StatsEngine {
    options: StatsOptions,
    dupli_list: Box<dyn DupliListEngine>,
    particles: Box<dyn ParticleCounter>,
    memory: Box<dyn MemoryAccounting>,
    gpu: Box<dyn GpuBackend>,
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsEngine {
    /// Erstellt eine Engine mit Standard-Optionen und Standard-Kollaborateuren.
    pub fn new() -> Self {
        Self {
            options: StatsOptions::default(),
            dupli_list: Box::new(SceneDupliList),
            particles: Box::new(LiveParticles),
            memory: Box::new(StaticMemory::default()),
            gpu: Box::new(NoGpuStats),
        }
    }

    pub fn with_options(mut self, options: StatsOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_dupli_engine(mut self, engine: impl DupliListEngine + 'static) -> Self {
        self.dupli_list = Box::new(engine);
        self
    }

    pub fn with_particle_counter(mut self, counter: impl ParticleCounter + 'static) -> Self {
        self.particles = Box::new(counter);
        self
    }

    pub fn with_memory(mut self, memory: impl MemoryAccounting + 'static) -> Self {
        self.memory = Box::new(memory);
        self
    }

    pub fn with_gpu(mut self, gpu: impl GpuBackend + 'static) -> Self {
        self.gpu = Box::new(gpu);
        self
    }

    /// Aktive Optionen
    pub fn options(&self) -> &StatsOptions {
        &self.options
    }

    /// Liefert den Info-String des View-Layers.
    ///
    /// Ist kein Cache vorhanden, wird einmal vollständig neu berechnet.
    /// Sonst kommt der gecachte String unverändert zurück.
    pub fn display_string<'v>(&self, scene: &Scene, view_layer: &'v mut ViewLayer) -> &'v str {
        cache::cached_or_recompute(view_layer, |layer| self.refresh(scene, layer))
    }

    /// Verwirft Akkumulator und String des View-Layers.
    pub fn invalidate(&self, view_layer: &mut ViewLayer) {
        cache::invalidate(view_layer);
    }

    /// Berechnet die Zähler ohne Cache und ohne String.
    pub fn compute(&self, scene: &Scene, view_layer: &ViewLayer) -> SceneStats {
        let active = view_layer.active_object(scene);
        let edit = view_layer.edit_object(scene);
        let mode = classify_mode(active, edit);
        self.accumulate(scene, mode, active, edit)
    }

    fn refresh(&self, scene: &Scene, view_layer: &ViewLayer) -> StatsCache {
        let active = view_layer.active_object(scene);
        let edit = view_layer.edit_object(scene);
        let mode = classify_mode(active, edit);
        let stats = self.accumulate(scene, mode, active, edit);

        let ctx = ReportContext {
            mode,
            active,
            edit,
            collection_name: view_layer.active_collection_name(scene),
            memory: MemorySnapshot::capture(self.memory.as_ref(), self.gpu.as_ref()),
        };
        let info = build_report(&stats, &ctx, &self.options);
        StatsCache { stats, info }
    }

    fn accumulate(
        &self,
        scene: &Scene,
        mode: StatsMode,
        active: Option<&SceneObject>,
        edit: Option<&SceneObject>,
    ) -> SceneStats {
        log::debug!("Statistik-Neuberechnung im Modus {:?}", mode);

        let mut stats = SceneStats::default();
        match (mode, edit, active) {
            (StatsMode::Edit, Some(edit), _) => {
                for object in scene.objects_in_edit_session(edit) {
                    count_edit_object(object, &mut stats);
                }
            }
            (StatsMode::Pose, _, Some(active)) => count_pose(active, &mut stats),
            (StatsMode::SculptDynamicTopology, _, Some(active)) => read_dyntopo(active, &mut stats),
            _ => {
                let ctx = DupliContext {
                    scene,
                    dupli_list: self.dupli_list.as_ref(),
                    particles: self.particles.as_ref(),
                };
                for object in scene.evaluated_objects() {
                    count_dupli_object(&ctx, object, &mut stats);
                }
            }
        }

        if !stats.is_consistent() {
            log::warn!("Inkonsistente Statistik (selektiert > gesamt): {:?}", stats);
        }
        log::debug!(
            "Statistik: {} Verts, {} Faces, {} Tris, {}/{} Objekte",
            stats.verts,
            stats.faces,
            stats.tris,
            stats.objects_selected,
            stats.objects
        );
        stats
    }
}
