//! Baut den einzeiligen Info-String aus einem fertigen Akkumulator.

use super::format::{format_byte_unit, format_grouped, truncate_to_boundary};
use super::StatsMode;
use crate::core::{ObjectKind, ObjectMode, SceneObject};
use crate::shared::{GpuBackend, GpuMemory, MemoryAccounting, SceneStats, StatsOptions};

/// Speicherstand zum Zeitpunkt der Neuberechnung
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Belegter Speicher inklusive gemapptem Anteil
    pub in_use: u64,
    pub mapped: u64,
    /// `None`, wenn das Backend keine Statistik liefert
    pub gpu: Option<GpuMemory>,
}

impl MemorySnapshot {
    /// Liest Host- und GPU-Speicher einmalig aus
    pub fn capture(memory: &dyn MemoryAccounting, gpu: &dyn GpuBackend) -> Self {
        Self {
            in_use: memory.memory_in_use(),
            mapped: memory.mapped_memory_in_use(),
            gpu: gpu.supports_memory_stats().then(|| gpu.memory_stats()),
        }
    }
}

/// Kontext, den der Report neben den Zählern braucht
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub mode: StatsMode,
    pub active: Option<&'a SceneObject>,
    pub edit: Option<&'a SceneObject>,
    /// Name der aktiven Collection
    pub collection_name: &'a str,
    pub memory: MemorySnapshot,
}

/// Baut den Anzeige-String: Präfixe, Modus-Template, Speicher-Suffixe, Versions-Tag.
///
/// Das Ergebnis ist auf `max_info_len - 1` Bytes begrenzt.
pub fn build_report(stats: &SceneStats, ctx: &ReportContext<'_>, options: &StatsOptions) -> String {
    let n = |value: u64| format_grouped(value, options.digit_separator);
    let mem = memory_suffix(&ctx.memory, options);
    let gpu = gpu_suffix(&ctx.memory, options);

    let mut info = String::new();

    let object_mode = ctx.active.map_or(ObjectMode::Object, |object| object.mode);
    if object_mode == ObjectMode::Object {
        info.push_str(&format!("{} | ", ctx.collection_name));
    }
    if let Some(active) = ctx.active {
        info.push_str(&format!("{} | ", active.name));
    }

    if let Some(edit) = ctx.edit {
        if edit.has_shape_keys {
            info.push_str("(Key) ");
        }
        match edit.kind() {
            ObjectKind::Mesh => info.push_str(&format!(
                "Verts:{}/{} | Edges:{}/{} | Faces:{}/{} | Tris:{}",
                n(stats.verts_selected),
                n(stats.verts),
                n(stats.edges_selected),
                n(stats.edges),
                n(stats.faces_selected),
                n(stats.faces),
                n(stats.tris),
            )),
            ObjectKind::Armature => info.push_str(&format!(
                "Verts:{}/{} | Bones:{}/{}",
                n(stats.verts_selected),
                n(stats.verts),
                n(stats.bones_selected),
                n(stats.bones),
            )),
            _ => info.push_str(&format!(
                "Verts:{}/{}",
                n(stats.verts_selected),
                n(stats.verts)
            )),
        }
        info.push_str(&mem);
        info.push_str(&gpu);
    } else if ctx.mode == StatsMode::Pose {
        info.push_str(&format!(
            "Bones:{}/{}{mem}{gpu}",
            n(stats.bones_selected),
            n(stats.bones)
        ));
    } else if ctx.active.is_some_and(|object| object.kind() == ObjectKind::GreasePencil) {
        info.push_str(&format!(
            "Layers:{} | Frames:{} | Strokes:{} | Points:{} | Objects:{}/{}{mem}{gpu}",
            n(stats.gp_layers),
            n(stats.gp_frames),
            n(stats.gp_strokes),
            n(stats.gp_points),
            n(stats.objects_selected),
            n(stats.objects),
        ));
    } else if ctx.mode == StatsMode::SculptDynamicTopology {
        info.push_str(&format!(
            "Verts:{} | Tris:{}{gpu}",
            n(stats.verts),
            n(stats.tris)
        ));
    } else {
        info.push_str(&format!(
            "Verts:{} | Faces:{} | Tris:{} | Objects:{}/{}{mem}{gpu}",
            n(stats.verts),
            n(stats.faces),
            n(stats.tris),
            n(stats.objects_selected),
            n(stats.objects),
        ));
    }

    info.push_str(&format!(" | {}", options.version_tag));

    truncate_to_boundary(&mut info, options.max_info_len.saturating_sub(1));
    info
}

fn memory_suffix(memory: &MemorySnapshot, options: &StatsOptions) -> String {
    if !options.show_memory {
        return String::new();
    }
    let units = options.byte_units;
    let mut suffix = format!(
        " | Mem: {}",
        format_byte_unit(memory.in_use.saturating_sub(memory.mapped), units)
    );
    if memory.mapped > 0 {
        suffix.push_str(&format!(" ({})", format_byte_unit(memory.mapped, units)));
    }
    suffix
}

fn gpu_suffix(memory: &MemorySnapshot, options: &StatsOptions) -> String {
    let Some(gpu) = memory.gpu.filter(|_| options.show_gpu_memory) else {
        return String::new();
    };
    let units = options.byte_units;
    let mut suffix = format!(" | Free GPU Mem: {}", format_byte_unit(gpu.free, units));
    if gpu.total > 0 {
        suffix.push_str(&format!("/{}", format_byte_unit(gpu.total, units)));
    }
    suffix
}
