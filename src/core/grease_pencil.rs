//! Grease-Pencil-Daten: Layer → Frames → Strokes → Punkte.

/// Einzelner Stroke
#[derive(Debug, Clone, Copy, Default)]
pub struct GpStroke {
    pub point_count: u64,
}

/// Keyframe eines Layers
#[derive(Debug, Clone, Default)]
pub struct GpFrame {
    pub strokes: Vec<GpStroke>,
}

/// Grease-Pencil-Layer
#[derive(Debug, Clone, Default)]
pub struct GpLayer {
    pub name: String,
    pub frames: Vec<GpFrame>,
}

/// Totals eines Grease-Pencil-Datenblocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpStats {
    pub layers: u64,
    pub frames: u64,
    pub strokes: u64,
    pub points: u64,
}

/// Grease-Pencil-Objektdaten
#[derive(Debug, Clone, Default)]
pub struct GreasePencilData {
    pub layers: Vec<GpLayer>,
}

impl GreasePencilData {
    /// Zählt Layer, Frames, Strokes und Punkte frisch aus dem Layer-Baum.
    pub fn recompute_stats(&self) -> GpStats {
        let mut stats = GpStats {
            layers: self.layers.len() as u64,
            ..GpStats::default()
        };
        for frame in self.layers.iter().flat_map(|layer| &layer.frames) {
            stats.frames += 1;
            stats.strokes += frame.strokes.len() as u64;
            stats.points += frame.strokes.iter().map(|s| s.point_count).sum::<u64>();
        }
        stats
    }
}
