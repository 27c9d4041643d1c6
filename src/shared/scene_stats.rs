//! Akkumulator der Szenen-Statistik und der zugehörige Cache-Eintrag.

/// Flache Zählerstruktur einer Neuberechnung.
///
/// Jeder `*_selected`-Zähler ist höchstens so groß wie sein Gesamtzähler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub verts: u64,
    pub verts_selected: u64,
    pub edges: u64,
    pub edges_selected: u64,
    pub faces: u64,
    pub faces_selected: u64,
    pub bones: u64,
    pub bones_selected: u64,
    pub objects: u64,
    pub objects_selected: u64,
    pub lights: u64,
    pub lights_selected: u64,
    pub tris: u64,
    pub gp_layers: u64,
    pub gp_frames: u64,
    pub gp_strokes: u64,
    pub gp_points: u64,
}

impl SceneStats {
    /// Prüft `selected <= total` für alle Zählerpaare
    pub fn is_consistent(&self) -> bool {
        self.verts_selected <= self.verts
            && self.edges_selected <= self.edges
            && self.faces_selected <= self.faces
            && self.bones_selected <= self.bones
            && self.objects_selected <= self.objects
            && self.lights_selected <= self.lights
    }

    /// Alle Zähler sind null
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Gecachter Akkumulator samt fertigem Anzeige-String
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCache {
    pub stats: SceneStats,
    pub info: String,
}
