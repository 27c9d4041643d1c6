//! Szenen-Objekte: Typ-Daten, Modus, Selektion, Duplikations-Policy und Runtime-Geometrie.

use super::{
    ArmatureData, CollectionId, CurveData, DisplayList, GreasePencilData, LatticeData,
    MeshData, MeshView, MetaBallData, ParticleDraw, ParticleSystem, SculptSession,
};

/// Eindeutige Objekt-ID innerhalb einer Szene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Objekttyp (abgeleitet aus `ObjectData`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Surface,
    Text,
    MetaBall,
    Lattice,
    Armature,
    Light,
    GreasePencil,
    Empty,
    Camera,
}

/// Interaktionsmodus eines Objekts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectMode {
    #[default]
    Object,
    Edit,
    Pose,
    Sculpt,
    VertexPaint,
    WeightPaint,
    TexturePaint,
}

/// Typ-spezifische Objektdaten
#[derive(Debug, Clone)]
pub enum ObjectData {
    Mesh(MeshData),
    Curve(CurveData),
    Surface(CurveData),
    /// Text hat keine Edit-Splines
    Text,
    MetaBall(MetaBallData),
    Lattice(LatticeData),
    Armature(ArmatureData),
    Light,
    GreasePencil(GreasePencilData),
    Empty,
    Camera,
}

impl ObjectData {
    /// Liefert den Objekttyp
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Curve(_) => ObjectKind::Curve,
            ObjectData::Surface(_) => ObjectKind::Surface,
            ObjectData::Text => ObjectKind::Text,
            ObjectData::MetaBall(_) => ObjectKind::MetaBall,
            ObjectData::Lattice(_) => ObjectKind::Lattice,
            ObjectData::Armature(_) => ObjectKind::Armature,
            ObjectData::Light => ObjectKind::Light,
            ObjectData::GreasePencil(_) => ObjectKind::GreasePencil,
            ObjectData::Empty => ObjectKind::Empty,
            ObjectData::Camera => ObjectKind::Camera,
        }
    }
}

/// Frame-Bereich für Dupli-Frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
    /// Länge eines "an"-Blocks
    pub on: u32,
    /// Länge eines übersprungenen Blocks (0 = nichts überspringen)
    pub off: u32,
}

impl FrameRange {
    /// Anzahl Frames in `[start, end]`, die das An/Aus-Muster passieren
    pub fn frame_count(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        let span = (i64::from(self.end) - i64::from(self.start) + 1) as u64;
        if self.off == 0 {
            return span;
        }
        let period = u64::from(self.on) + u64::from(self.off);
        let full = span / period;
        let rest = span % period;
        full * u64::from(self.on) + rest.min(u64::from(self.on))
    }
}

/// Eigene Duplikations-Policy eines Objekts.
///
/// Partikel-Duplikation ergibt sich aus den Partikelsystemen, siehe
/// [`SceneObject::duplicates_particles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Duplication {
    #[default]
    None,
    /// Kinder werden auf jedem Vertex instanziert
    Verts,
    /// Kinder werden auf jedem Face instanziert
    Faces,
    /// Objekt wird über einen Frame-Bereich instanziert
    Frames(FrameRange),
    /// Objekt instanziert eine Collection
    Collection(CollectionId),
}

/// Laufzeitdaten aus der Szenen-Auswertung
#[derive(Debug, Clone, Default)]
pub struct ObjectRuntime {
    /// Ausgewertetes Mesh (nach Modifiern)
    pub mesh_eval: Option<MeshView>,
    /// Display-/Tessellierungs-Cache für Kurven, Flächen, Text und Metaballs
    pub curve_cache: Option<DisplayList>,
}

/// Objekt einer ausgewerteten Szene
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub data: ObjectData,
    pub mode: ObjectMode,
    /// Basis im View-Layer selektiert
    pub selected: bool,
    /// Basis im View-Layer sichtbar
    pub visible: bool,
    /// Eltern-Objekt (schwacher Verweis)
    pub parent: Option<ObjectId>,
    pub duplication: Duplication,
    pub particle_systems: Vec<ParticleSystem>,
    /// Objekt besitzt Shape-Keys
    pub has_shape_keys: bool,
    pub runtime: ObjectRuntime,
    pub sculpt: Option<SculptSession>,
}

impl SceneObject {
    /// Erstellt ein sichtbares, unselektiertes Objekt im Object-Mode
    pub fn new(id: ObjectId, name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            id,
            name: name.into(),
            data,
            mode: ObjectMode::Object,
            selected: false,
            visible: true,
            parent: None,
            duplication: Duplication::None,
            particle_systems: Vec::new(),
            has_shape_keys: false,
            runtime: ObjectRuntime::default(),
            sculpt: None,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_mode(mut self, mode: ObjectMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_duplication(mut self, duplication: Duplication) -> Self {
        self.duplication = duplication;
        self
    }

    pub fn with_evaluated_mesh(mut self, mesh: MeshView) -> Self {
        self.runtime.mesh_eval = Some(mesh);
        self
    }

    pub fn with_display_list(mut self, display: DisplayList) -> Self {
        self.runtime.curve_cache = Some(display);
        self
    }

    pub fn with_particle_system(mut self, system: ParticleSystem) -> Self {
        self.particle_systems.push(system);
        self
    }

    /// Objekttyp
    pub fn kind(&self) -> ObjectKind {
        self.data.kind()
    }

    /// Ausgewertetes Mesh, falls die Auswertung eines geliefert hat
    pub fn evaluated_mesh(&self) -> Option<&MeshView> {
        self.runtime.mesh_eval.as_ref()
    }

    /// Mindestens ein Partikelsystem instanziert Objekte oder Collections
    pub fn duplicates_particles(&self) -> bool {
        self.particle_systems
            .iter()
            .any(|psys| !matches!(psys.draw, ParticleDraw::Point))
    }

    /// Sculpt-Mode mit aktiver Dynamic-Topology
    pub fn is_dyntopo_sculpt(&self) -> bool {
        self.mode == ObjectMode::Sculpt
            && self
                .sculpt
                .as_ref()
                .is_some_and(|session| session.dyntopo.is_some())
    }
}
