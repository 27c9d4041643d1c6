//! Core-Domänentypen: Szene, Objekte, Collections, Objektdaten je Typ, View-Layer.

pub mod armature;
pub mod collection;
pub mod curve;
pub mod dupli_list;
pub mod grease_pencil;
pub mod mesh;
/// Szenen-Objekte und ihre Daten
///
/// Dieses Modul definiert die Objekt-Datenstrukturen:
/// - SceneObject: Objekt mit Modus, Selektion und Duplikations-Policy
/// - ObjectData: typ-spezifische Daten (Mesh, Kurve, Armature, …)
/// - ObjectRuntime: Ergebnis der Szenen-Auswertung
pub mod object;
pub mod particles;
pub mod scene;
pub mod view_layer;

pub use armature::{ArmatureData, Bone, EditBone, Pose, PoseChannel};
pub use collection::{Collection, CollectionId};
pub use curve::{
    BezTriple, ControlPoint, CurveData, EditLattice, LatticeData, MetaBallData, MetaElem, Nurb,
};
pub use dupli_list::SceneDupliList;
pub use grease_pencil::{GpFrame, GpLayer, GpStats, GpStroke, GreasePencilData};
pub use mesh::{
    poly_to_tri_count, DisplayCounts, DisplayElement, DisplayList, DynTopoMesh, EditMesh,
    MeshData, MeshView, SculptSession,
};
pub use object::{
    Duplication, FrameRange, ObjectData, ObjectId, ObjectKind, ObjectMode, ObjectRuntime,
    SceneObject,
};
pub use particles::{Particle, ParticleDraw, ParticleState, ParticleSystem};
pub use scene::Scene;
pub use view_layer::ViewLayer;
