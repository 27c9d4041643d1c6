//! Szenen-Statistik Library.
//! Zählt Geometrie, Objekte und Speicher einer Szene und liefert einen gecachten Info-String.

pub mod core;
pub mod shared;
pub mod stats;

pub use core::{
    Collection, CollectionId, ObjectData, ObjectId, ObjectKind, ObjectMode, Scene, SceneObject,
    ViewLayer,
};
pub use shared::{ByteUnits, SceneStats, StatsOptions};
pub use stats::{build_report, classify_mode, StatsEngine, StatsMode};
