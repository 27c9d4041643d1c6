//! Bestimmt, welcher Walker eine Neuberechnung füllt.

use crate::core::{ObjectMode, SceneObject};

/// Traversierungsmodus einer Neuberechnung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMode {
    /// Live-Edit-Strukturen aller Objekte der Edit-Sitzung
    Edit,
    /// Pose-Kanäle des aktiven Objekts
    Pose,
    /// Snapshot der Dynamic-Topology-Struktur
    SculptDynamicTopology,
    /// Alle ausgewerteten Objekte inklusive Dupli-Instanzen
    Object,
}

/// Klassifiziert den Modus in fester Priorität: Edit, Pose, Dyntopo-Sculpt, Object.
pub fn classify_mode(active: Option<&SceneObject>, edit: Option<&SceneObject>) -> StatsMode {
    if edit.is_some() {
        return StatsMode::Edit;
    }
    match active {
        Some(object) if object.mode == ObjectMode::Pose => StatsMode::Pose,
        Some(object) if object.is_dyntopo_sculpt() => StatsMode::SculptDynamicTopology,
        _ => StatsMode::Object,
    }
}
