//! Armature-Daten: Edit-Bones (Edit-Mode) und Pose-Kanäle (Pose-Mode).

/// Bone im Edit-Mode
#[derive(Debug, Clone, Default)]
pub struct EditBone {
    /// Bone-Name
    pub name: String,
    /// Index des Eltern-Bones in `ArmatureData::edit_bones`
    pub parent: Option<usize>,
    /// Root sitzt auf dem Tip des Eltern-Bones
    pub connected: bool,
    /// Bone selbst selektiert
    pub selected: bool,
    /// Root-Punkt selektiert
    pub root_selected: bool,
    /// Tip-Punkt selektiert
    pub tip_selected: bool,
}

impl EditBone {
    /// Erstellt einen unselektierten Bone ohne Eltern
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Hängt den Bone an `parent`; `connected` teilt den Root mit dessen Tip.
    pub fn with_parent(mut self, parent: usize, connected: bool) -> Self {
        self.parent = Some(parent);
        self.connected = connected;
        self
    }

    /// Setzt Bone-, Root- und Tip-Selektion
    pub fn with_selection(mut self, selected: bool, root: bool, tip: bool) -> Self {
        self.selected = selected;
        self.root_selected = root;
        self.tip_selected = tip;
        self
    }
}

/// Bone-Daten, auf die ein Pose-Kanal verweist
#[derive(Debug, Clone, Copy, Default)]
pub struct Bone {
    pub selected: bool,
    /// Layer-Bitmaske des Bones
    pub layers: u32,
}

/// Pose-Kanal (ein Eintrag pro Bone der Pose)
#[derive(Debug, Clone, Default)]
pub struct PoseChannel {
    pub name: String,
    /// Zugehöriger Bone, kann fehlen
    pub bone: Option<Bone>,
}

/// Pose eines Armature-Objekts
#[derive(Debug, Clone, Default)]
pub struct Pose {
    pub channels: Vec<PoseChannel>,
}

/// Armature-Objektdaten
#[derive(Debug, Clone)]
pub struct ArmatureData {
    /// Sichtbare Layer (Bitmaske)
    pub layers: u32,
    /// Edit-Bones, nur im Edit-Mode vorhanden
    pub edit_bones: Option<Vec<EditBone>>,
    /// Pose, falls bereits aufgebaut
    pub pose: Option<Pose>,
}

impl Default for ArmatureData {
    fn default() -> Self {
        Self {
            layers: 1,
            edit_bones: None,
            pose: None,
        }
    }
}

impl ArmatureData {
    /// Liefert den Eltern-Bone eines Edit-Bones
    pub fn edit_parent(&self, bone: &EditBone) -> Option<&EditBone> {
        let bones = self.edit_bones.as_ref()?;
        bone.parent.and_then(|index| bones.get(index))
    }
}
