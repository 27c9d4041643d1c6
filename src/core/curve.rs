//! Kurven-, Flächen-, Metaball- und Lattice-Daten mit ihren Edit-Strukturen.

/// Einzelner Kontrollpunkt (Poly/NURBS/Lattice)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlPoint {
    pub selected: bool,
}

/// Bezier-Punkt: zwei Handles und der eigentliche Kontrollpunkt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BezTriple {
    pub handle_left_selected: bool,
    pub selected: bool,
    pub handle_right_selected: bool,
}

/// Spline im Edit-Mode
#[derive(Debug, Clone)]
pub enum Nurb {
    /// Kubische Bezier-Spline
    Bezier(Vec<BezTriple>),
    /// Poly- oder NURBS-Spline bzw. -Fläche (`u` × `v` Punkte)
    Points(Vec<ControlPoint>),
}

/// Kurven-/Flächendaten
#[derive(Debug, Clone, Default)]
pub struct CurveData {
    /// Edit-Splines, nur im Edit-Mode vorhanden
    pub edit_nurbs: Option<Vec<Nurb>>,
}

/// Metaball-Element im Edit-Mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetaElem {
    pub selected: bool,
}

/// Metaball-Daten
#[derive(Debug, Clone, Default)]
pub struct MetaBallData {
    pub edit_elements: Option<Vec<MetaElem>>,
}

/// Lattice im Edit-Mode: Gitter aus `u` × `v` × `w` Punkten
#[derive(Debug, Clone, Default)]
pub struct EditLattice {
    pub points_u: u32,
    pub points_v: u32,
    pub points_w: u32,
    /// Punkte in Gitterreihenfolge
    pub points: Vec<ControlPoint>,
}

impl EditLattice {
    /// Erstellt ein unselektiertes Gitter
    pub fn new(points_u: u32, points_v: u32, points_w: u32) -> Self {
        let total = (points_u as usize) * (points_v as usize) * (points_w as usize);
        Self {
            points_u,
            points_v,
            points_w,
            points: vec![ControlPoint::default(); total],
        }
    }

    /// Anzahl Gitterpunkte
    pub fn point_count(&self) -> u64 {
        u64::from(self.points_u) * u64::from(self.points_v) * u64::from(self.points_w)
    }
}

/// Lattice-Daten
#[derive(Debug, Clone, Default)]
pub struct LatticeData {
    pub edit: Option<EditLattice>,
}
