//! Mesh-Sichten: ausgewertetes Mesh, Edit-Mesh, Display-Liste und Dyntopo-Struktur.

/// Anzahl Dreiecke für `poly_count` Polygone mit zusammen `loop_count` Loops.
///
/// Ein Polygon mit k Ecken zerfällt in k-2 Dreiecke, also gilt
/// `Σ(k-2) = loops - 2 * polys`.
pub fn poly_to_tri_count(poly_count: u64, loop_count: u64) -> u64 {
    loop_count.saturating_sub(2 * poly_count)
}

/// Read-only Sicht auf ein ausgewertetes Mesh (nach dem Modifier-Stack)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshView {
    /// Anzahl Vertices
    pub vert_count: u64,
    /// Anzahl Kanten
    pub edge_count: u64,
    /// Anzahl Polygone
    pub poly_count: u64,
    /// Summe der Polygon-Ecken (Loops)
    pub loop_count: u64,
}

impl MeshView {
    /// Erstellt eine Mesh-Sicht aus den Roh-Totals
    pub fn new(vert_count: u64, edge_count: u64, poly_count: u64, loop_count: u64) -> Self {
        Self {
            vert_count,
            edge_count,
            poly_count,
            loop_count,
        }
    }

    /// Erstellt eine Mesh-Sicht aus den Eckenzahlen der einzelnen Polygone.
    pub fn from_polygons(vert_count: u64, edge_count: u64, polygon_sizes: &[u32]) -> Self {
        let loop_count = polygon_sizes.iter().map(|&k| u64::from(k)).sum();
        Self::new(vert_count, edge_count, polygon_sizes.len() as u64, loop_count)
    }

    /// Dreiecke nach Triangulierung
    pub fn tri_count(&self) -> u64 {
        poly_to_tri_count(self.poly_count, self.loop_count)
    }
}

/// Live-Zähler eines Meshes im Edit-Mode.
///
/// Die Edit-Struktur pflegt ihre Totals selbst, es wird nichts neu gescannt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditMesh {
    pub vert_count: u64,
    pub vert_selected: u64,
    pub edge_count: u64,
    pub edge_selected: u64,
    pub face_count: u64,
    pub face_selected: u64,
    /// Tessellierte Dreiecke der Edit-Struktur
    pub tri_count: u64,
}

/// Mesh-Objektdaten
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Edit-Struktur, nur vorhanden solange das Objekt im Edit-Mode ist
    pub edit: Option<EditMesh>,
}

/// Element eines Display-/Tessellierungs-Caches (Kurven, Flächen, Text, Metaballs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayElement {
    /// Flächenraster `nr` × `parts`, optional zyklisch in U/V
    Surface {
        nr: u64,
        parts: u64,
        cyclic_u: bool,
        cyclic_v: bool,
    },
    /// Indizierte Dreiecke
    Triangles { verts: u64, faces: u64 },
    /// Indizierte Vierecke
    Quads { verts: u64, faces: u64 },
    /// Geschlossene Polylinien (nur Vertices)
    Poly { nr: u64, parts: u64 },
    /// Offene Segmente (nur Vertices)
    Segments { nr: u64, parts: u64 },
}

/// Vertex/Face/Tri-Summen einer Display-Liste
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayCounts {
    pub verts: u64,
    pub faces: u64,
    pub tris: u64,
}

impl DisplayElement {
    /// Zählt Vertices, Faces und Dreiecke dieses Elements
    pub fn counts(&self) -> DisplayCounts {
        match *self {
            DisplayElement::Surface {
                nr,
                parts,
                cyclic_u,
                cyclic_v,
            } => {
                let segments_u = parts.saturating_sub(u64::from(!cyclic_u));
                let segments_v = nr.saturating_sub(u64::from(!cyclic_v));
                let faces = segments_u * segments_v;
                DisplayCounts {
                    verts: nr * parts,
                    faces,
                    tris: faces * 2,
                }
            }
            DisplayElement::Triangles { verts, faces } => DisplayCounts {
                verts,
                faces,
                tris: faces,
            },
            DisplayElement::Quads { verts, faces } => DisplayCounts {
                verts,
                faces,
                tris: faces * 2,
            },
            DisplayElement::Poly { nr, parts } | DisplayElement::Segments { nr, parts } => {
                DisplayCounts {
                    verts: nr * parts,
                    ..DisplayCounts::default()
                }
            }
        }
    }
}

/// Display-Liste eines Objekts
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub elements: Vec<DisplayElement>,
}

impl DisplayList {
    /// Erstellt eine Display-Liste aus Elementen
    pub fn new(elements: Vec<DisplayElement>) -> Self {
        Self { elements }
    }

    /// Summiert alle Elemente
    pub fn count(&self) -> DisplayCounts {
        self.elements
            .iter()
            .map(DisplayElement::counts)
            .fold(DisplayCounts::default(), |acc, c| DisplayCounts {
                verts: acc.verts + c.verts,
                faces: acc.faces + c.faces,
                tris: acc.tris + c.tris,
            })
    }
}

/// Live-Struktur der Dynamic-Topology beim Sculpten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynTopoMesh {
    pub vert_count: u64,
    pub face_count: u64,
}

/// Sculpt-Sitzung eines Objekts
#[derive(Debug, Clone, Default)]
pub struct SculptSession {
    /// Nur gesetzt, wenn Dynamic-Topology aktiv ist
    pub dyntopo: Option<DynTopoMesh>,
}
