//! Partikelsysteme und ihre Dupli-Ziele.

use super::{CollectionId, ObjectId};

/// Wie ein Partikelsystem gezeichnet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleDraw {
    /// Punkte/Pfade, keine Duplikation
    #[default]
    Point,
    /// Jedes Partikel instanziert ein einzelnes Objekt
    Object(ObjectId),
    /// Partikel werden reihum auf die Objekte einer Collection verteilt
    Collection(CollectionId),
}

/// Lebenszustand eines Partikels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleState {
    #[default]
    Alive,
    Unborn,
    Dead,
}

/// Einzelnes Partikel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub state: ParticleState,
    /// `false` für reservierte, aber nicht existierende Partikel
    pub exists: bool,
    /// `false` wenn das Partikel ausgeblendet ist
    pub displayed: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            state: ParticleState::Alive,
            exists: true,
            displayed: true,
        }
    }
}

/// Partikelsystem eines Objekts
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub name: String,
    pub draw: ParticleDraw,
    pub particles: Vec<Particle>,
    /// Ungeborene Partikel werden angezeigt
    pub show_unborn: bool,
    /// Gestorbene Partikel werden angezeigt
    pub show_dead: bool,
}

impl ParticleSystem {
    /// Erstellt ein System mit `count` lebenden Partikeln
    pub fn with_alive(name: impl Into<String>, draw: ParticleDraw, count: usize) -> Self {
        Self {
            name: name.into(),
            draw,
            particles: vec![Particle::default(); count],
            show_unborn: false,
            show_dead: false,
        }
    }

    /// Prüft ob ein Partikel in die Zählung eingeht
    pub fn is_counted(&self, particle: &Particle) -> bool {
        if !particle.exists || !particle.displayed {
            return false;
        }
        match particle.state {
            ParticleState::Alive => true,
            ParticleState::Unborn => self.show_unborn,
            ParticleState::Dead => self.show_dead,
        }
    }
}
