//! Schnittstellen zu externen Subsystemen (Dupli-Listen, Partikel, Speicher, GPU).
//!
//! Die Statistik ruft diese Traits nur lesend auf. Für Tests und einfache Hosts
//! gibt es hier schlanke Standard-Implementierungen.

use crate::core::{ParticleSystem, Scene, SceneObject};

/// Liefert die Anzahl Dupli-Instanzen eines Objekts
pub trait DupliListEngine {
    /// Anzahl Instanzen, die `object` über seine Duplikations-Policy erzeugt
    fn instance_count(&self, scene: &Scene, object: &SceneObject) -> u64;
}

/// Zählt Partikel eines Systems
pub trait ParticleCounter {
    /// Anzahl aktuell angezeigter Partikel
    fn live_particle_count(&self, system: &ParticleSystem) -> u64;
}

/// Speicherverbrauch des Host-Prozesses
pub trait MemoryAccounting {
    /// Belegter Speicher in Bytes (inklusive gemapptem Speicher)
    fn memory_in_use(&self) -> u64;
    /// Davon gemappter Speicher in Bytes
    fn mapped_memory_in_use(&self) -> u64;
}

/// GPU-Speicherstand in Bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpuMemory {
    pub total: u64,
    pub free: u64,
}

/// Aktives GPU-Backend
pub trait GpuBackend {
    /// Backend kann Speicherstatistiken liefern
    fn supports_memory_stats(&self) -> bool;
    /// Aktueller Speicherstand, nur sinnvoll wenn unterstützt
    fn memory_stats(&self) -> GpuMemory;
}

/// Zählt existierende, angezeigte Partikel; ungeborene/tote nur wenn das System sie zeigt.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveParticles;

impl ParticleCounter for LiveParticles {
    fn live_particle_count(&self, system: &ParticleSystem) -> u64 {
        system
            .particles
            .iter()
            .filter(|particle| system.is_counted(particle))
            .count() as u64
    }
}

/// Fester Speicherstand, z.B. von einem Host-Allocator übernommen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticMemory {
    pub in_use: u64,
    pub mapped: u64,
}

impl MemoryAccounting for StaticMemory {
    fn memory_in_use(&self) -> u64 {
        self.in_use
    }

    fn mapped_memory_in_use(&self) -> u64 {
        self.mapped
    }
}

/// Backend ohne Speicherstatistik
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGpuStats;

impl GpuBackend for NoGpuStats {
    fn supports_memory_stats(&self) -> bool {
        false
    }

    fn memory_stats(&self) -> GpuMemory {
        GpuMemory::default()
    }
}

/// Backend mit festem Speicherstand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticGpu(pub GpuMemory);

impl GpuBackend for StaticGpu {
    fn supports_memory_stats(&self) -> bool {
        true
    }

    fn memory_stats(&self) -> GpuMemory {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Particle, ParticleDraw, ParticleState};

    #[test]
    fn test_live_particles_respects_display_flags() {
        let mut system = ParticleSystem::with_alive("Hair", ParticleDraw::Point, 3);
        system.particles.push(Particle {
            state: ParticleState::Unborn,
            ..Particle::default()
        });
        system.particles.push(Particle {
            state: ParticleState::Dead,
            ..Particle::default()
        });
        system.particles.push(Particle {
            exists: false,
            ..Particle::default()
        });
        system.particles.push(Particle {
            displayed: false,
            ..Particle::default()
        });

        assert_eq!(LiveParticles.live_particle_count(&system), 3);

        system.show_unborn = true;
        system.show_dead = true;
        assert_eq!(LiveParticles.live_particle_count(&system), 5);
    }
}
