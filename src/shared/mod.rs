//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core` und `stats` geteilt werden,
//! sowie die Schnittstellen zu externen Subsystemen.

///
/// Enthält Typen, die zwischen `core` und `stats` geteilt werden,
/// sowie die Schnittstellen zu externen Subsystemen.
pub mod collaborators;
pub mod options;
mod scene_stats;

pub use collaborators::{
    DupliListEngine, GpuBackend, GpuMemory, LiveParticles, MemoryAccounting, NoGpuStats,
    ParticleCounter, StaticGpu, StaticMemory,
};
pub use options::{ByteUnits, StatsOptions};
pub use options::{DIGIT_SEPARATOR, MAX_INFO_LEN};
pub use scene_stats::{SceneStats, StatsCache};
