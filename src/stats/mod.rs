//! Statistik-Layer: Modus-Klassifikation, Walker je Modus, Dupli-Expansion,
//! Formatierung und der gecachte Info-String.

mod cache;
pub mod dupli;
pub mod edit;
mod engine;
pub mod format;
pub mod mode;
pub mod object;
pub mod pose;
pub mod report;

pub use dupli::{count_dupli_object, round_robin_share, DupliContext, DupliPolicy};
pub use edit::count_edit_object;
pub use engine::StatsEngine;
pub use format::{format_byte_unit, format_grouped};
pub use mode::{classify_mode, StatsMode};
pub use object::count_object;
pub use pose::{count_pose, read_dyntopo};
pub use report::{build_report, MemorySnapshot, ReportContext};
