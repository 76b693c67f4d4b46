//! Temporal fusion: smooths OCR-class noise out of the raw snapshot stream
//! using dictionary membership, a short visibility window, and per-word
//! confidence tracking.
mod confidence;
mod editing;
mod engine;
mod rules;
mod visibility;

pub use confidence::ConfidenceEntry;
pub use confidence::ConfidenceTracker;
pub use engine::FusedSnapshot;
pub use engine::FusionEngine;
pub use rules::Correction;
pub use visibility::VisibilityRing;
