//! process-domain: modelo de pasos de proceso y lógica pura sobre secuencias.
//!
//! - `catalog`: tabla estática de plantillas (`StepTemplate`) agrupadas por
//!   categoría.
//! - `sequencer`: operaciones copy-on-write sobre la secuencia ordenada de
//!   `StepInstance` de un flujo.
//! - `impact`: agregación de métricas de impacto (`ImpactSummary`).
pub mod catalog;
mod errors;
pub mod impact;
mod impact_level;
pub mod sequencer;
mod step;

pub use catalog::Category;
pub use errors::DomainError;
pub use impact::{summarize, ImpactSummary};
pub use impact_level::ImpactLevel;
pub use step::{StepInstance, StepTemplate};
