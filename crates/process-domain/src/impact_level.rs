// impact_level.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nivel de impacto ambiental. Se usa tanto para el `envImpact` de cada paso
/// como para el `riskLevel` agregado de una secuencia.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
  #[default]
  Low,
  Medium,
  High,
  VeryHigh,
}

impl ImpactLevel {
  /// `true` para `High` y `VeryHigh`.
  pub fn is_high(self) -> bool {
    matches!(self, ImpactLevel::High | ImpactLevel::VeryHigh)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      ImpactLevel::Low => "low",
      ImpactLevel::Medium => "medium",
      ImpactLevel::High => "high",
      ImpactLevel::VeryHigh => "very_high",
    }
  }
}

impl fmt::Display for ImpactLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
