// impact.rs
//
// Resumen de impacto derivado de una secuencia de pasos. Es una vista pura:
// se recalcula en cada consulta y nunca se almacena.
use crate::{ImpactLevel, StepInstance};
use indexmap::IndexSet;
use serde::Serialize;

/// Con más pasos de impacto alto que este valor el riesgo es `VeryHigh`.
const VERY_HIGH_THRESHOLD: usize = 2;
/// Con más pasos que este valor (y ninguno de impacto alto) el riesgo es
/// `Medium`.
const MANY_STEPS_THRESHOLD: usize = 5;

/// Métricas agregadas de una secuencia.
///
/// `total_energy_wh` está en vatios-hora (potencia × minutos / 60),
/// redondeado a un decimal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
  pub total_energy_wh: f64,
  pub total_time_minutes: f64,
  pub chemicals: IndexSet<String>,
  pub risk_level: ImpactLevel,
}

pub fn summarize(sequence: &[StepInstance]) -> ImpactSummary {
  if sequence.is_empty() {
    return ImpactSummary::default();
  }
  let energy: f64 = sequence.iter().map(|s| s.template().energy_wh()).sum();
  let total_time_minutes: f64 = sequence.iter().map(|s| s.duration_minutes()).sum();
  let chemicals: IndexSet<String> = sequence.iter().flat_map(|s| s.chemicals().iter().cloned()).collect();
  ImpactSummary { total_energy_wh: round_one_decimal(energy),
                  total_time_minutes,
                  chemicals,
                  risk_level: risk_level(sequence) }
}

fn risk_level(sequence: &[StepInstance]) -> ImpactLevel {
  let high_count = sequence.iter().filter(|s| s.env_impact().is_high()).count();
  if high_count > VERY_HIGH_THRESHOLD {
    ImpactLevel::VeryHigh
  } else if high_count > 0 {
    ImpactLevel::High
  } else if sequence.len() > MANY_STEPS_THRESHOLD {
    ImpactLevel::Medium
  } else {
    ImpactLevel::Low
  }
}

fn round_one_decimal(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}
