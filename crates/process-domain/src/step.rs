// step.rs
use crate::ImpactLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Plantilla inmutable de un paso de proceso tal como aparece en el catálogo.
///
/// `chemicals` es un conjunto ordenado: el constructor descarta repetidos
/// conservando la primera aparición, también al deserializar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StepTemplateFields")]
pub struct StepTemplate {
  id: String,
  name: String,
  duration_minutes: f64,
  power_watts: f64,
  chemicals: Vec<String>,
  temperature_c: f64,
  env_impact: ImpactLevel,
}

// Forma serializada de `StepTemplate`; pasa por `StepTemplate::new`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepTemplateFields {
  id: String,
  name: String,
  duration_minutes: f64,
  power_watts: f64,
  chemicals: Vec<String>,
  temperature_c: f64,
  env_impact: ImpactLevel,
}

impl From<StepTemplateFields> for StepTemplate {
  fn from(f: StepTemplateFields) -> Self {
    Self::new(f.id, f.name, f.duration_minutes, f.power_watts, f.chemicals, f.temperature_c, f.env_impact)
  }
}

impl StepTemplate {
  pub fn new<I, S>(id: impl Into<String>,
                   name: impl Into<String>,
                   duration_minutes: f64,
                   power_watts: f64,
                   chemicals: I,
                   temperature_c: f64,
                   env_impact: ImpactLevel)
                   -> Self
    where I: IntoIterator<Item = S>,
          S: Into<String>
  {
    let mut seen = HashSet::new();
    let chemicals: Vec<String> = chemicals.into_iter()
                                          .map(Into::into)
                                          .filter(|c: &String| seen.insert(c.clone()))
                                          .collect();
    Self { id: id.into(),
           name: name.into(),
           duration_minutes,
           power_watts,
           chemicals,
           temperature_c,
           env_impact }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn duration_minutes(&self) -> f64 {
    self.duration_minutes
  }

  pub fn power_watts(&self) -> f64 {
    self.power_watts
  }

  pub fn chemicals(&self) -> &[String] {
    &self.chemicals
  }

  pub fn temperature_c(&self) -> f64 {
    self.temperature_c
  }

  pub fn env_impact(&self) -> ImpactLevel {
    self.env_impact
  }

  /// Energía del paso en vatios-hora, con potencia constante durante toda
  /// la duración.
  pub fn energy_wh(&self) -> f64 {
    self.power_watts * self.duration_minutes / 60.0
  }
}

impl fmt::Display for StepTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "{} ({} min, {} W, {} °C, impacto {})",
           self.name, self.duration_minutes, self.power_watts, self.temperature_c, self.env_impact)
  }
}

/// Copia de una plantilla insertada en un flujo.
///
/// `instance_id` identifica la inserción (dos inserciones de la misma
/// plantilla tienen ids distintos) y `position` debe coincidir con el índice
/// del paso en la secuencia que lo contiene. Sólo el secuenciador cambia
/// `position`, siempre produciendo un valor nuevo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInstance {
  #[serde(flatten)]
  template: StepTemplate,
  instance_id: String,
  // Opcional en documentos externos: el importador renumera.
  #[serde(default)]
  position: usize,
}

impl StepInstance {
  /// Crea una instancia nueva con un `instance_id` aleatorio (UUID v4).
  pub fn from_template(template: &StepTemplate, position: usize) -> Self {
    Self { template: template.clone(), instance_id: Uuid::new_v4().to_string(), position }
  }

  /// Reconstruye una instancia existente (por ejemplo, desde un documento
  /// importado) sin generar identidad nueva.
  pub fn from_parts(template: StepTemplate, instance_id: impl Into<String>, position: usize) -> Self {
    Self { template, instance_id: instance_id.into(), position }
  }

  /// Misma instancia con un `instance_id` recién generado.
  pub fn with_fresh_instance_id(&self) -> Self {
    let mut step = self.clone();
    step.instance_id = Uuid::new_v4().to_string();
    step
  }

  pub(crate) fn at_position(mut self, position: usize) -> Self {
    self.position = position;
    self
  }

  /// Campos de plantilla de la instancia.
  pub fn template(&self) -> &StepTemplate {
    &self.template
  }

  pub fn instance_id(&self) -> &str {
    &self.instance_id
  }

  pub fn position(&self) -> usize {
    self.position
  }

  pub fn template_id(&self) -> &str {
    self.template.id()
  }

  pub fn name(&self) -> &str {
    self.template.name()
  }

  pub fn duration_minutes(&self) -> f64 {
    self.template.duration_minutes()
  }

  pub fn power_watts(&self) -> f64 {
    self.template.power_watts()
  }

  pub fn chemicals(&self) -> &[String] {
    self.template.chemicals()
  }

  pub fn temperature_c(&self) -> f64 {
    self.template.temperature_c()
  }

  pub fn env_impact(&self) -> ImpactLevel {
    self.template.env_impact()
  }
}

impl fmt::Display for StepInstance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{} {}", self.position, self.template)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> StepTemplate {
    StepTemplate::new("wet-etch", "Wet Etch", 30.0, 120.0, ["HF", "H2O", "HF"], 25.0, ImpactLevel::High)
  }

  #[test]
  fn template_deduplicates_chemicals_in_order() {
    assert_eq!(sample().chemicals(), ["HF".to_string(), "H2O".to_string()]);
  }

  #[test]
  fn energy_is_reported_in_watt_hours() {
    assert_eq!(sample().energy_wh(), 60.0);
  }

  #[test]
  fn instances_of_same_template_get_distinct_ids() {
    let t = sample();
    let a = StepInstance::from_template(&t, 0);
    let b = StepInstance::from_template(&t, 1);
    assert_ne!(a.instance_id(), b.instance_id());
    assert_eq!(a.template(), b.template());
  }

  #[test]
  fn instance_serializes_flat_with_camel_case_keys() {
    let step = StepInstance::from_parts(sample(), "abc", 3);
    let v = serde_json::to_value(&step).unwrap();
    assert_eq!(v["instanceId"], "abc");
    assert_eq!(v["position"], 3);
    assert_eq!(v["durationMinutes"], 30.0);
    assert_eq!(v["temperatureC"], 25.0);
    assert_eq!(v["envImpact"], "high");
  }

  #[test]
  fn deserialized_template_deduplicates_chemicals() {
    let t: StepTemplate = serde_json::from_str(r#"{"id":"x","name":"X","durationMinutes":1.0,"powerWatts":2.0,
                                                   "chemicals":["HF","HF","O2"],"temperatureC":25.0,"envImpact":"low"}"#).unwrap();
    assert_eq!(t.chemicals(), ["HF".to_string(), "O2".to_string()]);
  }
}
