// sequencer.rs
//
// Operaciones sobre la secuencia ordenada de pasos de un flujo. Ninguna
// función modifica la secuencia recibida: todas devuelven una secuencia
// nueva y completa, que el llamador debe escribir de vuelta en el almacén.
// Invariante de salida: `steps[i].position() == i` para todo `i`.
use crate::{DomainError, StepInstance, StepTemplate};

/// Agrega una instancia nueva de `template` al final de la secuencia.
pub fn append_step(sequence: &[StepInstance], template: &StepTemplate) -> Vec<StepInstance> {
  let mut steps = sequence.to_vec();
  steps.push(fresh_instance(sequence, template));
  steps
}

/// Agrega al final una instancia nueva con los campos de plantilla de
/// `sequence[index]`. El paso original no cambia.
pub fn duplicate_step(sequence: &[StepInstance], index: usize) -> Result<Vec<StepInstance>, DomainError> {
  let source = sequence.get(index)
                       .ok_or(DomainError::IndexOutOfBounds { index, len: sequence.len() })?;
  Ok(append_step(sequence, source.template()))
}

/// Elimina el paso en `index` y renumera los restantes.
pub fn remove_step(sequence: &[StepInstance], index: usize) -> Result<Vec<StepInstance>, DomainError> {
  if index >= sequence.len() {
    return Err(DomainError::IndexOutOfBounds { index, len: sequence.len() });
  }
  let mut steps = sequence.to_vec();
  steps.remove(index);
  Ok(reindex(steps))
}

/// Reasigna `position` según el orden actual de la secuencia.
pub fn reindex(sequence: Vec<StepInstance>) -> Vec<StepInstance> {
  sequence.into_iter()
          .enumerate()
          .map(|(i, step)| if step.position() == i { step } else { step.at_position(i) })
          .collect()
}

// Los UUID v4 no colisionan en la práctica; el bucle garantiza además la
// unicidad dentro de la secuencia.
fn fresh_instance(sequence: &[StepInstance], template: &StepTemplate) -> StepInstance {
  loop {
    let candidate = StepInstance::from_template(template, sequence.len());
    if sequence.iter().all(|s| s.instance_id() != candidate.instance_id()) {
      return candidate;
    }
  }
}
