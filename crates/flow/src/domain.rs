// Archivo: domain.rs
// Propósito: definir la entidad `Flow`. Los helpers `with_*` siguen la
// disciplina copy-on-write: devuelven un valor nuevo con `modified_at`
// actualizado y dejan intacto el original.
use chrono::{DateTime, Utc};
use process_domain::{summarize, ImpactSummary, StepInstance};
use std::fmt;
use uuid::Uuid;

/// Flujo de proceso compuesto por el usuario.
///
/// Invariante: `steps[i].position() == i`. Sólo el secuenciador y la
/// importación producen secuencias, y ambos renumeran.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    /// Id asignado al crear el flow; estable durante toda su vida.
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub steps: Vec<StepInstance>,
    pub created_at: DateTime<Utc>,
    /// Se actualiza en cada cambio de `steps`, `name` o `description`.
    pub modified_at: DateTime<Utc>,
}

impl Flow {
    /// Crea un flow vacío con id nuevo y `created_at == modified_at == now`.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(),
               name: name.into(),
               description: description.into(),
               steps: Vec::new(),
               created_at: now,
               modified_at: now }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut flow = self.clone();
        flow.name = name.into();
        flow.touch();
        flow
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut flow = self.clone();
        flow.description = description.into();
        flow.touch();
        flow
    }

    pub fn with_steps(&self, steps: Vec<StepInstance>) -> Self {
        let mut flow = self.clone();
        flow.steps = steps;
        flow.touch();
        flow
    }

    /// Marca el flow como modificado ahora. `modified_at` nunca retrocede.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.modified_at {
            self.modified_at = now;
        }
    }

    /// Resumen de impacto recalculado a partir de `steps`.
    pub fn summary(&self) -> ImpactSummary {
        summarize(&self.steps)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flow(id: {}, name: {}, steps: {})", self.id, self.name, self.steps.len())
    }
}
