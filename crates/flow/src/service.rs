// Archivo: service.rs
// Propósito: implementar `FlowService`, una capa orquestadora que expone
// operaciones de alto nivel sobre flujos (crear, renombrar, agregar,
// duplicar y quitar pasos, resumir impacto). Es la API que invoca la capa
// de presentación.
use crate::domain::Flow;
use crate::errors::{FlowError, Result};
use crate::repository::FlowRepository;
use log::{debug, info};
use process_domain::catalog;
use process_domain::sequencer;
use process_domain::{ImpactSummary, StepTemplate};
use std::sync::Arc;
use uuid::Uuid;

/// Servicio de alto nivel sobre un `FlowRepository`.
///
/// Cada operación mutante lee el flow almacenado, calcula un valor nuevo con
/// las funciones puras del secuenciador y lo escribe de vuelta con
/// `update_flow` antes de devolverlo. Si el cálculo falla no se escribe nada.
/// Lectura y escritura son dos pasos sobre el repositorio: se asume un único
/// escritor lógico por flow.
pub struct FlowService<R> where R: FlowRepository
{
    repo: Arc<R>,
}

impl<R> FlowService<R> where R: FlowRepository
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Repositorio subyacente.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Crea un flow vacío con nombre derivado de `name_seed`.
    pub fn create_flow(&self, name_seed: &str) -> Result<Flow> {
        let flow = self.repo.create_flow(name_seed)?;
        info!("flow creado id={} name={}", flow.id, flow.name);
        Ok(flow)
    }

    pub fn list_flows(&self) -> Result<Vec<Flow>> {
        self.repo.list_flows()
    }

    pub fn get_flow(&self, id: Uuid) -> Result<Flow> {
        self.repo.get_flow(&id)
    }

    pub fn delete_flow(&self, id: Uuid) -> Result<()> {
        self.repo.delete_flow(&id)
    }

    /// Almacena un flow importado. Su id ya debe ser nuevo.
    pub fn import_flow(&self, flow: Flow) -> Result<Flow> {
        let flow = self.repo.insert_flow(flow)?;
        info!("flow importado id={} steps={}", flow.id, flow.steps.len());
        Ok(flow)
    }

    pub fn rename_flow(&self, id: Uuid, name: &str) -> Result<Flow> {
        self.apply(id, |flow| Ok(flow.with_name(name)))
    }

    pub fn set_description(&self, id: Uuid, description: &str) -> Result<Flow> {
        self.apply(id, |flow| Ok(flow.with_description(description)))
    }

    /// Agrega una instancia de `template` al final del flow.
    pub fn append_step(&self, id: Uuid, template: &StepTemplate) -> Result<Flow> {
        self.apply(id, |flow| Ok(flow.with_steps(sequencer::append_step(&flow.steps, template))))
    }

    /// Igual que `append_step` pero buscando la plantilla en el catálogo.
    pub fn append_template(&self, id: Uuid, template_id: &str) -> Result<Flow> {
        let template = catalog::find_template(template_id)
            .ok_or_else(|| FlowError::NotFound(format!("plantilla {}", template_id)))?;
        self.append_step(id, template)
    }

    pub fn duplicate_step(&self, id: Uuid, index: usize) -> Result<Flow> {
        self.apply(id, |flow| Ok(flow.with_steps(sequencer::duplicate_step(&flow.steps, index)?)))
    }

    pub fn remove_step(&self, id: Uuid, index: usize) -> Result<Flow> {
        self.apply(id, |flow| Ok(flow.with_steps(sequencer::remove_step(&flow.steps, index)?)))
    }

    /// Resumen de impacto del flow almacenado, recalculado en cada llamada.
    pub fn summarize(&self, id: Uuid) -> Result<ImpactSummary> {
        Ok(self.repo.get_flow(&id)?.summary())
    }

    fn apply<F>(&self, id: Uuid, op: F) -> Result<Flow>
        where F: FnOnce(&Flow) -> Result<Flow>
    {
        let current = self.repo.get_flow(&id)?;
        let next = op(&current)?;
        debug!("write-back flow id={} steps {} -> {}", id, current.steps.len(), next.steps.len());
        self.repo.update_flow(next)
    }
}
