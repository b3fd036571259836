// Archivo: stubs.rs
// Propósito: implementación en memoria del almacén de flujos.
//
// No es durable. Un único `Mutex` protege el estado, así que cada operación
// es atómica respecto a las demás aunque el almacén se comparta entre hilos.
// Las posiciones de los pasos se renumeran al escribir: `Flow.steps` es
// público y puede llegar editado a mano.
use crate::domain::Flow;
use crate::errors::{FlowError, Result};
use crate::repository::FlowRepository;
use indexmap::IndexMap;
use log::debug;
use process_domain::sequencer::reindex;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Almacén en memoria que conserva el orden de inserción.
pub struct InMemoryFlowRepository {
    state: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    /// Flows indexados por id, en orden de inserción.
    flows: IndexMap<Uuid, Flow>,
    /// Flows creados con `create_flow`; nunca decrece, así que un borrado no
    /// hace que se repita un nombre.
    created: usize,
}

impl InMemoryFlowRepository {
    /// Crea una nueva instancia del repositorio en memoria.
    pub fn new() -> Self {
        Self { state: Mutex::new(StoreState::default()) }
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con
    /// `FlowError::Storage`.
    fn lock(&self) -> std::result::Result<MutexGuard<'_, StoreState>, FlowError> {
        self.state.lock().map_err(|e| FlowError::Storage(format!("mutex poisoned: {:?}", e)))
    }
}

impl Default for InMemoryFlowRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowRepository for InMemoryFlowRepository {
    fn create_flow(&self, name_seed: &str) -> Result<Flow> {
        let mut state = self.lock()?;
        state.created += 1;
        let flow = Flow::new(format!("{} {}", name_seed, state.created), "");
        debug!("create_flow id={} name={}", flow.id, flow.name);
        state.flows.insert(flow.id, flow.clone());
        Ok(flow)
    }

    fn insert_flow(&self, mut flow: Flow) -> Result<Flow> {
        let mut state = self.lock()?;
        if state.flows.contains_key(&flow.id) {
            return Err(FlowError::Conflict(format!("flow {} ya existe", flow.id)));
        }
        flow.steps = reindex(std::mem::take(&mut flow.steps));
        debug!("insert_flow id={} steps={}", flow.id, flow.steps.len());
        state.flows.insert(flow.id, flow.clone());
        Ok(flow)
    }

    fn list_flows(&self) -> Result<Vec<Flow>> {
        Ok(self.lock()?.flows.values().cloned().collect())
    }

    fn get_flow(&self, id: &Uuid) -> Result<Flow> {
        self.lock()?
            .flows
            .get(id)
            .cloned()
            .ok_or_else(|| FlowError::NotFound(format!("flow {}", id)))
    }

    fn update_flow(&self, mut flow: Flow) -> Result<Flow> {
        let mut state = self.lock()?;
        let slot = state.flows
                        .get_mut(&flow.id)
                        .ok_or_else(|| FlowError::NotFound(format!("flow {}", flow.id)))?;
        flow.steps = reindex(std::mem::take(&mut flow.steps));
        flow.touch();
        debug!("update_flow id={} steps={}", flow.id, flow.steps.len());
        *slot = flow.clone();
        Ok(flow)
    }

    fn delete_flow(&self, id: &Uuid) -> Result<()> {
        self.lock()?
            .flows
            .shift_remove(id)
            .map(|_| debug!("delete_flow id={}", id))
            .ok_or_else(|| FlowError::NotFound(format!("flow {}", id)))
    }

    fn count_flows(&self) -> Result<usize> {
        Ok(self.lock()?.flows.len())
    }
}
