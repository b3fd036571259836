// Archivo: repository.rs
// Propósito: definir el trait `FlowRepository`, el contrato del almacén de
// flujos. Cualquier implementación (en memoria, base de datos, etc.) debe
// tratar cada `Flow` como un valor: se guarda y se devuelve por copia.
use crate::domain::Flow;
use crate::errors::Result;
use uuid::Uuid;

/// Contrato del almacén de flujos.
///
/// El almacén es el único dueño de los flujos. Los llamadores reciben
/// copias y escriben los cambios de vuelta con `update_flow`; nunca se
/// comparte un `Flow` mutable por referencia.
pub trait FlowRepository: Send + Sync {
    /// Crea un flow vacío cuyo nombre se deriva de `name_seed` y del número
    /// de flows existentes (`"{seed} {n}"`). Lo agrega al final y lo
    /// devuelve.
    fn create_flow(&self, name_seed: &str) -> Result<Flow>;

    /// Almacena un flow producido fuera del almacén (por ejemplo, uno
    /// importado). Falla con `Conflict` si el id ya existe.
    fn insert_flow(&self, flow: Flow) -> Result<Flow>;

    /// Lista los flows en orden de inserción.
    fn list_flows(&self) -> Result<Vec<Flow>>;

    /// Obtiene un flow por id. `NotFound` si no existe.
    fn get_flow(&self, id: &Uuid) -> Result<Flow>;

    /// Reemplaza el flow con el mismo id por el valor completo recibido.
    /// Ajusta `modified_at` a ahora si no está al día y devuelve el valor
    /// almacenado. `NotFound` si no existe.
    fn update_flow(&self, flow: Flow) -> Result<Flow>;

    /// Elimina un flow. `NotFound` si no existe.
    fn delete_flow(&self, id: &Uuid) -> Result<()>;

    /// Número de flows almacenados.
    fn count_flows(&self) -> Result<usize>;
}
