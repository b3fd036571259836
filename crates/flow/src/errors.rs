// Archivo: errors.rs
// Propósito: definir los errores del almacén de flujos y el alias Result<T>
// usado por las APIs del crate.
use process_domain::DomainError;
use thiserror::Error;
/// Errores comunes del dominio de flujos.
///
/// - `NotFound`: flow inexistente.
/// - `Conflict`: ya existe un flow con el mismo id.
/// - `Storage`: error al acceder al almacenamiento.
/// - `Domain`: operación inválida sobre la secuencia de pasos.
#[derive(Error, Debug)]
pub enum FlowError {
  /// Entidad no encontrada (flow o plantilla de paso).
  #[error("No encontrado: {0}")]
  NotFound(String),
  /// Inserción de un flow cuyo id ya está almacenado.
  #[error("Conflicto: {0}")]
  Conflict(String),
  /// Error genérico de almacenamiento (mutex envenenado, etc.).
  #[error("Error de almacenamiento: {0}")]
  Storage(String),
  /// Error del secuenciador (índice fuera de rango).
  #[error("Error de dominio: {0}")]
  Domain(#[from] DomainError),
}
/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, FlowError>;
