// errors.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
  /// Índice de paso inválido para la secuencia (incluye secuencias vacías).
  #[error("Índice de paso fuera de rango: {index} (longitud {len})")]
  IndexOutOfBounds { index: usize, len: usize },
}
