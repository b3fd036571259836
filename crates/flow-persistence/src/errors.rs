// errors.rs
use flow::FlowError;
use std::fmt;
use thiserror::Error;

/// Clase de fallo al importar un documento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportErrorKind {
  /// El texto no es JSON sintácticamente válido.
  ParseFailure,
  /// JSON válido pero sin la forma de un flow (campos ausentes o de tipo
  /// incorrecto).
  InvalidShape,
  /// `schemaVersion` posterior a la que entiende esta versión.
  UnsupportedVersion,
}

impl fmt::Display for ImportErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      ImportErrorKind::ParseFailure => "parse_failure",
      ImportErrorKind::InvalidShape => "invalid_shape",
      ImportErrorKind::UnsupportedVersion => "unsupported_version",
    };
    write!(f, "{}", s)
  }
}

#[derive(Debug, Clone, Error)]
#[error("Error de importación ({kind}): {message}")]
pub struct ImportError {
  pub kind: ImportErrorKind,
  pub message: String,
}

impl ImportError {
  pub fn new(kind: ImportErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
  #[error("Error de E/S: {0}")]
  Io(#[from] std::io::Error),
  #[error("Error de serialización: {0}")]
  Serialization(#[from] serde_json::Error),
  #[error(transparent)]
  Import(#[from] ImportError),
  #[error(transparent)]
  Flow(#[from] FlowError),
}
