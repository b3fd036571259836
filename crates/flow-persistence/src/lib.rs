//! Intercambio de flujos como documentos JSON.
//!
//! `document` convierte un `Flow` en un documento versionado y de vuelta,
//! validando la forma del documento importado. `files` lee y escribe esos
//! documentos en disco de forma asíncrona; `config` define dónde y cómo se
//! escriben.

pub mod config;
pub mod document;
mod errors;
pub mod files;

pub use config::ExchangeConfig;
pub use document::{export_flow, export_flow_with, import_flow, import_into, SCHEMA_VERSION};
pub use errors::{ImportError, ImportErrorKind, PersistenceError};
pub use files::{file_name_for, read_flow_file, write_flow_file};
