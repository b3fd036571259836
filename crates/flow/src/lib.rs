//! Crate `flow` — entidad `Flow` y almacén de flujos
//!
//! Este crate define la entidad `Flow` (secuencia ordenada de pasos de
//! proceso más metadatos), el contrato de almacenamiento `FlowRepository`,
//! una implementación en memoria (`InMemoryFlowRepository`) y el servicio
//! `FlowService` que aplica las operaciones del secuenciador y escribe el
//! resultado de vuelta en el almacén.
//!
//! Diseño resumido:
//! - Copy-on-write: un `Flow` almacenado nunca se modifica en sitio; cada
//!   mutación produce un valor nuevo que se guarda con `update_flow`.
//! - Atomicidad: si una operación falla, el almacén queda intacto.
//! - El almacén es la única fuente de verdad; la capa de presentación sólo
//!   guarda el id del flow activo.
//!
//! Ejemplo rápido:
//! ```rust
//! use flow::{FlowService, InMemoryFlowRepository};
//! use std::sync::Arc;
//! let service = FlowService::new(Arc::new(InMemoryFlowRepository::new()));
//! let flow = service.create_flow("Flow").unwrap();
//! let flow = service.append_template(flow.id, "rca-clean").unwrap();
//! assert_eq!(flow.steps.len(), 1);
//! ```
pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod stubs;

pub use domain::*;
pub use errors::*;
pub use repository::*;
pub use service::*;
pub use stubs::*;
