// document.rs
//
// Formato de intercambio de un `Flow`. El documento exportado contiene todos
// los campos del flow en orden fijo, de modo que reexportar datos sin
// cambios produce exactamente los mismos bytes. El documento importado se
// trata como entrada no confiable: se valida su forma antes de construir
// el flow.
use crate::errors::{ImportError, ImportErrorKind, PersistenceError};
use chrono::{DateTime, Utc};
use flow::{Flow, FlowRepository};
use log::{info, warn};
use process_domain::sequencer::reindex;
use process_domain::StepInstance;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use uuid::Uuid;

/// Versión del formato que escribe esta versión del crate.
pub const SCHEMA_VERSION: u64 = 1;

/// Documentos anteriores al versionado no traen `schemaVersion`.
const LEGACY_SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlowDocument<'a> {
  schema_version: u64,
  id: Uuid,
  name: &'a str,
  description: &'a str,
  created_at: DateTime<Utc>,
  modified_at: DateTime<Utc>,
  steps: &'a [StepInstance],
}

// `id` y `modifiedAt` se ignoran al importar; serde descarta los campos
// desconocidos.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomingFlowDocument {
  name: String,
  #[serde(default)]
  description: String,
  created_at: DateTime<Utc>,
  #[serde(default)]
  steps: Vec<StepInstance>,
}

/// Exporta un flow como JSON con sangría.
pub fn export_flow(flow: &Flow) -> Result<String, PersistenceError> {
  export_flow_with(flow, true)
}

/// Exporta un flow como JSON, con sangría o compacto.
pub fn export_flow_with(flow: &Flow, pretty: bool) -> Result<String, PersistenceError> {
  let doc = FlowDocument { schema_version: SCHEMA_VERSION,
                           id: flow.id,
                           name: &flow.name,
                           description: &flow.description,
                           created_at: flow.created_at,
                           modified_at: flow.modified_at,
                           steps: &flow.steps };
  let text = if pretty { serde_json::to_string_pretty(&doc)? } else { serde_json::to_string(&doc)? };
  info!("flow exportado id={} steps={} bytes={}", flow.id, flow.steps.len(), text.len());
  Ok(text)
}

/// Importa un documento y construye un flow nuevo.
///
/// El id del documento se descarta y se genera uno nuevo; `modified_at` es
/// el instante de importación. Las posiciones se renumeran según el orden
/// del documento y los `instanceId` repetidos se regeneran.
pub fn import_flow(document: &str) -> Result<Flow, ImportError> {
  let value: JsonValue = serde_json::from_str(document)
    .map_err(|e| ImportError::new(ImportErrorKind::ParseFailure, e.to_string()))?;
  if !value.is_object() {
    return Err(ImportError::new(ImportErrorKind::InvalidShape, "el documento debe ser un objeto JSON"));
  }
  check_schema_version(&value)?;
  let incoming: IncomingFlowDocument =
    serde_json::from_value(value).map_err(|e| ImportError::new(ImportErrorKind::InvalidShape, e.to_string()))?;

  let steps = normalize_steps(incoming.steps);
  let flow = Flow { id: Uuid::new_v4(),
                    name: incoming.name,
                    description: incoming.description,
                    steps,
                    created_at: incoming.created_at,
                    modified_at: Utc::now() };
  info!("flow importado id={} steps={}", flow.id, flow.steps.len());
  Ok(flow)
}

/// Importa un documento y lo agrega al almacén. Si la importación falla el
/// almacén no se toca.
pub fn import_into<R>(repo: &R, document: &str) -> Result<Flow, PersistenceError>
  where R: FlowRepository + ?Sized
{
  let flow = import_flow(document)?;
  Ok(repo.insert_flow(flow)?)
}

fn check_schema_version(value: &JsonValue) -> Result<(), ImportError> {
  let version = match value.get("schemaVersion") {
    None => LEGACY_SCHEMA_VERSION,
    Some(v) => v.as_u64()
                .ok_or_else(|| ImportError::new(ImportErrorKind::InvalidShape, "schemaVersion debe ser un entero positivo"))?,
  };
  if version > SCHEMA_VERSION {
    return Err(ImportError::new(ImportErrorKind::UnsupportedVersion,
                                format!("schemaVersion {} no soportada (máxima {})", version, SCHEMA_VERSION)));
  }
  Ok(())
}

fn normalize_steps(steps: Vec<StepInstance>) -> Vec<StepInstance> {
  let mut seen = HashSet::new();
  let unique: Vec<StepInstance> = steps.into_iter()
                                       .map(|step| {
                                         if seen.insert(step.instance_id().to_string()) {
                                           return step;
                                         }
                                         warn!("instanceId repetido {} en documento importado; se regenera", step.instance_id());
                                         let fresh = step.with_fresh_instance_id();
                                         seen.insert(fresh.instance_id().to_string());
                                         fresh
                                       })
                                       .collect();
  if unique.iter().enumerate().any(|(i, s)| s.position() != i) {
    warn!("posiciones no contiguas en documento importado; se renumeran");
  }
  reindex(unique)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn step_json(instance_id: &str, position: i64) -> JsonValue {
    json!({
      "id": "rie-etch",
      "name": "Reactive Ion Etch",
      "durationMinutes": 15.0,
      "powerWatts": 3500.0,
      "chemicals": ["CF4", "O2"],
      "temperatureC": 60.0,
      "envImpact": "high",
      "instanceId": instance_id,
      "position": position
    })
  }

  fn doc_with_steps(steps: Vec<JsonValue>) -> String {
    json!({
      "id": "whatever",
      "name": "Imported",
      "description": "d",
      "createdAt": "2024-03-01T10:00:00Z",
      "modifiedAt": "2024-03-02T10:00:00Z",
      "steps": steps
    }).to_string()
  }

  #[test]
  fn malformed_text_is_parse_failure() {
    let err = import_flow("{\"name\": \"x\",").unwrap_err();
    assert_eq!(err.kind, ImportErrorKind::ParseFailure);
    assert_eq!(import_flow("").unwrap_err().kind, ImportErrorKind::ParseFailure);
  }

  #[test]
  fn missing_steps_is_empty_sequence() {
    let flow = import_flow(r#"{"name": "n", "createdAt": "2024-03-01T10:00:00Z"}"#).unwrap();
    assert!(flow.steps.is_empty());
    assert_eq!(flow.description, "");
  }

  #[test]
  fn wrong_shape_is_rejected() {
    assert_eq!(import_flow("[1, 2]").unwrap_err().kind, ImportErrorKind::InvalidShape);
    assert_eq!(import_flow(r#"{"createdAt": "2024-03-01T10:00:00Z"}"#).unwrap_err().kind,
               ImportErrorKind::InvalidShape);
    assert_eq!(import_flow(r#"{"name": 3, "createdAt": "2024-03-01T10:00:00Z"}"#).unwrap_err().kind,
               ImportErrorKind::InvalidShape);
    let mut bad_step = step_json("a", 0);
    bad_step["envImpact"] = json!("catastrophic");
    assert_eq!(import_flow(&doc_with_steps(vec![bad_step])).unwrap_err().kind,
               ImportErrorKind::InvalidShape);
  }

  #[test]
  fn newer_schema_version_is_unsupported() {
    let doc = r#"{"schemaVersion": 2, "name": "n", "createdAt": "2024-03-01T10:00:00Z"}"#;
    assert_eq!(import_flow(doc).unwrap_err().kind, ImportErrorKind::UnsupportedVersion);
    let doc = r#"{"schemaVersion": "1", "name": "n", "createdAt": "2024-03-01T10:00:00Z"}"#;
    assert_eq!(import_flow(doc).unwrap_err().kind, ImportErrorKind::InvalidShape);
  }

  #[test]
  fn positions_are_renumbered_in_document_order() {
    let flow = import_flow(&doc_with_steps(vec![step_json("a", 5), step_json("b", 2)])).unwrap();
    let got: Vec<(&str, usize)> = flow.steps.iter().map(|s| (s.instance_id(), s.position())).collect();
    assert_eq!(got, vec![("a", 0), ("b", 1)]);
  }

  #[test]
  fn repeated_instance_ids_are_regenerated() {
    let flow = import_flow(&doc_with_steps(vec![step_json("a", 0), step_json("a", 1)])).unwrap();
    assert_eq!(flow.steps[0].instance_id(), "a");
    assert_ne!(flow.steps[1].instance_id(), "a");
  }

  #[test]
  fn step_without_position_is_accepted_and_numbered() {
    let mut first = step_json("a", 0);
    let mut second = step_json("b", 0);
    first.as_object_mut().unwrap().remove("position");
    second.as_object_mut().unwrap().remove("position");
    let flow = import_flow(&doc_with_steps(vec![first, second])).unwrap();
    let got: Vec<(&str, usize)> = flow.steps.iter().map(|s| (s.instance_id(), s.position())).collect();
    assert_eq!(got, vec![("a", 0), ("b", 1)]);
  }

  #[test]
  fn imported_chemicals_are_deduplicated() {
    let mut step = step_json("a", 0);
    step["chemicals"] = json!(["HF", "HF", "O2", "HF"]);
    let flow = import_flow(&doc_with_steps(vec![step])).unwrap();
    assert_eq!(flow.steps[0].chemicals(), ["HF".to_string(), "O2".to_string()]);
  }

  #[test]
  fn document_id_and_modified_at_are_replaced() {
    let flow = import_flow(&doc_with_steps(vec![])).unwrap();
    assert_eq!(flow.created_at, "2024-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap());
    assert!(flow.modified_at > flow.created_at);
    assert_eq!(flow.name, "Imported");
  }

  #[test]
  fn export_puts_schema_version_first() {
    let flow = Flow::new("n", "");
    let text = export_flow_with(&flow, false).unwrap();
    assert!(text.starts_with("{\"schemaVersion\":1,\"id\":"));
  }
}
