use flow::repository::FlowRepository;
use flow::stubs::InMemoryFlowRepository;
use flow::FlowService;
use flow_persistence::{export_flow, export_flow_with, import_flow, import_into, ImportErrorKind, PersistenceError};
use std::sync::Arc;

fn sample_flow() -> flow::Flow {
  let svc = FlowService::new(Arc::new(InMemoryFlowRepository::new()));
  let flow = svc.create_flow("Flow").unwrap();
  for id in ["rca-clean", "ald-alumina", "wet-etch-boe", "rta-anneal"] {
    svc.append_template(flow.id, id).unwrap();
  }
  svc.duplicate_step(flow.id, 1).unwrap();
  svc.set_description(flow.id, "ALD + BOE").unwrap()
}

#[test]
fn import_of_export_equals_original_except_id_and_modified_at() {
  let original = sample_flow();
  let doc = export_flow(&original).unwrap();
  let imported = import_flow(&doc).unwrap();

  assert_ne!(imported.id, original.id);
  assert!(imported.modified_at >= original.modified_at);
  assert_eq!(imported.name, original.name);
  assert_eq!(imported.description, original.description);
  assert_eq!(imported.created_at, original.created_at);
  assert_eq!(imported.steps, original.steps);
  assert_eq!(imported.summary(), original.summary());
}

#[test]
fn compact_export_round_trips_too() {
  let original = sample_flow();
  let imported = import_flow(&export_flow_with(&original, false).unwrap()).unwrap();
  assert_eq!(imported.steps, original.steps);
}

#[test]
fn re_export_of_unchanged_flow_is_byte_identical() {
  let flow = sample_flow();
  assert_eq!(export_flow(&flow).unwrap(), export_flow(&flow).unwrap());
  assert_eq!(export_flow_with(&flow, false).unwrap(), export_flow_with(&flow, false).unwrap());
}

#[test]
fn exported_document_uses_camel_case_fields() {
  let flow = sample_flow();
  let value: serde_json::Value = serde_json::from_str(&export_flow(&flow).unwrap()).unwrap();
  assert_eq!(value["schemaVersion"], 1);
  assert_eq!(value["id"], flow.id.to_string());
  assert!(value["createdAt"].is_string());
  assert!(value["modifiedAt"].is_string());
  let first = &value["steps"][0];
  assert_eq!(first["id"], "rca-clean");
  assert_eq!(first["envImpact"], "medium");
  assert_eq!(first["position"], 0);
  assert!(first["instanceId"].is_string());
  assert_eq!(value["steps"].as_array().unwrap().len(), 5);
}

#[test]
fn invalid_document_leaves_store_unmodified() {
  let repo = InMemoryFlowRepository::new();
  repo.create_flow("Flow").unwrap();
  let before = repo.list_flows().unwrap();

  match import_into(&repo, "{ not json") {
    Err(PersistenceError::Import(e)) => assert_eq!(e.kind, ImportErrorKind::ParseFailure),
    other => panic!("expected parse failure, got {:?}", other),
  }
  assert_eq!(repo.list_flows().unwrap(), before);
}

#[test]
fn import_into_appends_with_fresh_id() {
  let repo = InMemoryFlowRepository::new();
  let original = sample_flow();
  let doc = export_flow(&original).unwrap();
  let a = import_into(&repo, &doc).unwrap();
  let b = import_into(&repo, &doc).unwrap();
  assert_ne!(a.id, b.id);
  assert_eq!(repo.count_flows().unwrap(), 2);
  assert_eq!(repo.get_flow(&a.id).unwrap(), a);
}
