use flow::stubs::InMemoryFlowRepository;
use flow::{FlowError, FlowService};
use process_domain::catalog::find_template;
use process_domain::{DomainError, ImpactLevel};
use std::sync::Arc;

fn service() -> FlowService<InMemoryFlowRepository> {
  FlowService::new(Arc::new(InMemoryFlowRepository::new()))
}

#[test]
fn full_flow_lifecycle() {
  let svc = service();
  let flow = svc.create_flow("Flow").expect("create flow");

  // agregar pasos desde el catálogo
  for id in ["piranha-clean", "pecvd-oxide", "spin-coat", "rie-etch"] {
    svc.append_template(flow.id, id).expect("append");
  }
  let stored = svc.get_flow(flow.id).unwrap();
  assert_eq!(stored.steps.len(), 4);
  let positions: Vec<usize> = stored.steps.iter().map(|s| s.position()).collect();
  assert_eq!(positions, vec![0, 1, 2, 3]);

  // duplicar el segundo paso: se agrega al final
  let dup = svc.duplicate_step(flow.id, 1).expect("duplicate");
  assert_eq!(dup.steps.len(), 5);
  assert_eq!(dup.steps[4].template(), dup.steps[1].template());
  assert_ne!(dup.steps[4].instance_id(), dup.steps[1].instance_id());

  // quitar el primero: renumera
  let removed = svc.remove_step(flow.id, 0).expect("remove");
  assert_eq!(removed.steps[0].template_id(), "pecvd-oxide");
  assert_eq!(removed.steps.iter().map(|s| s.position()).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

  // el almacén y el valor devuelto no divergen
  assert_eq!(svc.get_flow(flow.id).unwrap(), removed);

  let summary = svc.summarize(flow.id).unwrap();
  // pecvd x2 y rie son de impacto alto
  assert_eq!(summary.risk_level, ImpactLevel::VeryHigh);
  assert_eq!(summary.total_time_minutes, 30.0 + 5.0 + 15.0 + 30.0);
}

#[test]
fn failed_sequencer_operation_commits_nothing() {
  let svc = service();
  let flow = svc.create_flow("Flow").unwrap();
  svc.append_step(flow.id, find_template("soft-bake").unwrap()).unwrap();
  let before = svc.get_flow(flow.id).unwrap();

  match svc.remove_step(flow.id, 3) {
    Err(FlowError::Domain(DomainError::IndexOutOfBounds { index: 3, len: 1 })) => {}
    other => panic!("expected index error, got {:?}", other),
  }
  assert!(svc.duplicate_step(flow.id, 1).is_err());
  assert_eq!(svc.get_flow(flow.id).unwrap(), before);
}

#[test]
fn rename_and_description_bump_modified_at() {
  let svc = service();
  let flow = svc.create_flow("Flow").unwrap();
  let renamed = svc.rename_flow(flow.id, "Gate oxide").unwrap();
  let described = svc.set_description(flow.id, "oxidación de compuerta").unwrap();
  assert_eq!(described.name, "Gate oxide");
  assert_eq!(described.description, "oxidación de compuerta");
  assert!(renamed.modified_at >= flow.modified_at);
  assert!(described.modified_at >= renamed.modified_at);
  assert_eq!(described.created_at, flow.created_at);
}

#[test]
fn unknown_template_or_flow_is_not_found() {
  let svc = service();
  let flow = svc.create_flow("Flow").unwrap();
  assert!(matches!(svc.append_template(flow.id, "teleport"), Err(FlowError::NotFound(_))));
  assert!(matches!(svc.summarize(uuid::Uuid::new_v4()), Err(FlowError::NotFound(_))));
}

#[test]
fn empty_flow_summary_is_zero() {
  let svc = service();
  let flow = svc.create_flow("Flow").unwrap();
  let summary = svc.summarize(flow.id).unwrap();
  assert_eq!(summary.total_energy_wh, 0.0);
  assert_eq!(summary.risk_level, ImpactLevel::Low);
}
