use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use uuid::Uuid;

use flow::{FlowService, InMemoryFlowRepository};
use process_domain::catalog;

mod config;

use config::CONFIG;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    match run().await {
        // Entrada cerrada (Ctrl-D o stdin redirigido agotado).
        Err(e) if is_end_of_input(e.as_ref()) => {
            println!("\nSaliendo...");
            Ok(())
        }
        other => other,
    }
}

/// Pequeño menú interactivo para componer flujos de proceso y consultar su
/// impacto ambiental. Sólo guarda el id del flow activo; toda mutación pasa
/// por `FlowService`.
async fn run() -> Result<(), Box<dyn Error>> {
    let service = FlowService::new(Arc::new(InMemoryFlowRepository::new()));
    let mut active: Option<Uuid> = None;

    loop {
        println!("\n== Process flow menu ==");
        match active.and_then(|id| service.get_flow(id).ok()) {
            Some(f) => println!("Flow activo: {} ({})", f.name, f.id),
            None => println!("Sin flow activo"),
        }
        println!("1) Ver catálogo de pasos");
        println!("2) Crear flow");
        println!("3) Listar flows");
        println!("4) Seleccionar flow activo");
        println!("5) Agregar paso (id de plantilla)");
        println!("6) Duplicar paso");
        println!("7) Quitar paso");
        println!("8) Renombrar flow");
        println!("9) Ver pasos y resumen de impacto");
        println!("10) Exportar flow activo");
        println!("11) Importar flow desde archivo");
        println!("12) Salir");
        let choice = prompt("Elige una opción: ")?;

        match choice.trim() {
            "1" => {
                for category in catalog::categories() {
                    println!("\n[{}]", category.name());
                    for t in category.steps() {
                        println!("  {:<18} {}", t.id(), t);
                    }
                }
            }
            "2" => match service.create_flow(&CONFIG.name_seed) {
                Ok(f) => {
                    println!("Flow creado: {} ({})", f.name, f.id);
                    active = Some(f.id);
                }
                Err(e) => eprintln!("Error creando flow: {}", e),
            },
            "3" => match service.list_flows() {
                Ok(flows) => {
                    println!("\nID                                   | PASOS | NOMBRE");
                    println!("-----------------------------------------------------------");
                    for f in flows {
                        println!("{} | {:>5} | {}", f.id, f.steps.len(), f.name);
                    }
                }
                Err(e) => eprintln!("Error listando flujos: {}", e),
            },
            "4" => {
                let id_s = prompt("Flow id (UUID): ")?;
                match Uuid::parse_str(id_s.trim()) {
                    Ok(id) => match service.get_flow(id) {
                        Ok(f) => {
                            active = Some(f.id);
                            println!("Flow activo: {}", f.name);
                        }
                        Err(e) => eprintln!("{}", e),
                    },
                    Err(_) => eprintln!("UUID inválido"),
                }
            }
            "5" => {
                let Some(id) = require_active(active) else { continue };
                let template_id = prompt("Id de plantilla (ej: rca-clean): ")?;
                match service.append_template(id, template_id.trim()) {
                    Ok(f) => println!("Paso agregado; el flow tiene {} pasos", f.steps.len()),
                    Err(e) => eprintln!("Error agregando paso: {}", e),
                }
            }
            "6" | "7" => {
                let Some(id) = require_active(active) else { continue };
                let idx_s = prompt("Índice del paso: ")?;
                let index: usize = match idx_s.trim().parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Índice inválido");
                        continue;
                    }
                };
                let res = if choice.trim() == "6" { service.duplicate_step(id, index) } else { service.remove_step(id, index) };
                match res {
                    Ok(f) => println!("Listo; el flow tiene {} pasos", f.steps.len()),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            "8" => {
                let Some(id) = require_active(active) else { continue };
                let name = prompt("Nuevo nombre: ")?;
                if name.trim().is_empty() {
                    println!("Nombre vacío; sin cambios");
                    continue;
                }
                match service.rename_flow(id, name.trim()) {
                    Ok(f) => println!("Flow renombrado: {}", f.name),
                    Err(e) => eprintln!("Error renombrando flow: {}", e),
                }
            }
            "9" => {
                let Some(id) = require_active(active) else { continue };
                match service.get_flow(id) {
                    Ok(f) => {
                        for step in &f.steps {
                            println!("  {}", step);
                        }
                        let summary = f.summary();
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            "10" => {
                let Some(id) = require_active(active) else { continue };
                let exported = match service.get_flow(id) {
                    Ok(f) => flow_persistence::write_flow_file(&CONFIG.exchange, &f).await,
                    Err(e) => Err(e.into()),
                };
                match exported {
                    Ok(path) => println!("Flow exportado en {}", path.display()),
                    Err(e) => eprintln!("Error exportando flow: {}", e),
                }
            }
            "11" => {
                let path = prompt("Ruta del documento: ")?;
                let imported = match flow_persistence::read_flow_file(path.trim()).await {
                    Ok(f) => service.import_flow(f).map_err(flow_persistence::PersistenceError::from),
                    Err(e) => Err(e),
                };
                match imported {
                    Ok(f) => {
                        println!("Flow importado: {} ({}) con {} pasos", f.name, f.id, f.steps.len());
                        active = Some(f.id);
                    }
                    Err(e) => eprintln!("Error importando flow: {}", e),
                }
            }
            "12" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

fn require_active(active: Option<Uuid>) -> Option<Uuid> {
    if active.is_none() {
        eprintln!("Primero crea o selecciona un flow");
    }
    active
}

fn prompt(msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

/// Lee una línea; sin bytes leídos devuelve `UnexpectedEof`.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "fin de la entrada"));
    }
    Ok(s)
}

fn is_end_of_input(e: &(dyn Error + 'static)) -> bool {
    e.downcast_ref::<io::Error>()
     .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
