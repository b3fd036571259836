// catalog.rs
//
// Catálogo estático de plantillas de pasos. Se construye una sola vez al
// primer acceso y nunca se modifica; todas las consultas devuelven
// referencias `'static` a la misma tabla.
use crate::{ImpactLevel, StepTemplate};
use once_cell::sync::Lazy;

/// Categoría del catálogo con sus plantillas en orden de presentación.
#[derive(Debug, Clone)]
pub struct Category {
  name: &'static str,
  steps: Vec<StepTemplate>,
}

impl Category {
  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn steps(&self) -> &[StepTemplate] {
    &self.steps
  }
}

static CATALOG: Lazy<Vec<Category>> = Lazy::new(build_catalog);

/// Nombres de categoría en orden fijo.
pub fn list_categories() -> Vec<&'static str> {
  CATALOG.iter().map(|c| c.name).collect()
}

/// Plantillas de una categoría. Una categoría desconocida devuelve una
/// secuencia vacía.
pub fn list_steps(category: &str) -> &'static [StepTemplate] {
  CATALOG.iter()
         .find(|c| c.name == category)
         .map(|c| c.steps.as_slice())
         .unwrap_or(&[])
}

/// Busca una plantilla por id en todas las categorías.
pub fn find_template(id: &str) -> Option<&'static StepTemplate> {
  CATALOG.iter().flat_map(|c| c.steps.iter()).find(|t| t.id() == id)
}

pub fn categories() -> &'static [Category] {
  &CATALOG
}

fn build_catalog() -> Vec<Category> {
  use ImpactLevel::*;
  vec![Category { name: "Cleaning",
                  steps: vec![StepTemplate::new("rca-clean", "RCA Clean", 20.0, 1500.0, ["NH4OH", "H2O2", "HCl", "DI Water"], 75.0, Medium),
                              StepTemplate::new("piranha-clean", "Piranha Clean", 15.0, 800.0, ["H2SO4", "H2O2"], 120.0, High),
                              StepTemplate::new("solvent-rinse", "Solvent Rinse", 10.0, 200.0, ["Acetone", "IPA", "DI Water"], 25.0, Low)] },
       Category { name: "Deposition",
                  steps: vec![StepTemplate::new("pecvd-oxide", "PECVD Oxide", 30.0, 3000.0, ["SiH4", "N2O"], 350.0, High),
                              StepTemplate::new("lpcvd-nitride", "LPCVD Nitride", 120.0, 5000.0, ["SiH2Cl2", "NH3"], 780.0, High),
                              StepTemplate::new("sputter-metal", "Metal Sputtering", 45.0, 4000.0, ["Ar"], 150.0, Medium),
                              StepTemplate::new("ald-alumina", "ALD Alumina", 90.0, 2500.0, ["TMA", "H2O"], 250.0, Medium)] },
       Category { name: "Lithography",
                  steps: vec![StepTemplate::new("spin-coat", "Photoresist Spin Coat", 5.0, 300.0, ["Photoresist", "HMDS"], 25.0, Medium),
                              StepTemplate::new("soft-bake", "Soft Bake", 2.0, 1000.0, Vec::<String>::new(), 95.0, Low),
                              StepTemplate::new("uv-exposure", "UV Exposure", 1.0, 2000.0, Vec::<String>::new(), 25.0, Low),
                              StepTemplate::new("develop", "Develop", 3.0, 150.0, ["TMAH", "DI Water"], 25.0, Medium)] },
       Category { name: "Etching",
                  steps: vec![StepTemplate::new("wet-etch-boe", "BOE Wet Etch", 10.0, 100.0, ["HF", "NH4F", "DI Water"], 25.0, VeryHigh),
                              StepTemplate::new("rie-etch", "Reactive Ion Etch", 15.0, 3500.0, ["CF4", "O2"], 60.0, High),
                              StepTemplate::new("resist-strip", "Resist Strip", 20.0, 1200.0, ["O2"], 200.0, Low)] },
       Category { name: "Thermal",
                  steps: vec![StepTemplate::new("dry-oxidation", "Dry Oxidation", 120.0, 8000.0, ["O2"], 1000.0, Medium),
                              StepTemplate::new("rta-anneal", "Rapid Thermal Anneal", 2.0, 15000.0, ["N2"], 1050.0, Low),
                              StepTemplate::new("diffusion-doping", "Diffusion Doping", 60.0, 7000.0, ["POCl3", "O2", "N2"], 900.0, High)] },
       Category { name: "Metrology",
                  steps: vec![StepTemplate::new("ellipsometry", "Ellipsometry", 5.0, 150.0, Vec::<String>::new(), 25.0, Low),
                              StepTemplate::new("sem-inspection", "SEM Inspection", 20.0, 1000.0, Vec::<String>::new(), 25.0, Low)] },]
}
