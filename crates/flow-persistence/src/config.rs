//! Configuración del intercambio de documentos desde variables de entorno.
//! Usa `FLOW_EXPORT_DIR` y `FLOW_EXPORT_PRETTY`; ambas son opcionales.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
  let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
  /// Directorio donde se escriben los documentos exportados.
  pub export_dir: PathBuf,
  /// JSON con sangría (`true`) o compacto.
  pub pretty: bool,
}

impl Default for ExchangeConfig {
  fn default() -> Self {
    Self { export_dir: PathBuf::from("."), pretty: true }
  }
}

impl ExchangeConfig {
  pub fn from_env() -> Self {
    init_dotenv();
    let defaults = Self::default();
    let export_dir = env::var("FLOW_EXPORT_DIR").map(PathBuf::from).unwrap_or(defaults.export_dir);
    let pretty = env::var("FLOW_EXPORT_PRETTY").ok().and_then(|v| parse_flag(&v)).unwrap_or(defaults.pretty);
    Self { export_dir, pretty }
  }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
  Lazy::force(&DOTENV_LOADED);
}

fn parse_flag(raw: &str) -> Option<bool> {
  match raw.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}
