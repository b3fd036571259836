// files.rs
//
// Lectura y escritura de documentos en disco. Leer un archivo provisto por
// el usuario es la única operación de latencia no acotada, por eso estas
// funciones son asíncronas; el parseo ocurre sólo con el texto completo.
use crate::config::ExchangeConfig;
use crate::document::{export_flow_with, import_flow};
use crate::errors::PersistenceError;
use flow::Flow;
use log::info;
use std::path::{Path, PathBuf};

/// Nombre de archivo para un flow: nombre en minúsculas con guiones, más
/// los primeros 8 caracteres del id, con extensión `.json`.
pub fn file_name_for(flow: &Flow) -> String {
  let mut slug = String::new();
  for c in flow.name.chars().flat_map(char::to_lowercase) {
    if c.is_ascii_alphanumeric() {
      slug.push(c);
    } else if !slug.is_empty() && !slug.ends_with('-') {
      slug.push('-');
    }
  }
  let slug = slug.trim_end_matches('-');
  let slug = if slug.is_empty() { "flow" } else { slug };
  let id = flow.id.simple().to_string();
  format!("{}-{}.json", slug, &id[..8])
}

/// Exporta `flow` a `config.export_dir`, creando el directorio si falta.
/// Devuelve la ruta escrita.
pub async fn write_flow_file(config: &ExchangeConfig, flow: &Flow) -> Result<PathBuf, PersistenceError> {
  tokio::fs::create_dir_all(&config.export_dir).await?;
  let path = config.export_dir.join(file_name_for(flow));
  let text = export_flow_with(flow, config.pretty)?;
  tokio::fs::write(&path, text).await?;
  info!("flow {} escrito en {}", flow.id, path.display());
  Ok(path)
}

/// Lee un documento completo y lo importa. No toca ningún almacén.
pub async fn read_flow_file(path: impl AsRef<Path>) -> Result<Flow, PersistenceError> {
  let path = path.as_ref();
  let text = tokio::fs::read_to_string(path).await?;
  info!("documento leído de {} ({} bytes)", path.display(), text.len());
  Ok(import_flow(&text)?)
}
