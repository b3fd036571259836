//! Configuración central del binario.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use flow_persistence::ExchangeConfig;
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Semilla para el nombre de los flows nuevos (`"{seed} {n}"`).
    pub name_seed: String,
    /// Dónde y cómo se exportan los documentos.
    pub exchange: ExchangeConfig,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // from_env fuerza la carga de .env antes de leer FLOW_NAME_SEED
    let exchange = ExchangeConfig::from_env();
    let name_seed = env::var("FLOW_NAME_SEED").ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "Flow".to_string());
    AppConfig { name_seed, exchange }
});
