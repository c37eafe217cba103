//! # Logging
//! src/logging.rs
//!
//! Suscriptor `tracing` para el binario. `RUST_LOG` tiene prioridad sobre
//! el nivel pasado por CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Instala el suscriptor global
///
/// Retorna `false` si ya había uno instalado (por ejemplo en tests).
pub fn init(default_level: &str) -> bool {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_level),
    };

    fmt()
        .with_env_filter(env_filter)
        .with_level(true)
        .with_target(false)
        .try_init()
        .is_ok()
}
