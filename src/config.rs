//! # Configuración del Servidor
//! src/config.rs
//!
//! Sin argumentos el servidor escucha en `localhost:9292` en modo estricto.
//! Todo se puede sobrescribir por CLI o variables de entorno.
//!
//! ### CLI
//! ```bash
//! ./hello_server --port 8080 --hardened --log-level debug
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HELLO_PORT=8080 HELLO_HOST=0.0.0.0 ./hello_server
//! ```

use clap::Parser;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Servidor HTTP/1.1 mínimo de una conexión a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "localhost", env = "HELLO_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "9292", env = "HELLO_PORT")]
    pub port: u16,

    /// Responder 400/404 y seguir atendiendo en vez de terminar el proceso
    #[arg(long, env = "HELLO_HARDENED")]
    pub hardened: bool,

    /// Terminar después de N conexiones (sin límite por defecto)
    #[arg(long = "max-connections", env = "HELLO_MAX_CONNECTIONS")]
    pub max_connections: Option<usize>,

    /// Nivel de log si RUST_LOG no está definido
    #[arg(long = "log-level", default_value = "info", env = "HELLO_LOG")]
    pub log_level: String,
}

impl Config {
    /// Crea la configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "localhost:9292");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.max_connections == Some(0) {
            return Err("Max connections must be >= 1".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9292,
            hardened: false,
            max_connections: None,
            log_level: "info".to_string(),
        }
    }
}
