//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo: escucha en un puerto TCP, atiende una
//! conexión a la vez, extrae por posición el uri y tres headers y responde
//! una página HTML fija según el path.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing posicional del request y construcción de la respuesta
//! - `server`: Listener TCP y ciclo accept → responder → cerrar
//! - `router`: Ruteo por path literal (`/` y `/time`)
//! - `commands`: Handlers de cada ruta
//! - `config`: CLI y variables de entorno
//! - `error`: Tipos de error
//! - `logging`: Suscriptor de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use hello_server::config::Config;
//! use hello_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al abrir el socket");
//! server.run().expect("Error fatal");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;

pub use error::{Result, ServerError};
