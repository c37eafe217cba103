//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP secuencial:
//! 1. Escucha en un puerto (con SO_REUSEADDR)
//! 2. Acepta una conexión
//! 3. Lee y parsea el request en una sola lectura
//! 4. Envía la respuesta y cierra
//!
//! Recién entonces vuelve a `accept`.

pub mod tcp;

pub use tcp::Server;
