//! # Comandos del Servidor
//!
//! Handlers de las rutas. Cada handler recibe un `ParsedRequest`
//! y retorna una `Response`.

pub mod basic;

pub use basic::*;
