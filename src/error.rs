//! # Errores del Servidor
//! src/error.rs
//!
//! Tipos de error explícitos para los fallos que el servidor puede encontrar
//! al leer, parsear y enrutar una petición.

use thiserror::Error;

/// Result del crate
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errores que pueden ocurrir al atender una conexión
#[derive(Debug, Error)]
pub enum ServerError {
    /// Una línea no tiene el segundo token esperado, o faltan líneas
    #[error("Malformed request line {line}: {reason}")]
    MalformedRequestLine { line: usize, reason: String },

    /// La lectura única no trajo suficientes bytes
    #[error("Incomplete read: got {got} bytes")]
    IncompleteRead { got: usize },

    /// El payload no es UTF-8 válido
    #[error("Request is not valid UTF-8: {0}")]
    DecodeError(#[from] std::str::Utf8Error),

    /// Ruta sin handler
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Error de socket
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Indica si el error viene del contenido de la petición (y no del socket)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServerError::Io(_))
    }
}
