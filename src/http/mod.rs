//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1:
//!
//! - Parsing posicional del request (uri + tres headers)
//! - Construcción de la respuesta HTML con `Content-Length` calculado
//! - Códigos de estado
//!
//! ### Formato de Request esperado
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Host: localhost\r\n
//! User-Agent: curl/8.0\r\n
//! Accept: */*\r\n
//! \r\n
//! ```

pub mod request;   // Parsing de requests
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado HTTP

pub use request::ParsedRequest;
pub use response::Response;
pub use status::StatusCode;
