//! # Construcción de Respuestas HTTP
//!
//! Construye respuestas HTTP/1.1 y las convierte a bytes para el socket.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 80\r\n
//! \r\n
//! <html><head><title>An Example Page</title></head><body>Hello World</body></html>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use hello_server::http::Response;
//!
//! let response = Response::html("Hello World");
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;
use serde_json::json;

/// Plantilla HTML fija; el fragmento va dentro del `<body>`
const HTML_HEAD: &str = "<html><head><title>An Example Page</title></head><body>";
const HTML_TAIL: &str = "</body></html>";

/// Respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,

    /// Headers en el orden en que se escriben
    headers: Vec<(String, String)>,

    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header; si ya existe se sobrescribe en su posición
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Versión mutable de `with_header`
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el body y calcula `Content-Length` en bytes
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        let length = self.body.len().to_string();
        self.add_header("Content-Length", &length);
        self
    }

    /// Respuesta `200 OK` con el fragmento envuelto en la plantilla HTML
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::http::{Response, StatusCode};
    ///
    /// let response = Response::html("Hello World");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.header("Content-Length"), Some("80"));
    /// ```
    pub fn html(fragment: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html")
            .with_body(&wrap_html(fragment))
    }

    /// Respuesta de error con body JSON: `{"error": "mensaje"}`
    ///
    /// Solo se usa en modo endurecido.
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = json!({ "error": message }).to_string();
        Self::new(status)
            .with_header("Content-Type", "application/json")
            .with_body(&body)
    }

    /// Serializa status line, headers, línea vacía y body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(format!("HTTP/1.1 {}\r\n", self.status).as_bytes());

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Busca un header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Envuelve un fragmento en la plantilla HTML fija
pub fn wrap_html(fragment: &str) -> String {
    format!("{}{}{}", HTML_HEAD, fragment, HTML_TAIL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_PAGE: &str =
        "<html><head><title>An Example Page</title></head><body>Hello World</body></html>";

    /// Separa headers y body en la primera línea vacía
    fn split_wire(bytes: &[u8]) -> (String, Vec<u8>) {
        let pos = bytes
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("missing blank line");
        let head = String::from_utf8(bytes[..pos].to_vec()).unwrap();
        (head, bytes[pos + 4..].to_vec())
    }

    #[test]
    fn test_html_body() {
        let response = Response::html("Hello World");

        assert_eq!(response.body(), HELLO_PAGE.as_bytes());
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("content-length"), Some("80"));
    }

    #[test]
    fn test_to_bytes_exact_wire_format() {
        let bytes = Response::html("Hello World").to_bytes();
        let expected = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\n\r\n{}",
            HELLO_PAGE.len(),
            HELLO_PAGE
        );

        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn test_content_length_counts_bytes_not_chars() {
        let response = Response::html("Olá, señor ☃");
        let (head, body) = split_wire(&response.to_bytes());

        let declared: usize = head
            .lines()
            .find_map(|l| l.strip_prefix("Content-Length: "))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, body.len());
        assert!(declared > wrap_html("Olá, señor ☃").chars().count());
    }

    #[test]
    fn test_header_overwrite_keeps_position() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "a")
            .with_header("content-type", "text/html");

        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.headers()[0].1, "text/html");
    }

    #[test]
    fn test_error_response_json() {
        let response = Response::error(StatusCode::NotFound, "Unknown route: /nope");
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();

        assert_eq!(response.status(), StatusCode::NotFound);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(body["error"], "Unknown route: /nope");
    }

    #[test]
    fn test_error_response_status_line() {
        let bytes = Response::error(StatusCode::BadRequest, "bad").to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }
}
