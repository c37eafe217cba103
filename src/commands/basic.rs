//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Las dos páginas que sirve el servidor:
//! - /: Saludo fijo
//! - /time: Hora local actual (HH:MM:SS, 24 horas)

use crate::http::{ParsedRequest, Response};
use chrono::{Local, NaiveTime};

/// Fragmento del saludo
pub const GREETING: &str = "Hello World";

/// Handler para /
pub fn hello_handler(_req: &ParsedRequest) -> Response {
    Response::html(GREETING)
}

/// Handler para /time
///
/// Usa la hora local del servidor.
pub fn time_handler(_req: &ParsedRequest) -> Response {
    Response::html(&time_fragment(Local::now().time()))
}

/// Texto de /time para una hora dada
///
/// # Ejemplo
/// ```
/// use chrono::NaiveTime;
/// use hello_server::commands::time_fragment;
///
/// let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
/// assert_eq!(time_fragment(t), "Current time is : 07:05:09");
/// ```
pub fn time_fragment(time: NaiveTime) -> String {
    format!("Current time is : {}", time.format("%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use regex::Regex;

    fn request(path: &str) -> ParsedRequest {
        let raw = format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n",
            path
        );
        ParsedRequest::parse(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_hello_handler() {
        let response = hello_handler(&request("/"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(
            response.body(),
            b"<html><head><title>An Example Page</title></head><body>Hello World</body></html>"
        );
    }

    #[test]
    fn test_time_fragment_is_24_hour() {
        let t = NaiveTime::from_hms_opt(23, 59, 1).unwrap();
        assert_eq!(time_fragment(t), "Current time is : 23:59:01");
    }

    #[test]
    fn test_time_fragment_midnight() {
        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(time_fragment(t), "Current time is : 00:00:00");
    }

    #[test]
    fn test_time_handler_pattern() {
        let response = time_handler(&request("/time"));
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        let re = Regex::new(
            r"^<html><head><title>An Example Page</title></head><body>Current time is : \d{2}:\d{2}:\d{2}</body></html>$",
        )
        .unwrap();

        assert!(re.is_match(&body), "unexpected body: {}", body);
        assert_eq!(response.header("Content-Length"), Some(body.len().to_string().as_str()));
    }
}
