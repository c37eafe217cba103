//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser posicional: una sola lectura de hasta 4096 bytes, se decodifica
//! como UTF-8, se separa en líneas por `\r\n` y se toma el segundo token
//! (separado por espacio) de las primeras cuatro líneas.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /time HTTP/1.1\r\n       -> línea 0: uri
//! Host: localhost\r\n          -> línea 1: host
//! User-Agent: curl/8.0\r\n     -> línea 2: user-agent
//! Accept: */*\r\n              -> línea 3: accept
//! \r\n
//! ```
//!
//! Los headers en otro orden producen valores incorrectos y si faltan
//! líneas el parsing falla. El modo endurecido usa `parse_headers`, que
//! busca cada header por nombre.

use crate::error::{Result, ServerError};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

/// Tamaño de la lectura única sobre el socket
pub const REQUEST_BUFFER_SIZE: usize = 4096;

/// Campos extraídos de una petición
///
/// Vive lo que dura una conexión: se construye tras el `accept` y se
/// descarta después de enviar la respuesta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    host: String,
    uri: String,
    #[serde(rename = "user-agent")]
    user_agent: String,
    accept: String,
}

impl ParsedRequest {
    /// Lee una vez del stream y parsea en modo posicional
    ///
    /// No se reintenta la lectura si los datos llegan incompletos.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let raw = read_once(reader)?;
        Self::parse(&raw)
    }

    /// Lee una vez del stream y parsea los headers por nombre
    pub fn read_headers_from<R: Read>(reader: &mut R) -> Result<Self> {
        let raw = read_once(reader)?;
        Self::parse_headers(&raw)
    }

    /// Parsea un request por posición fija
    ///
    /// # Errores
    ///
    /// * `IncompleteRead` si no hay bytes
    /// * `DecodeError` si el payload no es UTF-8
    /// * `MalformedRequestLine` si hay menos de 4 líneas o una línea no
    ///   tiene segundo token
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use hello_server::http::ParsedRequest;
    ///
    /// let raw = b"GET / HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
    /// let request = ParsedRequest::parse(raw).unwrap();
    ///
    /// assert_eq!(request.uri(), "/");
    /// assert_eq!(request.get("user-agent"), Some("test"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        let text = decode(buffer)?;
        let lines: Vec<&str> = text.split("\r\n").collect();

        Ok(ParsedRequest {
            uri: second_token(&lines, 0)?,
            host: second_token(&lines, 1)?,
            user_agent: second_token(&lines, 2)?,
            accept: second_token(&lines, 3)?,
        })
    }

    /// Parsea la request line y luego los headers por nombre
    ///
    /// Los nombres se comparan en minúsculas y se separan del valor en el
    /// primer `:`. Solo la request line es obligatoria; un header ausente
    /// queda como string vacío.
    pub fn parse_headers(buffer: &[u8]) -> Result<Self> {
        let text = decode(buffer)?;
        let lines: Vec<&str> = text.split("\r\n").collect();

        let uri = second_token(&lines, 0)?;
        let mut headers = header_map(&lines[1..])?;
        let mut take = |name: &str| headers.remove(name).unwrap_or_default();

        Ok(ParsedRequest {
            host: take("host"),
            user_agent: take("user-agent"),
            accept: take("accept"),
            uri,
        })
    }

    /// Vista de mapa: busca un campo por su clave
    ///
    /// Claves válidas: `host`, `uri`, `user-agent`, `accept`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "host" => Some(&self.host),
            "uri" => Some(&self.uri),
            "user-agent" => Some(&self.user_agent),
            "accept" => Some(&self.accept),
            _ => None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn accept(&self) -> &str {
        &self.accept
    }
}

fn read_once<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
    let bytes_read = reader.read(&mut buffer)?;
    Ok(buffer[..bytes_read].to_vec())
}

fn decode(buffer: &[u8]) -> Result<&str> {
    if buffer.is_empty() {
        return Err(ServerError::IncompleteRead { got: 0 });
    }
    Ok(std::str::from_utf8(buffer)?)
}

/// Segundo token de la línea `index`, separando por un espacio simple
fn second_token(lines: &[&str], index: usize) -> Result<String> {
    let line = lines.get(index).ok_or_else(|| ServerError::MalformedRequestLine {
        line: index,
        reason: format!("expected at least {} lines, got {}", index + 1, lines.len()),
    })?;

    line.split(' ')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| ServerError::MalformedRequestLine {
            line: index,
            reason: format!("no second token in {:?}", line),
        })
}

/// Construye nombre (minúsculas) -> valor hasta la línea vacía
fn header_map(lines: &[&str]) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::new();

    for (offset, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            break;
        }

        let (name, value) = line.split_once(':').ok_or_else(|| ServerError::MalformedRequestLine {
            line: offset + 1,
            reason: format!("header without ':' in {:?}", line),
        })?;
        headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    Ok(headers)
}
