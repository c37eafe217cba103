//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea el `uri` exacto del request a un handler.
//!
//! ```text
//! ParsedRequest → Router → Handler → Response
//! ```
//!
//! Sin handler para el path se retorna `ServerError::UnknownRoute` y es el
//! servidor quien decide qué hacer (cerrar sin respuesta o 404).

use crate::commands;
use crate::error::{Result, ServerError};
use crate::http::{ParsedRequest, Response};

/// Un handler recibe el request parseado y retorna una Response
pub type Handler = fn(&ParsedRequest) -> Response;

/// Router de paths literales
pub struct Router {
    routes: Vec<(String, Handler)>,
}

impl Router {
    /// Crea un router vacío
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
        }
    }

    /// Router con las rutas del servidor: `/` y `/time`
    pub fn with_default_routes() -> Self {
        let mut router = Self::new();
        router.register("/", commands::hello_handler);
        router.register("/time", commands::time_handler);
        router
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::router::Router;
    /// use hello_server::http::{ParsedRequest, Response};
    ///
    /// fn bye_handler(_req: &ParsedRequest) -> Response {
    ///     Response::html("Bye")
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register("/bye", bye_handler);
    /// ```
    pub fn register(&mut self, path: &str, handler: Handler) {
        self.routes.push((path.to_string(), handler));
    }

    /// Ejecuta el handler cuyo path coincide exactamente con el uri
    pub fn route(&self, request: &ParsedRequest) -> Result<Response> {
        let uri = request.uri();

        self.routes
            .iter()
            .find(|(path, _)| path == uri)
            .map(|(_, handler)| handler(request))
            .ok_or_else(|| ServerError::UnknownRoute(uri.to_string()))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
