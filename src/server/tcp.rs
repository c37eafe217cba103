//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Una conexión a la vez: se lee, se responde y se cierra antes del
//! siguiente `accept`. No hay estado compartido entre conexiones.
//!
//! El socket de escucha pertenece al `Server`: se abre en `bind` y se
//! libera cuando el valor se destruye.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::{ParsedRequest, Response, StatusCode};
use crate::router::Router;
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use tracing::{debug, error, info, warn};

/// Backlog del listen; las conexiones se atienden de a una
const LISTEN_BACKLOG: i32 = 1;

/// Servidor HTTP/1.1 de una conexión a la vez
pub struct Server {
    config: Config,
    router: Router,
    listener: TcpListener,
}

impl Server {
    /// Abre el socket de escucha en `config.address()`
    ///
    /// Habilita SO_REUSEADDR antes del bind para poder reiniciar el
    /// servidor sin esperar a que expiren las conexiones en TIME_WAIT.
    pub fn bind(config: Config) -> Result<Self> {
        let address = resolve(&config.address())?;
        info!("Iniciando servidor en {}", address);

        let socket = Socket::new(Domain::for_address(address), Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&address.into())?;
        socket.listen(LISTEN_BACKLOG)?;

        let listener: TcpListener = socket.into();
        info!(
            "Servidor escuchando en {} (modo {})",
            listener.local_addr()?,
            if config.hardened { "endurecido" } else { "estricto" }
        );

        Ok(Self {
            config,
            router: Router::with_default_routes(),
            listener,
        })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Acepta conexiones en secuencia
    ///
    /// Sin `max_connections` no retorna salvo por error. En modo estricto
    /// cualquier fallo de lectura o parsing termina el loop con ese error.
    /// En modo endurecido los errores de socket de una conexión solo se
    /// loguean; un fallo de `accept` sigue siendo fatal.
    /// Retorna la cantidad de conexiones atendidas.
    pub fn run(self) -> Result<usize> {
        let mut served = 0;
        info!("Waiting For Connection...");

        for stream in self.listener.incoming() {
            let stream = stream?;
            match self.handle_connection(stream) {
                Ok(()) => {}
                Err(ServerError::Io(e)) if self.config.hardened => {
                    warn!("Error de socket en la conexión, se continúa: {}", e);
                }
                Err(e) => {
                    error!("Error fatal atendiendo conexión: {}", e);
                    return Err(e);
                }
            }
            served += 1;

            if self.config.max_connections.is_some_and(|max| served >= max) {
                info!("Límite de {} conexiones alcanzado", served);
                break;
            }
        }

        Ok(served)
    }

    /// Atiende una conexión completa: lectura única, ruteo, respuesta
    ///
    /// La conexión se cierra al salir (el stream se destruye), haya o no
    /// respuesta.
    pub fn handle_connection(&self, mut stream: TcpStream) -> Result<()> {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        info!("New Connection received from {}", peer);

        let parsed = if self.config.hardened {
            ParsedRequest::read_headers_from(&mut stream)
        } else {
            ParsedRequest::read_from(&mut stream)
        };

        let routed = parsed.and_then(|request| {
            debug!(
                request = %serde_json::to_string(&request).unwrap_or_default(),
                "Request parseado"
            );
            self.router.route(&request)
        });

        let response = match routed {
            Ok(response) => Some(response),
            Err(e) => self.response_for_error(e)?,
        };

        match response {
            Some(response) => {
                stream.write_all(&response.to_bytes())?;
                stream.flush()?;
                info!("{} -> {}", peer, response.status());
            }
            None => info!("{} -> sin respuesta", peer),
        }

        Ok(())
    }

    /// Decide qué hacer con un error de request
    ///
    /// * `Ok(Some(_))`: responder (solo en modo endurecido)
    /// * `Ok(None)`: cerrar sin escribir nada
    /// * `Err(_)`: fallo fatal
    fn response_for_error(&self, err: ServerError) -> Result<Option<Response>> {
        match err {
            ServerError::UnknownRoute(ref uri) if self.config.hardened => {
                warn!("Ruta desconocida: {}", uri);
                Ok(Some(Response::error(StatusCode::NotFound, &err.to_string())))
            }
            ServerError::UnknownRoute(uri) => {
                warn!("Ruta desconocida: {} (se cierra sin respuesta)", uri);
                Ok(None)
            }
            e if self.config.hardened && e.is_client_error() => {
                warn!("Request inválido: {}", e);
                Ok(Some(Response::error(StatusCode::BadRequest, &e.to_string())))
            }
            e => Err(e),
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        match self.listener.local_addr() {
            Ok(addr) => info!("Liberando listener en {}", addr),
            Err(_) => info!("Liberando listener"),
        }
    }
}

/// Resuelve host:port prefiriendo IPv4 (`localhost` -> 127.0.0.1)
fn resolve(address: &str) -> Result<SocketAddr> {
    let candidates: Vec<SocketAddr> = address.to_socket_addrs()?.collect();

    candidates
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| {
            ServerError::Io(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no address for {}", address),
            ))
        })
}
