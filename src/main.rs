//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Sin argumentos escucha en localhost:9292 en modo estricto. Un request
//! malformado termina el proceso con código de salida 1.

use anyhow::{anyhow, Context};
use hello_server::config::Config;
use hello_server::logging;
use hello_server::server::Server;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let config = Config::new();
    if !logging::init(&config.log_level) {
        debug!("Ya había un suscriptor de tracing instalado");
    }

    println!("=================================");
    println!("  Hello HTTP/1.1 Server");
    println!("=================================\n");

    config.validate().map_err(|e| anyhow!(e))?;

    println!("Configuración:");
    println!("   Host: {}", config.host);
    println!("   Puerto: {}", config.port);
    println!("   Modo: {}", if config.hardened { "endurecido" } else { "estricto" });
    println!();

    let address = config.address();
    let server = Server::bind(config).with_context(|| format!("no se pudo abrir {}", address))?;

    let served = server.run()?;
    info!("Servidor detenido tras {} conexiones", served);

    Ok(())
}
