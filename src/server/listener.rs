use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Owns the listening socket for the lifetime of the process.
///
/// `bind` opens the socket, `serve` runs the accept loop, and dropping the
/// server (or the `serve` future) closes it.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    pub async fn bind(addr: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind to {}", addr))?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, one task per connection.
    ///
    /// A failed accept is logged and the loop keeps going.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            tokio::spawn(async move {
                let mut conn = Connection::new(socket);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let server = Server::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", server.local_addr()?);
    server.serve().await
}
