//! TCP proxy that drops its first connections
//!
//! Simulates a server that resets the connection before any response head
//! is sent. Later connections are piped to the upstream unchanged.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

pub struct FlakyProxy {
    addr: SocketAddr,
    shutdown: CancellationToken,
    connections: Arc<AtomicU32>,
}

impl FlakyProxy {
    /// Proxy to `upstream`, dropping the first `drop_first` connections
    pub async fn start(upstream: SocketAddr, drop_first: u32) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let connections = Arc::new(AtomicU32::new(0));

        let token = shutdown.clone();
        let counter = Arc::clone(&connections);

        tokio::spawn(async move {
            loop {
                let accepted = tokio::select! {
                    () = token.cancelled() => break,
                    accepted = listener.accept() => accepted,
                };

                let Ok((inbound, _)) = accepted else { continue };
                let seen = counter.fetch_add(1, Ordering::SeqCst);

                if seen < drop_first {
                    drop(inbound);
                    continue;
                }

                tokio::spawn(pipe(inbound, upstream));
            }
        });

        Ok(Self {
            addr,
            shutdown,
            connections,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Connections accepted so far, dropped ones included
    pub fn connections(&self) -> u32 {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for FlakyProxy {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn pipe(mut inbound: TcpStream, upstream: SocketAddr) {
    if let Ok(mut outbound) = TcpStream::connect(upstream).await {
        tokio::io::copy_bidirectional(&mut inbound, &mut outbound).await.ok();
    }
}
