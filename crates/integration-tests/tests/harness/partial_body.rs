//! Raw TCP backend that sends a response head and then misbehaves
//!
//! The head promises a 100 byte JSON body but only one byte is written.
//! Afterwards the connection is either held open or closed.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

const PARTIAL_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{";

/// What happens after the partial body
#[derive(Debug, Clone, Copy)]
pub enum Tail {
    /// Keep the connection open without writing anything else
    Stall,
    /// Close the connection
    Close,
}

pub struct PartialBodyBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    connections: Arc<AtomicU32>,
}

impl PartialBodyBackend {
    pub async fn start(tail: Tail) -> anyhow::Result<Self> {
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

                let Ok((stream, _)) = accepted else { continue };
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(respond(stream, tail, token.clone()));
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

    /// Connections accepted so far
    pub fn connections(&self) -> u32 {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for PartialBodyBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn respond(mut stream: TcpStream, tail: Tail, shutdown: CancellationToken) {
    if read_request_head(&mut stream).await.is_err() {
        return;
    }

    if stream.write_all(PARTIAL_RESPONSE).await.is_err() {
        return;
    }
    stream.flush().await.ok();

    match tail {
        Tail::Stall => shutdown.cancelled().await,
        Tail::Close => {
            stream.shutdown().await.ok();
        }
    }
}

async fn read_request_head(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut received = Vec::new();
    let mut buf = [0_u8; 1024];

    while !received.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        received.extend_from_slice(&buf[..n]);
    }

    Ok(())
}
