// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw TCP connections

use std::time::Duration;

use tokio::net::TcpStream;

use crate::error::{Error, Result};

/// Open a TCP connection to `host:port`.
///
/// Resolves once the connection is established and fails with
/// [`Error::Connect`] if it cannot be.
pub async fn tcp(host: &str, port: u16) -> Result<TcpStream> {
    match TcpStream::connect((host, port)).await {
        Ok(stream) => {
            tracing::debug!(host, port, "TCP connected");
            Ok(stream)
        }
        Err(source) => {
            tracing::warn!(host, port, error = %source, "TCP connect failed");
            Err(Error::Connect {
                host: host.to_string(),
                port,
                source,
            })
        }
    }
}

/// [`tcp`] bounded by a connect timeout
pub async fn tcp_with_timeout(host: &str, port: u16, timeout: Duration) -> Result<TcpStream> {
    tokio::time::timeout(timeout, tcp(host, port))
        .await
        .map_err(|_| Error::timeout(format!("connect {}:{}", host, port), timeout.as_millis() as u64))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_connects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4];
            socket.read_exact(&mut buf).await.unwrap();
            buf
        });

        let mut stream = tcp("127.0.0.1", port).await.unwrap();
        stream.write_all(b"ping").await.unwrap();
        assert_eq!(&server.await.unwrap(), b"ping");
    }

    #[tokio::test]
    async fn test_tcp_refused() {
        // Bind then drop to get a port nobody listens on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = tcp("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, Error::Connect { port: p, .. } if p == port));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_tcp_with_timeout_connects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let stream = tcp_with_timeout("127.0.0.1", port, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(stream.peer_addr().unwrap().port(), port);
    }
}
