use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

/// Accepts the next connection, skipping failures that only affect a single
/// connection; listener-level errors are returned and are fatal.
pub async fn accept(listener: &mut TcpListener) -> Result<(TcpStream, SocketAddr), io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                stream.set_nodelay(true)?;
                return Ok((stream, addr));
            }
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}

trait IoErrorExt {
    fn applies_to(&self) -> AppliesTo;
}

impl IoErrorExt for io::Error {
    fn applies_to(&self) -> AppliesTo {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset => AppliesTo::Connection,
            _ => AppliesTo::Listener,
        }
    }
}

enum AppliesTo {
    Connection,
    Listener,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_are_not_fatal() {
        for kind in [
            io::ErrorKind::ConnectionRefused,
            io::ErrorKind::ConnectionAborted,
            io::ErrorKind::ConnectionReset,
        ] {
            assert!(matches!(
                io::Error::from(kind).applies_to(),
                AppliesTo::Connection
            ));
        }
    }

    #[test]
    fn listener_errors_are_fatal() {
        for kind in [io::ErrorKind::AddrInUse, io::ErrorKind::PermissionDenied] {
            assert!(matches!(
                io::Error::from(kind).applies_to(),
                AppliesTo::Listener
            ));
        }
    }
}
