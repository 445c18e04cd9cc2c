//! UDP transport for status payloads
//!
//! One unconnected socket, one `send_to` per tick. Best-effort: a failed
//! send is reported as a value and the socket stays usable.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use tracing::debug;

/// Errors raised by the datagram transport.
#[derive(Debug, thiserror::Error)]
pub enum SenderError {
    #[error("failed to open UDP socket: {0}")]
    Socket(#[source] io::Error),
    #[error("UDP send error: {0}")]
    Send(#[source] io::Error),
    #[error("send on closed socket")]
    Closed,
}

/// Sink for formatted status payloads.
///
/// The beacon loop talks to this trait so tests can substitute a spy.
pub trait StatusSink {
    fn send(&mut self, payload: &[u8]) -> Result<usize, SenderError>;
    fn close(&mut self);
}

/// Fire-and-forget UDP sender toward a fixed destination.
pub struct DatagramSender {
    socket: Option<UdpSocket>,
    dest: SocketAddr,
}

impl DatagramSender {
    /// Bind an unconnected socket and resolve the destination endpoint.
    pub fn open(host: &str, port: u16) -> Result<Self, SenderError> {
        let dest = (host, port)
            .to_socket_addrs()
            .map_err(SenderError::Socket)?
            .next()
            .ok_or_else(|| {
                SenderError::Socket(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "destination resolved to no address",
                ))
            })?;

        let socket = UdpSocket::bind(("0.0.0.0", 0)).map_err(SenderError::Socket)?;
        debug!("UDP socket bound, destination {}", dest);

        Ok(Self {
            socket: Some(socket),
            dest,
        })
    }
}

impl StatusSink for DatagramSender {
    fn send(&mut self, payload: &[u8]) -> Result<usize, SenderError> {
        let socket = self.socket.as_ref().ok_or(SenderError::Closed)?;
        socket.send_to(payload, self.dest).map_err(SenderError::Send)
    }

    fn close(&mut self) {
        if self.socket.take().is_some() {
            debug!("UDP socket released");
        }
    }
}
