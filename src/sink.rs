//! Outbound datagram transport

use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::{info, trace};

use crate::datagram::Datagram;
use crate::{BridgeError, Result};

/// Fire-and-forget destination for encoded snapshots.
///
/// A send either hands the datagram to the transport or fails; there is no
/// acknowledgement and no retry of a specific datagram.
#[async_trait::async_trait]
pub trait DatagramSink: Send {
    async fn send(&mut self, datagram: &Datagram) -> Result<()>;
}

/// UDP socket bound once at startup and reused for every send.
pub struct UdpSink {
    socket: UdpSocket,
}

impl UdpSink {
    /// Bind an ephemeral local port on all IPv4 interfaces.
    pub async fn bind() -> Result<Self> {
        Self::bind_to(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))).await
    }

    /// Bind to a specific local address.
    pub async fn bind_to(local: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(local).await.map_err(|e| {
            BridgeError::connection_failed_with_source(
                format!("failed to bind UDP socket on {local}"),
                Box::new(e),
            )
        })?;
        if let Ok(addr) = socket.local_addr() {
            info!(local = %addr, "UDP sink bound");
        }
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| BridgeError::connection_failed_with_source("UDP socket", Box::new(e)))
    }
}

#[async_trait::async_trait]
impl DatagramSink for UdpSink {
    async fn send(&mut self, datagram: &Datagram) -> Result<()> {
        let destination = datagram.destination();
        let sent = self
            .socket
            .send_to(datagram.payload(), destination)
            .await
            .map_err(|e| BridgeError::send_failed(destination, e))?;
        trace!(bytes = sent, %destination, "Datagram sent");
        Ok(())
    }
}
