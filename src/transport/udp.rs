// UDP Transport
// One datagram per ciphertext, no acknowledgement and no retry

use std::net::{SocketAddr, UdpSocket};

use log::{debug, info, warn};

use super::datagram::DatagramCodec;
use super::Listener;
use crate::error::Result;
use crate::rsa::CipherInteger;

/// Sends every reported ciphertext to a fixed destination
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
    destination: SocketAddr,
    codec: DatagramCodec,
}

impl UdpSink {
    pub fn new(socket: UdpSocket, destination: SocketAddr, codec: DatagramCodec) -> Self {
        Self {
            socket,
            destination,
            codec,
        }
    }
}

impl Listener for UdpSink {
    fn report(&mut self, ciphertext: &CipherInteger) -> Result<()> {
        let payload = self.codec.encode(ciphertext)?;
        let sent = self.socket.send_to(&payload, self.destination)?;
        debug!(
            "sent {sent} byte datagram to {} ({}..)",
            self.destination,
            hex::encode(&payload[..payload.len().min(8)])
        );
        Ok(())
    }
}

/// Receives datagrams and hands each decoded ciphertext to a listener
#[derive(Debug)]
pub struct UdpSource {
    socket: UdpSocket,
    codec: DatagramCodec,
}

impl UdpSource {
    pub fn new(socket: UdpSocket, codec: DatagramCodec) -> Self {
        Self { socket, codec }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Block for one datagram and dispatch it
    ///
    /// Returns the sender's address once the listener has accepted the
    /// ciphertext.
    pub fn receive<L: Listener + ?Sized>(&self, listener: &mut L) -> Result<SocketAddr> {
        let mut buffer = vec![0u8; self.codec.buffer_len()];
        let (len, peer) = self.socket.recv_from(&mut buffer)?;
        debug!("received {len} byte datagram from {peer}");

        let ciphertext = self.codec.decode(&buffer[..len])?;
        listener.report(&ciphertext)?;
        Ok(peer)
    }

    /// Receive forever; a bad datagram is logged and dropped
    pub fn run<L: Listener + ?Sized>(&self, listener: &mut L) -> ! {
        match self.socket.local_addr() {
            Ok(addr) => info!("listening on {addr}"),
            Err(err) => warn!("listening on unknown address: {err}"),
        }

        loop {
            if let Err(err) = self.receive(listener) {
                warn!("dropping datagram: {err}");
            }
        }
    }
}
