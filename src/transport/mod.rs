// Transport Module
// Connects ciphertext producers to consumers without tying either to sockets

pub mod datagram;
pub mod udp;

use crate::error::Result;
use crate::rsa::CipherInteger;

pub use datagram::{from_bytes, to_bytes, DatagramCodec, PAYLOAD_MARGIN};
pub use udp::{UdpSink, UdpSource};

/// Anything that can take one ciphertext off the caller's hands
///
/// A sender-side listener transmits it; a receiver-side listener decrypts it.
pub trait Listener {
    fn report(&mut self, ciphertext: &CipherInteger) -> Result<()>;
}

impl<F> Listener for F
where
    F: FnMut(&CipherInteger) -> Result<()>,
{
    fn report(&mut self, ciphertext: &CipherInteger) -> Result<()> {
        self(ciphertext)
    }
}
