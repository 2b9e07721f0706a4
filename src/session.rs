// Leaker and Reporter roles
// Each side holds one key half and talks to the transport through a Listener

use log::{debug, info};

use crate::error::Result;
use crate::rsa::{decrypt, encrypt, CipherInteger, PrivateKey, PublicKey};
use crate::transport::Listener;

/// Encrypt `message` for the key holder and hand it to `sink`
///
/// Nothing reaches the sink if the message is too long for the key.
pub fn leak<L: Listener + ?Sized>(message: &str, public_key: &PublicKey, sink: &mut L) -> Result<()> {
    let ciphertext = encrypt(message, public_key)?;
    sink.report(&ciphertext)?;
    info!("leaked {} byte message", message.len());
    Ok(())
}

/// Decrypts reported ciphertexts and passes the plaintext on
///
/// Decryption failures are returned to whoever reported the ciphertext; a
/// receive loop logs them and keeps going.
pub struct Reporter<F> {
    private_key: PrivateKey,
    on_message: F,
}

impl<F> Reporter<F>
where
    F: FnMut(String),
{
    pub fn new(private_key: PrivateKey, on_message: F) -> Self {
        Self {
            private_key,
            on_message,
        }
    }
}

impl<F> Listener for Reporter<F>
where
    F: FnMut(String),
{
    fn report(&mut self, ciphertext: &CipherInteger) -> Result<()> {
        let plaintext = decrypt(ciphertext, &self.private_key)?;
        debug!("decrypted {} byte message", plaintext.len());
        (self.on_message)(plaintext);
        Ok(())
    }
}
