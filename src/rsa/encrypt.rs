// RSA Encryption Implementation
// Raises every letter block to the key exponent modulo the RSA modulus

use crate::codec::{CipherMessage, EncodedMessage};
use crate::error::Result;
use crate::math::bigint::{mod_pow, BigNum};

use super::keygen::RsaKey;

/// Compute c = m^exponent mod modulus for a single block
pub fn encrypt_block(m: &BigNum, key: &RsaKey) -> Result<BigNum> {
    mod_pow(m, &key.exponent, &key.modulus)
}

/// Encrypt every block of a message, keeping word layout and case flags
pub fn encrypt_message(message: &EncodedMessage, key: &RsaKey) -> Result<CipherMessage> {
    message.try_map_values(|m| encrypt_block(m, key))
}

impl RsaKey {
    /// Encrypt a message under this key
    pub fn encrypt(&self, message: &EncodedMessage) -> Result<CipherMessage> {
        encrypt_message(message, self)
    }
}
