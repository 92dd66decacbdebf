// ElGamal Encryption
// Multiplicative masking of letter blocks under a single-use ephemeral key

use log::trace;
use num_traits::{One, Zero};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::codec::{CipherMessage, EncodedMessage};
use crate::error::{CryptoError, Result};
use crate::math::bigint::{is_coprime, mod_mul, BigNum};

/// Ephemeral key k with `1 <= k < prime - 1` and `gcd(k, prime - 1) = 1`.
///
/// Not `Clone`: encrypting consumes the key, so one key masks one message.
#[derive(Debug, PartialEq, Eq)]
pub struct EphemeralKey {
    value: BigNum,
}

impl EphemeralKey {
    /// Draw a fresh key uniformly from every valid candidate for `prime`
    pub fn generate<R: Rng + ?Sized>(prime: &BigNum, rng: &mut R) -> Result<Self> {
        let candidates = Self::candidates(prime);
        let value = candidates
            .choose(rng)
            .cloned()
            .ok_or_else(|| CryptoError::NoEphemeralKey {
                prime: prime.clone(),
            })?;

        trace!("ephemeral key drawn from {} candidates", candidates.len());
        Ok(Self { value })
    }

    /// Wrap a known value, checking it is valid for `prime`
    pub fn from_value(value: BigNum, prime: &BigNum) -> Result<Self> {
        if !Self::is_valid(&value, prime) {
            return Err(CryptoError::InvalidEphemeralKey {
                value,
                prime: prime.clone(),
            });
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> &BigNum {
        &self.value
    }

    fn is_valid(value: &BigNum, prime: &BigNum) -> bool {
        if prime < &BigNum::from(2u8) {
            return false;
        }
        let order = prime - 1u8;
        !value.is_zero() && value < &order && is_coprime(value, &order)
    }

    fn candidates(prime: &BigNum) -> Vec<BigNum> {
        let mut found = Vec::new();
        if prime < &BigNum::from(2u8) {
            return found;
        }

        let order = prime - 1u8;
        let mut k = BigNum::one();
        while k < order {
            if is_coprime(&k, &order) {
                found.push(k.clone());
            }
            k += 1u8;
        }
        found
    }
}

/// Compute (m * k) mod prime for a single block
pub fn encrypt_block(m: &BigNum, key: &EphemeralKey, prime: &BigNum) -> Result<BigNum> {
    mod_mul(m, key.value(), prime)
}

/// Mask every block of a message with `key`, consuming it
pub fn encrypt_message(
    message: &EncodedMessage,
    key: EphemeralKey,
    prime: &BigNum,
) -> Result<CipherMessage> {
    message.try_map_values(|m| encrypt_block(m, &key, prime))
}
