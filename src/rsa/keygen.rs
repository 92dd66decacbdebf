// RSA Key Generation
// Derives the modulus and the exponent pair from two small primes

use log::{debug, trace};
use num_traits::{One, Zero};
use rand::Rng;

use crate::config::RsaConfig;
use crate::error::{CryptoError, Result};
use crate::math::bigint::{from_u64, is_coprime, mod_inverse, BigNum};

/// One half of an RSA key pair: a modulus and an exponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub modulus: BigNum,
    pub exponent: BigNum,
}

/// RSA key pair.
///
/// The exponent found by the coprimality search sits in `decryption_key`; its
/// inverse modulo the totient is the exponent messages are encrypted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub encryption_key: RsaKey,
    pub decryption_key: RsaKey,
    /// Euler's totient (p-1)(q-1)
    pub totient: BigNum,
}

impl RsaKeyPair {
    pub fn modulus(&self) -> &BigNum {
        &self.encryption_key.modulus
    }
}

/// Draw exponent candidates until one is coprime with `totient`.
///
/// Fails with `KeySearchExhausted` after `config.max_exponent_attempts` draws.
pub fn find_exponent<R: Rng + ?Sized>(
    totient: &BigNum,
    config: &RsaConfig,
    rng: &mut R,
) -> Result<BigNum> {
    if config.exponent_low > config.exponent_high {
        return Err(CryptoError::EmptyExponentRange {
            low: from_u64(config.exponent_low),
            high: from_u64(config.exponent_high),
        });
    }

    for attempt in 0..config.max_exponent_attempts {
        let candidate = from_u64(rng.gen_range(config.exponent_low..=config.exponent_high));
        if candidate > BigNum::one() && is_coprime(&candidate, totient) {
            trace!("exponent {} accepted after {} attempts", candidate, attempt + 1);
            return Ok(candidate);
        }
    }

    Err(CryptoError::KeySearchExhausted {
        attempts: config.max_exponent_attempts,
    })
}

/// Generate an RSA key pair from primes `p` and `q`
pub fn generate_keypair<R: Rng + ?Sized>(
    p: &BigNum,
    q: &BigNum,
    config: &RsaConfig,
    rng: &mut R,
) -> Result<RsaKeyPair> {
    let totient = totient(p, q);
    let e = find_exponent(&totient, config, rng)?;
    keypair_with_exponent(p, q, &e)
}

/// Generate an RSA key pair from primes `p` and `q` and a chosen exponent `e`
pub fn keypair_with_exponent(p: &BigNum, q: &BigNum, e: &BigNum) -> Result<RsaKeyPair> {
    // Step 1: Compute n = p * q
    let n = p * q;

    // Step 2: Compute φ(n) = (p-1)(q-1)
    let totient = totient(p, q);

    // Step 3: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(e, &totient)?;

    debug!("derived RSA modulus {} with totient {}", n, totient);
    trace!("RSA exponents e={} d={}", e, d);

    Ok(RsaKeyPair {
        encryption_key: RsaKey {
            modulus: n.clone(),
            exponent: d,
        },
        decryption_key: RsaKey {
            modulus: n,
            exponent: e.clone(),
        },
        totient,
    })
}

fn totient(p: &BigNum, q: &BigNum) -> BigNum {
    if p.is_zero() || q.is_zero() {
        return BigNum::zero();
    }
    (p - 1u8) * (q - 1u8)
}
