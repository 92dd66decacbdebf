// Error Types
// Every stage of the pipeline reports failures through CryptoError

use crate::math::bigint::BigNum;

/// Errors that can occur while generating keys or encrypting text.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("no prime exists in the range [{low}, {high})")]
    EmptyRange { low: u64, high: u64 },

    #[error("need {needed} distinct primes in [{low}, {high}), found {found}")]
    NotEnoughPrimes {
        needed: usize,
        found: usize,
        low: u64,
        high: u64,
    },

    #[error("modulus must be non-zero")]
    DivisionByZero,

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigNum, modulus: BigNum },

    #[error("no coprime exponent found after {attempts} attempts")]
    KeySearchExhausted { attempts: usize },

    #[error("no primitive element found modulo {prime}")]
    NoPrimitiveElement { prime: BigNum },

    #[error("exponent range [{low}, {high}] is empty")]
    EmptyExponentRange { low: BigNum, high: BigNum },

    #[error("no ephemeral key coprime to {prime} - 1 exists")]
    NoEphemeralKey { prime: BigNum },

    #[error("{value} is not a valid ephemeral key for prime {prime}")]
    InvalidEphemeralKey { value: BigNum, prime: BigNum },

    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, CryptoError>;
