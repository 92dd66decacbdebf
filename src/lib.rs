//! # textbook_pk
//!
//! Textbook RSA and ElGamal over small primes, applied to short ASCII text.
//! Both schemes share one pipeline: pick primes, derive keys, encode letters as
//! numbers, transform every number, then map the results back onto letters.
//!
//! The primes are in the hundreds and the final letter mapping is lossy, so
//! ciphertext cannot be decrypted back into the original text. Not for real use.

pub mod codec;
pub mod config;
pub mod elgamal;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod rsa;

pub use config::{ElGamalConfig, PipelineConfig, RsaConfig};
pub use error::{CryptoError, Result};
pub use pipeline::{elgamal_encrypt_text, rsa_encrypt_text, ElGamalOutcome, Pipeline, RsaOutcome};
