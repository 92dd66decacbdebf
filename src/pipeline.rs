// Encryption Pipeline
// Prime selection -> key derivation -> encoding -> block encryption -> text mapping

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::codec::{self, CipherMessage};
use crate::config::PipelineConfig;
use crate::elgamal::{self, ElGamalKeyPair, EphemeralKey};
use crate::error::Result;
use crate::math::bigint::BigNum;
use crate::math::prime::PrimeSource;
use crate::rsa::{self, RsaKeyPair};

/// Everything produced by one RSA run
#[derive(Debug, Clone)]
pub struct RsaOutcome {
    pub primes: (BigNum, BigNum),
    pub keys: RsaKeyPair,
    pub blocks: CipherMessage,
    pub ciphertext: String,
}

/// Everything produced by one ElGamal run. The ephemeral key is not kept.
#[derive(Debug, Clone)]
pub struct ElGamalOutcome {
    pub keys: ElGamalKeyPair,
    pub blocks: CipherMessage,
    pub ciphertext: String,
}

/// Runs both schemes from a single, explicitly owned random source
pub struct Pipeline {
    config: PipelineConfig,
    rng: StdRng,
}

impl Pipeline {
    /// Seeds the RNG from `config.seed`, or from OS entropy when unset
    pub fn new(config: PipelineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn rsa_encrypt(&mut self, plaintext: &str) -> Result<RsaOutcome> {
        let config = &self.config.rsa;
        let message = codec::encode(plaintext, config.encoding)?;

        let (p, q) = PrimeSource::new(config.prime_low, config.prime_high).choose_pair(&mut self.rng)?;
        let keys = rsa::generate_keypair(&p, &q, config, &mut self.rng)?;

        let blocks = rsa::encrypt_message(&message, &keys.encryption_key)?;
        let ciphertext = codec::decode(&blocks, config.mapping);
        debug!("RSA encrypted {} letters under modulus {}", blocks.len(), keys.modulus());

        Ok(RsaOutcome {
            primes: (p, q),
            keys,
            blocks,
            ciphertext,
        })
    }

    pub fn rsa_encrypt_text(&mut self, plaintext: &str) -> Result<String> {
        self.rsa_encrypt(plaintext).map(|outcome| outcome.ciphertext)
    }

    pub fn elgamal_encrypt(&mut self, plaintext: &str) -> Result<ElGamalOutcome> {
        let config = &self.config.elgamal;
        let message = codec::encode(plaintext, config.encoding)?;

        let prime = PrimeSource::new(config.prime_low, config.prime_high).choose(&mut self.rng)?;
        let keys = elgamal::generate_keypair(&prime, config, &mut self.rng)?;

        // Fresh for this message and dropped once it is consumed
        let ephemeral = EphemeralKey::generate(&prime, &mut self.rng)?;
        let blocks = elgamal::encrypt_message(&message, ephemeral, &prime)?;
        let ciphertext = codec::decode(&blocks, config.mapping);
        debug!("ElGamal masked {} letters modulo {}", blocks.len(), prime);

        Ok(ElGamalOutcome {
            keys,
            blocks,
            ciphertext,
        })
    }

    pub fn elgamal_encrypt_text(&mut self, plaintext: &str) -> Result<String> {
        self.elgamal_encrypt(plaintext).map(|outcome| outcome.ciphertext)
    }
}

/// Encrypt `plaintext` with RSA under the default configuration
pub fn rsa_encrypt_text(plaintext: &str) -> Result<String> {
    Pipeline::new(PipelineConfig::default()).rsa_encrypt_text(plaintext)
}

/// Encrypt `plaintext` with ElGamal under the default configuration
pub fn elgamal_encrypt_text(plaintext: &str) -> Result<String> {
    Pipeline::new(PipelineConfig::default()).elgamal_encrypt_text(plaintext)
}
