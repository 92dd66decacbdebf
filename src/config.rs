// Pipeline Configuration
// Search ranges, retry caps and codec choices for both schemes

use crate::codec::{BlockEncoding, TextMapping};

/// Configuration for the RSA pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaConfig {
    /// Primes are drawn from `[prime_low, prime_high)`
    pub prime_low: u64,
    pub prime_high: u64,
    /// Exponent candidates are drawn from `[exponent_low, exponent_high]`
    pub exponent_low: u64,
    pub exponent_high: u64,
    pub max_exponent_attempts: usize,
    pub encoding: BlockEncoding,
    pub mapping: TextMapping,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            prime_low: 2,
            prime_high: 201,
            exponent_low: 2,
            exponent_high: 100,
            max_exponent_attempts: 1000,
            encoding: BlockEncoding::CodePoint,
            mapping: TextMapping::CasePreserving,
        }
    }
}

impl RsaConfig {
    pub fn with_prime_range(mut self, low: u64, high: u64) -> Self {
        self.prime_low = low;
        self.prime_high = high;
        self
    }

    pub fn with_exponent_range(mut self, low: u64, high: u64) -> Self {
        self.exponent_low = low;
        self.exponent_high = high;
        self
    }

    pub fn with_max_exponent_attempts(mut self, attempts: usize) -> Self {
        self.max_exponent_attempts = attempts;
        self
    }

    pub fn with_encoding(mut self, encoding: BlockEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_mapping(mut self, mapping: TextMapping) -> Self {
        self.mapping = mapping;
        self
    }
}

/// Configuration for the ElGamal pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalConfig {
    /// Primes are drawn from `[prime_low, prime_high)`
    pub prime_low: u64,
    pub prime_high: u64,
    /// Upper bound on candidates checked during the primitive element search
    pub max_generator_candidates: usize,
    pub encoding: BlockEncoding,
    pub mapping: TextMapping,
}

impl Default for ElGamalConfig {
    fn default() -> Self {
        Self {
            // [2, p - 2] must hold a private exponent, which needs p >= 5
            prime_low: 5,
            prime_high: 500,
            max_generator_candidates: 10_000,
            encoding: BlockEncoding::CodePoint,
            mapping: TextMapping::CasePreserving,
        }
    }
}

impl ElGamalConfig {
    pub fn with_prime_range(mut self, low: u64, high: u64) -> Self {
        self.prime_low = low;
        self.prime_high = high;
        self
    }

    pub fn with_max_generator_candidates(mut self, candidates: usize) -> Self {
        self.max_generator_candidates = candidates;
        self
    }

    pub fn with_encoding(mut self, encoding: BlockEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_mapping(mut self, mapping: TextMapping) -> Self {
        self.mapping = mapping;
        self
    }
}

/// Top-level configuration: an optional RNG seed plus per-scheme settings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub seed: Option<u64>,
    pub rsa: RsaConfig,
    pub elgamal: ElGamalConfig,
}

impl PipelineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rsa(mut self, rsa: RsaConfig) -> Self {
        self.rsa = rsa;
        self
    }

    pub fn with_elgamal(mut self, elgamal: ElGamalConfig) -> Self {
        self.elgamal = elgamal;
        self
    }
}
