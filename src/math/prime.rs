// Prime Source
// Trial-division prime search over small bounded ranges, with random selection

use log::{debug, trace};
use num_traits::Zero;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use super::bigint::{from_u64, BigNum};
use crate::error::{CryptoError, Result};

/// Returns `true` if `n` has no divisor in `[2, sqrt(n)]`.
///
/// Only meant for the small values this crate works with; the cost grows with
/// the square root of `n`.
pub fn is_prime(n: &BigNum) -> bool {
    let two = from_u64(2);
    if n < &two {
        return false;
    }

    let mut divisor = two;
    while &(&divisor * &divisor) <= n {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += 1u8;
    }

    true
}

/// All primes in the half-open range `[low, high)`, in ascending order.
///
/// Fails with `EmptyRange` when the range holds no prime.
pub fn generate_primes_in_range(low: u64, high: u64) -> Result<Vec<BigNum>> {
    let primes: Vec<BigNum> = (low..high)
        .map(from_u64)
        .filter(is_prime)
        .collect();

    if primes.is_empty() {
        return Err(CryptoError::EmptyRange { low, high });
    }

    trace!("found {} primes in [{}, {})", primes.len(), low, high);
    Ok(primes)
}

/// A bounded range `[low, high)` that primes are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeSource {
    pub low: u64,
    pub high: u64,
}

impl PrimeSource {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Every prime in the range
    pub fn primes(&self) -> Result<Vec<BigNum>> {
        generate_primes_in_range(self.low, self.high)
    }

    /// Pick one prime uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BigNum> {
        let primes = self.primes()?;
        let prime = primes
            .choose(rng)
            .cloned()
            .ok_or(CryptoError::EmptyRange {
                low: self.low,
                high: self.high,
            })?;

        debug!("selected prime {} from [{}, {})", prime, self.low, self.high);
        Ok(prime)
    }

    /// Pick two distinct primes uniformly at random
    pub fn choose_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(BigNum, BigNum)> {
        let primes = self.primes()?;
        if primes.len() < 2 {
            return Err(CryptoError::NotEnoughPrimes {
                needed: 2,
                found: primes.len(),
                low: self.low,
                high: self.high,
            });
        }

        let picked = index::sample(rng, primes.len(), 2);
        let p = primes[picked.index(0)].clone();
        let q = primes[picked.index(1)].clone();

        debug!("selected primes p={} q={} from [{}, {})", p, q, self.low, self.high);
        Ok((p, q))
    }
}
