// ElGamal Key Generation
// Primitive element search, private exponent choice and beta = g^d mod p

use std::collections::HashSet;

use log::{debug, trace};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ElGamalConfig;
use crate::error::{CryptoError, Result};
use crate::math::bigint::{from_u64, mod_mul, mod_pow, BigNum};

/// ElGamal public key (p, g, beta)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    pub prime: BigNum,
    pub generator: BigNum,
    pub beta: BigNum,
}

/// ElGamal private key d
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPrivateKey {
    pub exponent: BigNum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalKeyPair {
    pub public: ElGamalPublicKey,
    pub private: ElGamalPrivateKey,
}

/// Returns `true` if the powers `candidate^1 .. candidate^(prime-1)` hit every
/// nonzero residue modulo `prime` exactly once.
pub fn is_primitive_element(candidate: &BigNum, prime: &BigNum) -> Result<bool> {
    if prime.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }

    let base = candidate % prime;
    let mut seen = HashSet::new();
    let mut power = BigNum::one() % prime;
    let mut exponent = BigNum::one();

    while &exponent < prime {
        power = mod_mul(&power, &base, prime)?;
        if power.is_zero() || !seen.insert(power.clone()) {
            return Ok(false);
        }
        exponent += 1u8;
    }

    Ok(true)
}

/// Every primitive element of the multiplicative group modulo `prime`.
///
/// At most `max_candidates` candidates from `[1, prime)` are checked, each in
/// O(prime) steps. Fails with `NoPrimitiveElement` when none qualifies.
pub fn primitive_elements(prime: &BigNum, max_candidates: usize) -> Result<Vec<BigNum>> {
    let mut found = Vec::new();
    let mut candidate = BigNum::one();
    let mut checked = 0usize;

    while &candidate < prime && checked < max_candidates {
        if is_primitive_element(&candidate, prime)? {
            trace!("{} generates the group modulo {}", candidate, prime);
            found.push(candidate.clone());
        }
        candidate += 1u8;
        checked += 1;
    }

    if found.is_empty() {
        return Err(CryptoError::NoPrimitiveElement {
            prime: prime.clone(),
        });
    }

    Ok(found)
}

/// Pick one primitive element modulo `prime` uniformly at random
pub fn find_generator<R: Rng + ?Sized>(
    prime: &BigNum,
    max_candidates: usize,
    rng: &mut R,
) -> Result<BigNum> {
    let generators = primitive_elements(prime, max_candidates)?;
    generators
        .choose(rng)
        .cloned()
        .ok_or_else(|| CryptoError::NoPrimitiveElement {
            prime: prime.clone(),
        })
}

/// Pick the private exponent uniformly from `[2, prime - 2]`
pub fn choose_private_exponent<R: Rng + ?Sized>(prime: &BigNum, rng: &mut R) -> Result<BigNum> {
    let low = from_u64(2);
    let high = if prime >= &low { prime - 2u8 } else { BigNum::zero() };

    if high < low {
        return Err(CryptoError::EmptyExponentRange { low, high });
    }

    Ok(rng.gen_biguint_range(&low, &(high + 1u8)))
}

/// Generate an ElGamal key pair over `prime`
pub fn generate_keypair<R: Rng + ?Sized>(
    prime: &BigNum,
    config: &ElGamalConfig,
    rng: &mut R,
) -> Result<ElGamalKeyPair> {
    // Step 1: Choose a primitive element g of Z*p
    let generator = find_generator(prime, config.max_generator_candidates, rng)?;

    // Step 2: Choose d from {2, ..., p-2}
    let exponent = choose_private_exponent(prime, rng)?;

    debug!("ElGamal group modulo {} with generator {}", prime, generator);
    keypair_from_parts(prime, &generator, &exponent)
}

/// Build a key pair from a known prime, generator and private exponent
pub fn keypair_from_parts(
    prime: &BigNum,
    generator: &BigNum,
    exponent: &BigNum,
) -> Result<ElGamalKeyPair> {
    // Step 3: Compute beta = g^d mod p
    let beta = mod_pow(generator, exponent, prime)?;

    Ok(ElGamalKeyPair {
        public: ElGamalPublicKey {
            prime: prime.clone(),
            generator: generator.clone(),
            beta,
        },
        private: ElGamalPrivateKey {
            exponent: exponent.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::prime::PrimeSource;
    use num_traits::ToPrimitive;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nums(values: &[u64]) -> Vec<BigNum> {
        values.iter().map(|&v| from_u64(v)).collect()
    }

    #[test]
    fn test_primitive_elements_mod_23() {
        let generators = primitive_elements(&from_u64(23), 10_000).unwrap();
        assert_eq!(generators, nums(&[5, 7, 10, 11, 14, 15, 17, 19, 20, 21]));
    }

    #[test]
    fn test_is_primitive_element() {
        assert!(is_primitive_element(&from_u64(5), &from_u64(23)).unwrap());
        // 2 has order 11 modulo 23
        assert!(!is_primitive_element(&from_u64(2), &from_u64(23)).unwrap());
        assert!(!is_primitive_element(&from_u64(23), &from_u64(23)).unwrap());
        assert_eq!(
            is_primitive_element(&from_u64(2), &BigNum::zero()),
            Err(CryptoError::DivisionByZero)
        );
    }

    #[test]
    fn test_smallest_prime() {
        // Z*2 = {1}, generated by 1
        assert_eq!(primitive_elements(&from_u64(2), 10_000).unwrap(), nums(&[1]));

        let mut rng = StdRng::seed_from_u64(3);
        let result = generate_keypair(&from_u64(2), &ElGamalConfig::default(), &mut rng);
        assert!(matches!(result, Err(CryptoError::EmptyExponentRange { .. })));
    }

    #[test]
    fn test_no_primitive_element() {
        // Z*8 is not cyclic
        assert_eq!(
            primitive_elements(&from_u64(8), 10_000),
            Err(CryptoError::NoPrimitiveElement { prime: from_u64(8) })
        );
        assert_eq!(
            primitive_elements(&from_u64(1), 10_000),
            Err(CryptoError::NoPrimitiveElement { prime: from_u64(1) })
        );
    }

    #[test]
    fn test_candidate_cap() {
        // The smallest generator modulo 23 is 5
        assert_eq!(
            primitive_elements(&from_u64(23), 4),
            Err(CryptoError::NoPrimitiveElement { prime: from_u64(23) })
        );
        assert_eq!(primitive_elements(&from_u64(23), 5).unwrap(), nums(&[5]));
    }

    #[test]
    fn test_textbook_keypair() {
        let keypair = keypair_from_parts(&from_u64(23), &from_u64(5), &from_u64(6)).unwrap();
        assert_eq!(keypair.public.beta, from_u64(8));
        assert_eq!(keypair.private.exponent, from_u64(6));
    }

    #[test]
    fn test_private_exponent_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let d = choose_private_exponent(&from_u64(5), &mut rng).unwrap();
            assert!(d == from_u64(2) || d == from_u64(3));
        }
        assert!(matches!(
            choose_private_exponent(&from_u64(3), &mut rng),
            Err(CryptoError::EmptyExponentRange { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_generated_keypair_is_consistent(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let prime = PrimeSource::new(5, 120).choose(&mut rng).unwrap();
            let keypair = generate_keypair(&prime, &ElGamalConfig::default(), &mut rng).unwrap();
            let public = &keypair.public;

            prop_assert_eq!(
                mod_pow(&public.generator, &keypair.private.exponent, &prime).unwrap(),
                public.beta.clone()
            );

            let p = prime.to_u64().unwrap();
            let mut powers: Vec<BigNum> = (1..p)
                .map(|y| mod_pow(&public.generator, &from_u64(y), &prime).unwrap())
                .collect();
            powers.sort();
            let expected: Vec<BigNum> = (1..p).map(from_u64).collect();
            prop_assert_eq!(powers, expected);
        }
    }
}
