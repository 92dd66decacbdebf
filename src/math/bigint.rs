// Modular Arithmetic
// Exponentiation, gcd and inverses over num-bigint, shared by RSA and ElGamal

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{CryptoError, Result};

/// Big integer type used throughout the pipeline
pub type BigNum = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigNum {
    BigNum::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &BigNum, exp: &BigNum, modulus: &BigNum) -> Result<BigNum> {
    if modulus.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }
    if modulus.is_one() {
        return Ok(BigNum::zero());
    }

    let mut result = BigNum::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Modular multiplication: (a * b) mod modulus
pub fn mod_mul(a: &BigNum, b: &BigNum, modulus: &BigNum) -> Result<BigNum> {
    if modulus.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }
    Ok((a * b) % modulus)
}

/// Greatest common divisor, gcd(0, 0) = 0
pub fn gcd(a: &BigNum, b: &BigNum) -> BigNum {
    a.gcd(b)
}

/// Returns true when gcd(a, b) = 1
pub fn is_coprime(a: &BigNum, b: &BigNum) -> bool {
    gcd(a, b).is_one()
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd(a, b)
pub fn extended_gcd(a: &BigNum, b: &BigNum) -> (BigNum, BigInt, BigInt) {
    let mut old_r = BigInt::from(a.clone());
    let mut r = BigInt::from(b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        // Both remainders stay non-negative, so truncating division is floor division
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r.magnitude().clone(), old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m
/// Fails with NoInverse when gcd(a, m) != 1
pub fn mod_inverse(a: &BigNum, m: &BigNum) -> Result<BigNum> {
    if m.is_zero() {
        return Err(CryptoError::DivisionByZero);
    }

    let (g, x, _) = extended_gcd(a, m);
    if !g.is_one() {
        return Err(CryptoError::NoInverse {
            value: a.clone(),
            modulus: m.clone(),
        });
    }

    let m_signed = BigInt::from(m.clone());
    Ok(x.mod_floor(&m_signed).magnitude().clone())
}
