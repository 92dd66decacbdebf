// Math Module
// Number theory shared by both cryptosystems

pub mod bigint;
pub mod prime;

pub use bigint::{extended_gcd, from_u64, gcd, is_coprime, mod_inverse, mod_mul, mod_pow, BigNum};
pub use prime::{generate_primes_in_range, is_prime, PrimeSource};
