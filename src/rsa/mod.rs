// RSA Module - Main module file
// Exports key derivation and block encryption

pub mod encrypt;
pub mod keygen;

pub use encrypt::{encrypt_block, encrypt_message};
pub use keygen::{find_exponent, generate_keypair, keypair_with_exponent, RsaKey, RsaKeyPair};
