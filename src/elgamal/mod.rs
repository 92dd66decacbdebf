// ElGamal Module
// Exports group setup, key derivation and the masking cipher

pub mod encrypt;
pub mod keygen;

pub use encrypt::{encrypt_block, encrypt_message, EphemeralKey};
pub use keygen::{
    find_generator, generate_keypair, is_primitive_element, keypair_from_parts,
    primitive_elements, ElGamalKeyPair, ElGamalPrivateKey, ElGamalPublicKey,
};
