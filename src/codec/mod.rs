// Codec Module
// Text <-> numeric block conversion

pub mod text;

pub use text::{decode, encode, Block, BlockEncoding, CipherMessage, EncodedMessage, Message, TextMapping};
