// Text Codec
// Converts text into words of numeric blocks and maps numeric blocks back to letters

use std::fmt;

use num_traits::ToPrimitive;

use crate::error::{CryptoError, Result};
use crate::math::bigint::{from_u64, BigNum};

/// Size of the alphabet each case range maps onto
const ALPHABET_LEN: u64 = 26;

/// One letter's numeric value plus its case flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub value: BigNum,
    pub uppercase: bool,
}

impl Block {
    pub fn new(value: BigNum, uppercase: bool) -> Self {
        Self { value, uppercase }
    }
}

/// Ordered words of ordered blocks.
///
/// Encoding produces one with character codes; the ciphers produce one with
/// transformed values in the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub words: Vec<Vec<Block>>,
}

/// Message straight out of the encoder
pub type EncodedMessage = Message;

/// Message after a cipher has transformed every block
pub type CipherMessage = Message;

impl Message {
    pub fn new(words: Vec<Vec<Block>>) -> Self {
        Self { words }
    }

    /// Number of letters across all words
    pub fn len(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every block in word order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.words.iter().flatten()
    }

    /// Apply `f` to every block value, keeping word layout and case flags
    pub fn try_map_values<F>(&self, mut f: F) -> Result<Message>
    where
        F: FnMut(&BigNum) -> Result<BigNum>,
    {
        let words = self
            .words
            .iter()
            .map(|word| {
                word.iter()
                    .map(|block| -> Result<Block> { Ok(Block::new(f(&block.value)?, block.uppercase)) })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Message { words })
    }

    /// Hex rendering of the raw block values, words separated by `|`
    pub fn to_hex(&self) -> String {
        self.words
            .iter()
            .map(|word| {
                word.iter()
                    .map(|block| hex::encode(block.value.to_bytes_be()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<String> = self
            .words
            .iter()
            .map(|word| {
                word.iter()
                    .map(|block| {
                        if block.uppercase {
                            format!("{}^", block.value)
                        } else {
                            block.value.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        write!(f, "[{}]", words.join("] ["))
    }
}

/// How a letter becomes a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockEncoding {
    /// The character code itself, `'h'` -> 104
    #[default]
    CodePoint,
    /// The 8-bit binary form read as a decimal number, `'h'` -> 1101000
    BinaryDigits,
}

/// How a number becomes a letter again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMapping {
    /// `value mod 26` into the range selected by the case flag
    #[default]
    CasePreserving,
    /// `value mod 52` over `A..=Z` then `a..=z`, case flag ignored
    Alphabet52,
}

/// Split `text` on whitespace and encode every letter.
///
/// Only ASCII letters and ASCII whitespace are accepted; anything else fails
/// with `UnsupportedCharacter` before any block is produced.
pub fn encode(text: &str, encoding: BlockEncoding) -> Result<EncodedMessage> {
    if let Some((position, character)) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphabetic() && !c.is_ascii_whitespace())
    {
        return Err(CryptoError::UnsupportedCharacter {
            character,
            position,
        });
    }

    let words: Vec<Vec<Block>> = text
        .split_ascii_whitespace()
        .map(|word| {
            word.bytes()
                .map(|byte| Block::new(encode_letter(byte, encoding), byte.is_ascii_uppercase()))
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(Message { words })
}

fn encode_letter(byte: u8, encoding: BlockEncoding) -> BigNum {
    match encoding {
        BlockEncoding::CodePoint => from_u64(u64::from(byte)),
        BlockEncoding::BinaryDigits => from_u64(binary_digits(byte)),
    }
}

/// Reads the 8-bit binary form of `byte` as a base-10 number
fn binary_digits(byte: u8) -> u64 {
    (0..8)
        .rev()
        .fold(0, |acc, bit| acc * 10 + u64::from((byte >> bit) & 1))
}

/// Map every block back to a letter, joining words with single spaces.
///
/// This is not the inverse of `encode`: distinct values sharing a residue
/// decode to the same letter.
pub fn decode(message: &Message, mapping: TextMapping) -> String {
    message
        .words
        .iter()
        .map(|word| word.iter().map(|block| decode_block(block, mapping)).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_block(block: &Block, mapping: TextMapping) -> char {
    match mapping {
        TextMapping::CasePreserving => {
            let offset = residue(&block.value, ALPHABET_LEN);
            let base = if block.uppercase { b'A' } else { b'a' };
            char::from(base + offset)
        }
        TextMapping::Alphabet52 => {
            let offset = residue(&block.value, 2 * ALPHABET_LEN);
            if offset < 26 {
                char::from(b'A' + offset)
            } else {
                char::from(b'a' + (offset - 26))
            }
        }
    }
}

// modulus is at most 52 so the residue always fits in a u8
fn residue(value: &BigNum, modulus: u64) -> u8 {
    (value % modulus).to_u8().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(message: &Message) -> Vec<Vec<u64>> {
        message
            .words
            .iter()
            .map(|word| word.iter().map(|b| b.value.to_u64().unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_encode_code_points() {
        let message = encode("hi There", BlockEncoding::CodePoint).unwrap();
        assert_eq!(values(&message), vec![vec![104, 105], vec![84, 104, 101, 114, 101]]);
        assert!(message.words[1][0].uppercase);
        assert!(!message.words[1][1].uppercase);
        assert_eq!(message.len(), 7);
    }

    #[test]
    fn test_encode_binary_digits() {
        let message = encode("hA", BlockEncoding::BinaryDigits).unwrap();
        assert_eq!(values(&message), vec![vec![1101000, 1000001]]);
    }

    #[test]
    fn test_encode_collapses_whitespace() {
        let message = encode("  ab \t cd  ", BlockEncoding::CodePoint).unwrap();
        assert_eq!(message.words.len(), 2);
    }

    #[test]
    fn test_encode_empty() {
        let message = encode("", BlockEncoding::CodePoint).unwrap();
        assert!(message.is_empty());
        assert_eq!(decode(&message, TextMapping::CasePreserving), "");
    }

    #[test]
    fn test_encode_rejects_unsupported() {
        assert_eq!(
            encode("hi!", BlockEncoding::CodePoint),
            Err(CryptoError::UnsupportedCharacter {
                character: '!',
                position: 2
            })
        );
        assert_eq!(
            encode("a1", BlockEncoding::CodePoint),
            Err(CryptoError::UnsupportedCharacter {
                character: '1',
                position: 1
            })
        );
        assert!(matches!(
            encode("café", BlockEncoding::CodePoint),
            Err(CryptoError::UnsupportedCharacter { character: 'é', position: 3 })
        ));
    }

    #[test]
    fn test_decode_case_preserving() {
        // 'x' = 120, 120 mod 26 = 16 -> 'q'; 'Y' = 89, 89 mod 26 = 11 -> 'L'
        let message = encode("x Y", BlockEncoding::CodePoint).unwrap();
        assert_eq!(decode(&message, TextMapping::CasePreserving), "q L");
    }

    #[test]
    fn test_decode_alphabet52() {
        let message = Message::new(vec![vec![
            Block::new(from_u64(0), false),
            Block::new(from_u64(25), false),
            Block::new(from_u64(26), true),
            Block::new(from_u64(51 + 52), true),
        ]]);
        assert_eq!(decode(&message, TextMapping::Alphabet52), "AZaz");
    }

    #[test]
    fn test_decode_recovers_non_colliding_residues() {
        // values already in 0..26 identify their letter uniquely within a case range
        let message = Message::new(vec![
            vec![Block::new(from_u64(7), false), Block::new(from_u64(8), false)],
            vec![Block::new(from_u64(7), true), Block::new(from_u64(8 + 26), true)],
        ]);
        assert_eq!(decode(&message, TextMapping::CasePreserving), "hi HI");
    }

    #[test]
    fn test_decode_is_lossy() {
        let a = Message::new(vec![vec![Block::new(from_u64(3), false)]]);
        let b = Message::new(vec![vec![Block::new(from_u64(29), false)]]);
        assert_eq!(
            decode(&a, TextMapping::CasePreserving),
            decode(&b, TextMapping::CasePreserving)
        );
    }

    #[test]
    fn test_try_map_values_keeps_shape() {
        let message = encode("ab C", BlockEncoding::CodePoint).unwrap();
        let mapped = message.try_map_values(|v| Ok(v + 1u8)).unwrap();
        assert_eq!(values(&mapped), vec![vec![98, 99], vec![68]]);
        assert!(mapped.words[1][0].uppercase);
    }

    #[test]
    fn test_to_hex_and_display() {
        let message = encode("hi A", BlockEncoding::CodePoint).unwrap();
        assert_eq!(message.to_hex(), "68 69 | 41");
        assert_eq!(message.to_string(), "[104,105] [65^]");
    }
}
